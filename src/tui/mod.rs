//! Terminal User Interface
//!
//! Thin ratatui frontend over `GameState`: it renders the case and forwards
//! the player's commands, nothing more.

pub mod app;
pub mod command;
pub mod widgets;

pub use app::App;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Yellow,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::LightYellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
        }
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔════════════════════════════════════════════════════╗
║                                                    ║
║      ██████╗██╗     ██╗   ██╗███████╗              ║
║     ██╔════╝██║     ██║   ██║██╔════╝              ║
║     ██║     ██║     ██║   ██║█████╗                ║
║     ██║     ██║     ██║   ██║██╔══╝                ║
║     ╚██████╗███████╗╚██████╔╝███████╗              ║
║      ╚═════╝╚══════╝ ╚═════╝ ╚══════╝              ║
║                                                    ║
║          Guess the Culprit: Marvel Edition         ║
║                                                    ║
╚════════════════════════════════════════════════════╝
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " MARVEL CLUE ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════════════════════╗
║                          COMMANDS                             ║
╠═══════════════════════════════════════════════════════════════╣
║  ask <who|where|what> <name|#>   Interrogate (costs a clue)   ║
║  ask <name>                      Interrogate by name          ║
║  clue                            Rule out one innocent name   ║
║  guess <who> / <where> / <what>  Final accusation             ║
║  guess 1 3 2                     Accuse by list numbers       ║
║  story   notes   status   clear  new   help                   ║
╠═══════════════════════════════════════════════════════════════╣
║                        QUICK KEYS                             ║
╠═══════════════════════════════════════════════════════════════╣
║  : / Space   Type a command                                   ║
║  a           Start an interrogation                           ║
║  c           Ask for an elimination clue                      ║
║  g           Start the accusation                             ║
║  s           Re-read the opening story                        ║
║  ?           Toggle this help                                 ║
║  Esc         Back / cancel                                    ║
║  q           Quit                                             ║
╚═══════════════════════════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (catalogue panel + console)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(32), // Side panel
            Constraint::Percentage(68), // Console
        ])
        .split(area)
        .to_vec()
}

/// Centered popup area of at most `width` x `height`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_small_areas() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_rect(area, 70, 25);
        assert_eq!(popup, area);

        let popup = centered_rect(Rect::new(0, 0, 100, 40), 60, 20);
        assert_eq!(popup, Rect::new(20, 10, 60, 20));
    }
}
