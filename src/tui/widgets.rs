//! Custom widgets for the game UI

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Remaining clues as a labelled bar
pub struct ClueMeter {
    remaining: u8,
    max: u8,
    color: Color,
    warning_at: u8,
}

impl ClueMeter {
    pub fn new(remaining: u8, max: u8) -> Self {
        Self {
            remaining,
            max,
            color: Color::Green,
            warning_at: 2,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn warning_at(mut self, remaining: u8) -> Self {
        self.warning_at = remaining;
        self
    }
}

impl Widget for ClueMeter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 || self.max == 0 {
            return;
        }

        let color = if self.remaining == 0 {
            Color::Red
        } else if self.remaining <= self.warning_at {
            Color::Yellow
        } else {
            self.color
        };

        let label = format!("Clues available: {}/{}", self.remaining, self.max);
        buf.set_string(area.x, area.y, &label, Style::default().fg(color));

        if area.height > 1 {
            let inner = area.width - 2;
            let filled = (self.remaining.min(self.max) as u16 * inner) / self.max as u16;
            let bar_y = area.y + 1;
            buf.set_string(area.x, bar_y, "[", Style::default());
            buf.set_string(area.x + area.width - 1, bar_y, "]", Style::default());

            for x in 0..filled {
                buf.set_string(area.x + 1 + x, bar_y, "█", Style::default().fg(color));
            }
            for x in filled..inner {
                buf.set_string(area.x + 1 + x, bar_y, "░", Style::default().fg(Color::DarkGray));
            }
        }
    }
}

/// How loud a notice is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warning,
    Error,
}

impl Tone {
    pub fn color(&self) -> Color {
        match self {
            Tone::Info => Color::Cyan,
            Tone::Warning => Color::Yellow,
            Tone::Error => Color::Red,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Tone::Info => "ℹ",
            Tone::Warning => "▲",
            Tone::Error => "●",
        }
    }
}

/// A one-line notice, used for the last rejected command
pub struct Notice<'a> {
    message: &'a str,
    tone: Tone,
}

impl<'a> Notice<'a> {
    pub fn new(message: &'a str, tone: Tone) -> Self {
        Self { message, tone }
    }
}

impl Widget for Notice<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let text = format!("{} {}", self.tone.symbol(), self.message);
        buf.set_stringn(
            area.x,
            area.y,
            &text,
            area.width as usize,
            Style::default().fg(self.tone.color()).add_modifier(Modifier::BOLD),
        );
    }
}

/// Double-lined box for the verdict
pub struct VerdictBox {
    title: String,
    content: Vec<String>,
    border_color: Color,
}

impl VerdictBox {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            border_color: Color::Red,
        }
    }

    pub fn content(mut self, lines: Vec<String>) -> Self {
        self.content = lines;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

impl Widget for VerdictBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        let style = Style::default().fg(self.border_color);
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        buf.set_string(area.x, area.y, "╔", style);
        buf.set_string(area.x, bottom, "╚", style);
        for x in area.x + 1..right {
            buf.set_string(x, area.y, "═", style);
            buf.set_string(x, bottom, "═", style);
        }
        buf.set_string(right, area.y, "╗", style);
        buf.set_string(right, bottom, "╝", style);

        for y in area.y + 1..bottom {
            buf.set_string(area.x, y, "║", style);
            buf.set_string(right, y, "║", style);
        }

        let title = format!(" {} ", self.title);
        let title_width = title.chars().count() as u16;
        if title_width + 2 <= area.width {
            let title_x = area.x + (area.width - title_width) / 2;
            buf.set_string(title_x, area.y, &title, style.add_modifier(Modifier::BOLD));
        }

        let text_width = area.width.saturating_sub(4) as usize;
        for (i, line) in self.content.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= bottom {
                break;
            }
            buf.set_stringn(area.x + 2, y, line, text_width, Style::default().fg(Color::White));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn clue_meter_fills_in_proportion() {
        let area = Rect::new(0, 0, 12, 2);
        let mut buf = Buffer::empty(area);
        ClueMeter::new(5, 5).render(area, &mut buf);
        assert!(row(&buf, 0).starts_with("Clues availa"));
        assert_eq!(row(&buf, 1), "[██████████]");

        let mut buf = Buffer::empty(area);
        ClueMeter::new(0, 5).render(area, &mut buf);
        assert_eq!(row(&buf, 1), "[░░░░░░░░░░]");
    }

    #[test]
    fn verdict_box_draws_title_and_lines() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        VerdictBox::new("CASE")
            .content(vec!["Culprit: X".to_string()])
            .render(area, &mut buf);
        assert!(row(&buf, 0).contains(" CASE "));
        assert!(row(&buf, 1).contains("Culprit: X"));
        assert!(row(&buf, 3).starts_with('╚'));
    }
}
