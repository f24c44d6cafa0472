//! Main application state and rendering

use crate::config::Config;
use crate::data::*;
use crate::game::{GameState, GuessResult, MAX_CLUES};
use crate::tui::command::{self, Command};
use crate::tui::widgets::{ClueMeter, Notice, Tone, VerdictBox};
use crate::tui::{centered_rect, create_content_layout, create_main_layout, styled_block};
use crate::tui::{Theme, HELP_TEXT, LOGO, SMALL_LOGO};
use crate::GameError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;
use tracing::{debug, info};

/// Keep the console scrollback bounded
const MAX_OUTPUT_LINES: usize = 200;

/// Application state
pub struct App {
    /// `None` until the first case is dealt
    pub game: Option<GameState>,
    pub config: Config,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub menu_state: ListState,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub command_history: Vec<String>,
    pub command_output: Vec<String>,
    pub notice: Option<(Tone, String)>,
}

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Title,
    Story,
    Investigation,
    Verdict,
}

/// Input mode for command prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Self {
            game: None,
            config,
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::Title,
            menu_state,
            input_buffer: String::new(),
            input_mode: InputMode::Normal,
            command_history: Vec::new(),
            command_output: Vec::new(),
            notice: None,
        }
    }

    /// Poll for one key event and apply it
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(self.running)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.input_mode == InputMode::Command {
            match key.code {
                KeyCode::Enter => {
                    let line = std::mem::take(&mut self.input_buffer);
                    self.input_mode = InputMode::Normal;
                    self.submit(&line);
                }
                KeyCode::Esc => {
                    self.input_buffer.clear();
                    self.input_mode = InputMode::Normal;
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Esc if self.show_help => self.show_help = false,
            KeyCode::Char('q') => self.running = false,
            _ => match self.current_screen {
                Screen::Title => self.handle_title_key(key.code),
                Screen::Story => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.current_screen = Screen::Investigation;
                    }
                }
                Screen::Investigation => self.handle_investigation_key(key.code),
                Screen::Verdict => match key.code {
                    KeyCode::Enter | KeyCode::Char('n') => self.start_new_game(),
                    KeyCode::Esc => self.current_screen = Screen::Investigation,
                    _ => {}
                },
            },
        }
    }

    fn handle_title_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.navigate(-1),
            KeyCode::Down => self.navigate(1),
            KeyCode::Enter => match self.menu_state.selected() {
                Some(0) => self.start_new_game(),
                Some(1) => self.show_help = true,
                Some(2) => self.running = false,
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_investigation_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(':') | KeyCode::Char('/') | KeyCode::Char(' ') => {
                self.enter_command_mode("");
            }
            KeyCode::Char('a') => self.enter_command_mode("ask "),
            KeyCode::Char('g') => self.enter_command_mode("guess "),
            KeyCode::Char('c') => self.submit("clue"),
            KeyCode::Char('s') | KeyCode::Esc => self.current_screen = Screen::Story,
            KeyCode::Char('n') => self.submit("notes"),
            KeyCode::Char('h') => self.submit("help"),
            _ => {}
        }
    }

    fn enter_command_mode(&mut self, prefill: &str) {
        self.input_mode = InputMode::Command;
        self.input_buffer = prefill.to_string();
    }

    fn navigate(&mut self, delta: i32) {
        let i = self.menu_state.selected().unwrap_or(0) as i32;
        self.menu_state.select(Some((i + delta).clamp(0, 2) as usize));
    }

    /// Run one console line and echo its output
    pub fn submit(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() {
            self.command_history.push(line.to_string());
            self.push(format!("> {}", line));
        }

        let output = match command::parse(line) {
            Ok(Some(cmd)) => self.execute(cmd),
            Ok(None) => Vec::new(),
            Err(err) => {
                self.notice = Some((Tone::Warning, err.to_string()));
                vec![format!("[ERROR] {}", err)]
            }
        };
        for out in output {
            self.push(out);
        }

        let overflow = self.command_output.len().saturating_sub(MAX_OUTPUT_LINES);
        self.command_output.drain(..overflow);
    }

    fn push(&mut self, line: impl Into<String>) {
        self.command_output.push(line.into());
    }

    fn execute(&mut self, cmd: Command) -> Vec<String> {
        debug!(?cmd, "console command");
        match cmd {
            Command::Help => HELP_TEXT.lines().map(String::from).collect(),
            Command::Clear => {
                self.command_output.clear();
                vec!["[SYSTEM] Console cleared.".to_string()]
            }
            Command::Quit => {
                self.running = false;
                Vec::new()
            }
            Command::New => {
                self.start_new_game();
                Vec::new()
            }
            other => {
                let Some(game) = self.game.as_mut() else {
                    return vec!["[ERROR] No case is open. Type 'new' to start one.".to_string()];
                };
                let spent_before = game.clues_spent();
                let mut lines = Self::play(game, &self.config, other, &mut self.notice);

                if game.is_resolved() {
                    if self.current_screen != Screen::Verdict {
                        self.current_screen = Screen::Verdict;
                        lines.push("[TIP] Press Enter or type 'new' to play again.".to_string());
                    }
                } else if game.clues_spent() > spent_before && game.clues_remaining() == 0 {
                    lines.push(
                        "[SYSTEM] You have used all your clues. Keep going and make your guess."
                            .to_string(),
                    );
                }
                lines
            }
        }
    }

    /// The commands that touch the case itself
    fn play(
        game: &mut GameState,
        config: &Config,
        cmd: Command,
        notice: &mut Option<(Tone, String)>,
    ) -> Vec<String> {
        let result: Result<Vec<String>, GameError> = match cmd {
            Command::Story => Ok(game
                .opening()
                .text
                .lines()
                .map(|l| format!("[STORY] {}", l))
                .collect()),
            Command::Status => Ok(vec![format!("[STATUS] {}", game.check_status())]),
            Command::Notes => {
                if game.notes().is_empty() {
                    Ok(vec!["[NOTE] Your notebook is empty.".to_string()])
                } else {
                    Ok(game
                        .notes()
                        .iter()
                        .flat_map(|note| {
                            let stamp = note.timestamp.format("%H:%M:%S").to_string();
                            note.text
                                .lines()
                                .map(move |l| format!("[NOTE] {} {}", stamp, l))
                                .collect::<Vec<_>>()
                        })
                        .collect())
                }
            }
            Command::Ask(entity) => game.interrogate(entity).map(|report| {
                let mut lines: Vec<String> =
                    report.lines().into_iter().map(|l| format!("[REPORT] {}", l)).collect();
                lines.push(match find_portrait(&config.portraits_dir, entity) {
                    Some(path) => format!("[PORTRAIT] {}", path.display()),
                    None => "[PORTRAIT] No image".to_string(),
                });
                lines
            }),
            Command::Clue => game
                .request_elimination_clue()
                .map(|sentence| vec![format!("[CLUE] {}", sentence)]),
            Command::Guess {
                suspect,
                location,
                weapon,
            } => game
                .guess(suspect, location, weapon)
                .map(|result| verdict_lines(&result)),
            Command::Help | Command::Clear | Command::Quit | Command::New => Ok(Vec::new()),
        };

        match result {
            Ok(lines) => {
                *notice = None;
                lines
            }
            Err(err) => {
                let tone = match err {
                    GameError::BudgetExhausted | GameError::GameResolved => Tone::Error,
                    _ => Tone::Warning,
                };
                *notice = Some((tone, err.to_string()));
                vec![format!("[ERROR] {}", err)]
            }
        }
    }

    /// Deal a case. A configured seed only fixes the first deal; later
    /// cases continue the same random stream.
    fn start_new_game(&mut self) {
        let game = match self.game.take() {
            Some(previous) => previous.play_again(),
            None => match self.config.seed {
                Some(seed) => GameState::with_seed(seed),
                None => GameState::new_game(),
            },
        };
        info!(case = %game.id.short(), "new game from the frontend");

        self.command_output.clear();
        self.notice = None;
        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
        self.game = Some(game);
        self.current_screen = Screen::Story;

        self.push("[SYSTEM] A new case has been opened.");
        self.push(format!(
            "[SYSTEM] You have {} clues. Interrogations and hints both cost one.",
            MAX_CLUES
        ));
        self.push("[TIP] Press SPACE, : or / to type a command. 'help' lists them all.");
        self.push("[TIP] Quick keys: a=ask, c=clue, g=guess, s=story");
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        match self.current_screen {
            Screen::Title => self.render_title(frame),
            Screen::Story => self.render_story(frame),
            Screen::Investigation => self.render_game(frame),
            Screen::Verdict => {
                self.render_game(frame);
                self.render_verdict(frame);
            }
        }

        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_title(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(self.theme.bg)), area);

        let menu_height: u16 = 5;
        let logo_height = if area.height < 20 { 1 } else { LOGO.lines().count() as u16 };
        let start_y = area.height.saturating_sub(logo_height + menu_height + 2) / 2;

        let logo_area = Rect::new(area.x, start_y, area.width, logo_height.min(area.height - start_y));
        let logo = if logo_height == 1 {
            Paragraph::new("═══ MARVEL CLUE ═══")
        } else {
            Paragraph::new(LOGO)
        };
        frame.render_widget(
            logo.style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            logo_area,
        );

        let menu_y = (start_y + logo_height + 2).min(area.height.saturating_sub(menu_height));
        let menu_area = Rect::new(
            area.width / 4,
            menu_y,
            area.width / 2,
            menu_height.min(area.height - menu_y),
        );
        let menu = List::new(vec![
            ListItem::new("  ▶ New Game"),
            ListItem::new("  ▶ Help"),
            ListItem::new("  ▶ Quit"),
        ])
        .block(styled_block("Main Menu", &self.theme))
        .highlight_style(
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .highlight_symbol("→ ");
        frame.render_stateful_widget(menu, menu_area, &mut self.menu_state);

        if area.height > 1 {
            let footer = Paragraph::new("Press ? for help | q to quit")
                .style(Style::default().fg(self.theme.muted))
                .alignment(Alignment::Center);
            frame.render_widget(footer, Rect::new(0, area.height - 1, area.width, 1));
        }
    }

    fn render_story(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);
        let Some(game) = &self.game else { return };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(1)])
            .split(centered_rect(area, 90, 16));

        let text: Vec<Line> = game
            .opening()
            .text
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(self.theme.fg))))
            .collect();
        let story = Paragraph::new(text)
            .block(styled_block(&format!("Case {} - Opening Narrative", game.id.short()), &self.theme))
            .wrap(Wrap { trim: true });
        frame.render_widget(story, chunks[0]);

        let footer = Paragraph::new("Press Enter to begin the investigation")
            .style(Style::default().fg(self.theme.muted))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }

    fn render_game(&self, frame: &mut Frame) {
        let Some(game) = &self.game else { return };
        let layout = create_main_layout(frame.area());
        self.render_header(frame, layout[0], game);

        let content = create_content_layout(layout[1]);
        self.render_side_panel(frame, content[0], game);
        self.render_console(frame, content[1]);

        self.render_status_bar(frame, layout[2], game);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, game: &GameState) {
        let header_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Min(20), Constraint::Length(18)])
            .split(area);
        let bordered = || Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border));

        let logo = Paragraph::new(SMALL_LOGO)
            .style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
            .block(bordered());
        frame.render_widget(logo, header_layout[0]);

        let title = Paragraph::new(format!(
            "Case {}: who killed {}?",
            game.id.short(),
            game.opening().victim
        ))
        .style(Style::default().fg(self.theme.warning))
        .alignment(Alignment::Center)
        .block(bordered());
        frame.render_widget(title, header_layout[1]);

        let clues = Paragraph::new(format!(" Clues {}/{} ", game.clues_remaining(), MAX_CLUES))
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Right)
            .block(bordered());
        frame.render_widget(clues, header_layout[2]);
    }

    fn render_side_panel(&self, frame: &mut Frame, area: Rect, game: &GameState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Clue meter
                Constraint::Min(19),   // Catalogues
                Constraint::Length(8), // Eliminations
            ])
            .split(area);

        let meter_block = styled_block("Investigator", &self.theme);
        let meter_area = meter_block.inner(chunks[0]);
        frame.render_widget(meter_block, chunks[0]);
        frame.render_widget(
            ClueMeter::new(game.clues_remaining(), MAX_CLUES).color(self.theme.success),
            meter_area,
        );

        let hints = game.revealed_hints();
        let mut lines = Vec::new();
        for category in Category::ALL {
            lines.push(Line::from(Span::styled(
                category.plural(),
                Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD),
            )));
            for (i, name) in category.names().into_iter().enumerate() {
                let ruled_out = Entity::parse(category, name).is_ok_and(|e| hints.contains(e));
                let style = if ruled_out {
                    Style::default().fg(self.theme.muted).add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(self.theme.fg)
                };
                lines.push(Line::from(Span::styled(format!("  {}. {}", i + 1, name), style)));
            }
        }
        let catalogues = Paragraph::new(lines).block(styled_block("Case Board", &self.theme));
        frame.render_widget(catalogues, chunks[1]);

        let eliminated: Vec<ListItem> = if hints.is_empty() {
            vec![ListItem::new("  Nothing ruled out yet").style(Style::default().fg(self.theme.muted))]
        } else {
            hints
                .iter()
                .map(|e| ListItem::new(format!("  ✗ {}", e)).style(Style::default().fg(self.theme.alert)))
                .collect()
        };
        frame.render_widget(List::new(eliminated).block(styled_block("Ruled Out", &self.theme)), chunks[2]);
    }

    fn render_console(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(area);

        let visible_lines = chunks[0].height.saturating_sub(2) as usize;
        let start = self.command_output.len().saturating_sub(visible_lines);
        let output_lines: Vec<Line> = self.command_output[start..]
            .iter()
            .map(|line| {
                let (color, bold) = line_style(line);
                let mut style = Style::default().fg(color);
                if bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Line::from(Span::styled(line.as_str(), style))
            })
            .collect();

        let console = Paragraph::new(output_lines)
            .block(styled_block("Investigation", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(console, chunks[0]);

        let typing = self.input_mode == InputMode::Command;
        let prompt = if typing {
            format!("detective> {}_", self.input_buffer)
        } else {
            "detective> [Press : or / to type a command]".to_string()
        };
        let color = if typing { self.theme.success } else { self.theme.muted };
        let input = Paragraph::new(prompt).style(Style::default().fg(color)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if typing { color } else { self.theme.border }))
                .title(" Command "),
        );
        frame.render_widget(input, chunks[1]);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, game: &GameState) {
        match &self.notice {
            Some((tone, message)) => frame.render_widget(Notice::new(message, *tone), area),
            None => {
                let status = Paragraph::new(format!(" {} | Press ? for help ", game.check_status()))
                    .style(Style::default().fg(self.theme.fg).bg(Color::DarkGray));
                frame.render_widget(status, area);
            }
        }
    }

    fn render_verdict(&self, frame: &mut Frame) {
        let Some(result) = self.game.as_ref().and_then(|g| g.outcome()) else {
            return;
        };
        let mut lines = vec![String::new()];
        lines.extend(result.lines());
        lines.push(String::new());
        lines.push("Enter: play again   q: quit".to_string());

        let popup = centered_rect(frame.area(), 50, lines.len() as u16 + 2);
        frame.render_widget(Clear, popup);
        let (title, color) = if result.correct {
            ("CASE SOLVED", self.theme.success)
        } else {
            ("CASE CLOSED", self.theme.alert)
        };
        frame.render_widget(VerdictBox::new(title).content(lines).border_color(color), popup);
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let popup_area = centered_rect(frame.area(), 67, 25);
        frame.render_widget(Clear, popup_area);

        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.accent)));
        frame.render_widget(help, popup_area);
    }
}

fn verdict_lines(result: &GuessResult) -> Vec<String> {
    result.lines().into_iter().map(|l| format!("[VERDICT] {}", l)).collect()
}

/// Console color by line prefix
fn line_style(line: &str) -> (Color, bool) {
    if line.starts_with("[ERROR]") {
        (Color::Red, true)
    } else if line.starts_with("[CLUE]") {
        (Color::Green, true)
    } else if line.starts_with("[VERDICT]") {
        (Color::Magenta, true)
    } else if line.starts_with("[REPORT]") {
        (Color::Cyan, false)
    } else if line.starts_with("[STORY]") {
        (Color::Yellow, false)
    } else if line.starts_with("[NOTE]") || line.starts_with("[STATUS]") {
        (Color::LightBlue, false)
    } else if line.starts_with("[SYSTEM]") {
        (Color::Cyan, true)
    } else if line.starts_with("[TIP]") || line.starts_with("[PORTRAIT]") {
        (Color::DarkGray, false)
    } else if line.starts_with("> ") {
        (Color::White, true)
    } else {
        (Color::White, false)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn seeded_app() -> App {
        let mut app = App::new(Config {
            seed: Some(17),
            ..Config::default()
        });
        app.submit("new");
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn commands_before_a_case_is_open() {
        let mut app = App::default();
        app.submit("clue");
        assert_eq!(
            app.command_output.last().map(String::as_str),
            Some("[ERROR] No case is open. Type 'new' to start one.")
        );
    }

    #[test]
    fn title_menu_deals_a_case() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        assert!(app.game.is_some());
        assert_eq!(app.current_screen, Screen::Story);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen, Screen::Investigation);
    }

    #[test]
    fn clue_command_spends_budget_and_reports() {
        let mut app = seeded_app();
        app.submit("clue");
        assert!(app.command_output.iter().any(|l| l.starts_with("[CLUE] ")));
        assert_eq!(app.game.as_ref().map(|g| g.clues_remaining()), Some(MAX_CLUES - 1));
    }

    #[test]
    fn exhausting_clues_is_announced_then_rejected() {
        let mut app = seeded_app();
        for _ in 0..5 {
            app.submit("ask where Wakanda");
        }
        assert!(app
            .command_output
            .iter()
            .any(|l| l.starts_with("[SYSTEM] You have used all your clues")));

        app.submit("clue");
        assert_eq!(
            app.command_output.last().map(String::as_str),
            Some("[ERROR] No clues left. Time to make your guess.")
        );
        assert_eq!(app.notice.as_ref().map(|(t, _)| *t), Some(Tone::Error));
    }

    #[test]
    fn incomplete_guess_is_rejected_inline() {
        let mut app = seeded_app();
        app.submit("guess / Wakanda / Mjolnir");
        assert_eq!(
            app.command_output.last().map(String::as_str),
            Some("[ERROR] Pick a suspect, a location and a weapon before guessing.")
        );
        assert_eq!(app.current_screen, Screen::Story);
        assert!(!app.game.as_ref().is_some_and(|g| g.is_resolved()));
    }

    #[test]
    fn guess_moves_to_verdict_and_new_game_resets() {
        let mut app = seeded_app();
        let solution = *app.game.as_ref().map(|g| g.solution()).unwrap();
        let first_case = app.game.as_ref().unwrap().id;

        app.submit(&format!(
            "guess {} / {} / {}",
            solution.suspect, solution.location, solution.weapon
        ));
        assert_eq!(app.current_screen, Screen::Verdict);
        assert!(app
            .command_output
            .contains(&"[VERDICT] Congratulations! You guessed correctly:".to_string()));

        app.submit("clue");
        assert_eq!(
            app.command_output.last().map(String::as_str),
            Some("[ERROR] This case is closed. Start a new game to play again.")
        );

        press(&mut app, KeyCode::Enter);
        let game = app.game.as_ref().unwrap();
        assert_ne!(game.id, first_case);
        assert_eq!(game.clues_remaining(), MAX_CLUES);
        assert_eq!(app.current_screen, Screen::Story);
    }

    #[test]
    fn command_mode_collects_keys() {
        let mut app = seeded_app();
        app.current_screen = Screen::Investigation;
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.input_mode, InputMode::Command);
        assert_eq!(app.input_buffer, "guess ");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);

        press(&mut app, KeyCode::Char(':'));
        for c in "clue".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.command_history.last().map(String::as_str), Some("clue"));
        assert_eq!(app.game.as_ref().map(|g| g.clues_spent()), Some(1));
    }

    #[test]
    fn unknown_command_sets_a_warning() {
        let mut app = seeded_app();
        app.submit("dance");
        assert_eq!(app.notice.as_ref().map(|(t, _)| *t), Some(Tone::Warning));
    }
}
