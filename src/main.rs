//! Marvel Clue: a terminal whodunit
//!
//! Find the culprit, the place and the weapon before your clues run out.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use marvel_clue::config::Config;
use marvel_clue::tui::App;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::stdout;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "clue")]
#[command(about = "Guess the culprit: Marvel edition", long_about = None)]
#[command(version = marvel_clue::VERSION)]
struct Cli {
    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed the first case for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Portrait images directory
    #[arg(long, value_name = "DIR")]
    portraits: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path, filter: &str) -> Result<()> {
    // The terminal belongs to the UI, so logs only ever go to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(dir) = cli.portraits {
        config.portraits_dir = dir;
    }
    if let Some(path) = cli.log_file {
        config.log_file = Some(path);
    }

    if let Some(path) = &config.log_file {
        init_logging(path, &config.log_filter)?;
    }
    tracing::info!(version = marvel_clue::VERSION, seed = ?config.seed, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = run(&mut terminal, &mut app);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  Thanks for playing Marvel Clue!                       ║");
    println!("║                                                        ║");
    println!("║  The truth is out there, detective.                    ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;

        if !app.handle_input()? {
            break;
        }
    }
    tracing::info!("quitting");
    Ok(())
}
