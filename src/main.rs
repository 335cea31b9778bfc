use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use ratatui::{backend::TermionBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use cardquill::config::Config;
use cardquill::editor::state::{EditorState, MessageLevel};
use cardquill::input::InputHandler;
use cardquill::store::CardStore;
use cardquill::theme::get_builtin_theme;
use cardquill::ui::UI;

/// CardQuill - author question/answer cards and review them in the terminal
#[derive(Parser)]
#[command(name = "cardquill")]
#[command(version)]
#[command(about = "A terminal question/answer card editor and reviewer", long_about = None)]
struct Cli {
    /// Card database to open (created if missing; default from config)
    database: Option<PathBuf>,

    /// Theme name (overrides config)
    #[arg(short, long)]
    theme: Option<String>,

    /// Start in review mode with answers hidden
    #[arg(short, long)]
    review: bool,

    /// Write logs to this file instead of the data directory
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// Without this, panic messages would be hidden by the alternate screen.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

/// Sends log output to a file; the terminal belongs to the UI.
///
/// Level comes from `RUST_LOG`, defaulting to `info`. Logging is skipped if
/// the file cannot be opened.
fn init_logging(path: Option<PathBuf>) {
    let Some(path) = path else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    let config = Config::load();

    init_logging(cli.log_file.clone().or_else(|| config.log_path()));

    // Open the store BEFORE terminal setup so failures print normally
    let db_path = cli
        .database
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.default_database));
    let store = CardStore::create_or_open(&db_path)
        .with_context(|| format!("Failed to open card database {}", db_path.display()))?;

    // CLI theme overrides config theme
    let theme_name = cli.theme.clone().unwrap_or_else(|| config.theme.clone());
    let theme = match get_builtin_theme(&theme_name) {
        Some(theme) => theme,
        None => {
            warn!("theme '{}' not found, using default-dark", theme_name);
            eprintln!("Warning: Theme '{}' not found, using default-dark", theme_name);
            get_builtin_theme("default-dark").context("default theme missing")?
        }
    };

    let mut state = EditorState::new(store, theme.name.clone());
    state.set_review_mode(cli.review || config.review_mode);
    state.set_pasted_image_name(config.pasted_image_name.clone());
    state.set_message("Database initialized.".to_string(), MessageLevel::Info);
    info!("starting with {}", db_path.display());

    let mut ui = UI::new(theme);
    let mut input_handler = if io::stdin().is_terminal() {
        InputHandler::new()
    } else {
        InputHandler::new_with_tty()?
    };

    // Setup terminal
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_event_loop(
        &mut terminal,
        &mut ui,
        &mut input_handler,
        &mut state,
        config,
    );

    // Termion restores the screen through Drop guards; the cursor needs showing
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    if let Err(e) = &result {
        log::error!("exiting with error: {:#}", e);
    }
    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &mut UI,
    input_handler: &mut InputHandler,
    state: &mut EditorState,
    mut config: Config,
) -> Result<()> {
    loop {
        if let Some(theme_name) = state.take_pending_theme() {
            ui.set_theme(&theme_name);
            config.theme = theme_name;
            if let Err(e) = config.save() {
                warn!("could not save config: {:#}", e);
                state.set_message(
                    format!("Theme applied but config not saved: {}", e),
                    MessageLevel::Warning,
                );
            }
        }

        ui.render(terminal, state)?;

        match input_handler.next_event()? {
            Some(event) => {
                if input_handler.handle_event(event, state)? {
                    break;
                }
            }
            None => break,
        }
    }

    info!("quit");
    Ok(())
}
