//! Organic Guide - Main entry point
//!
//! Parses the command line, sets up logging and either runs the interactive
//! terminal UI or prints the requested content as text.

use anyhow::{Context, Result};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

use organic_guide::app::App;
use organic_guide::cli::{Cli, Commands, ListKind, Selection};
use organic_guide::config_file::Settings;
use organic_guide::data::CatalogExport;
use organic_guide::logic::resolver::{self, PremiumQuote};
use organic_guide::theme::UiConstants;
use organic_guide::ui::text::{render_list, wrap_lines};
use organic_guide::ui::render_text;
use organic_guide::view;

/// Initialize tracing with the writer appropriate for the command
///
/// The interactive UI owns the terminal, so without `--log-file` its logs are
/// discarded. Text commands log to stderr, leaving stdout for their output.
fn init_logging(cli: &Cli, interactive: bool) -> Result<()> {
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let (writer, ansi) = match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None if interactive => (BoxMakeWriter::new(std::io::sink), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .init();
    Ok(())
}

/// Load settings from `--config` (or defaults) and apply global overrides
fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::load_from_file(path)?
        }
        None => Settings::default(),
    };
    if let Some(dir) = &cli.assets_dir {
        settings.assets_dir = dir.clone();
    }
    Ok(settings)
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let interactive = matches!(cli.command, None | Some(Commands::Browse { .. }));
    init_logging(&cli, interactive)?;
    info!("Organic Guide {} starting up", env!("CARGO_PKG_VERSION"));

    let mut settings = load_settings(&cli)?;

    match cli.command {
        None => run_tui(settings),
        Some(Commands::Browse { selection }) => {
            selection.apply(&mut settings);
            run_tui(settings)
        }
        Some(Commands::Print {
            selection,
            json,
            width,
        }) => print_page(settings, &selection, json, width),
        Some(Commands::Premium { item, base_price }) => {
            if let Some(base_price) = base_price {
                settings.base_price = base_price;
            }
            print_premium(&settings, &item)
        }
        Some(Commands::Sources { topic }) => print_sources(&topic),
        Some(Commands::List { what }) => {
            print_list(what);
            Ok(())
        }
        Some(Commands::Export) => {
            let json = CatalogExport::snapshot()
                .to_json()
                .context("Failed to serialize catalog")?;
            println!("{}", json);
            Ok(())
        }
    }
}

/// Run the interactive terminal UI
fn run_tui(settings: Settings) -> Result<()> {
    settings.validate().context("Invalid settings")?;
    let mut app = App::new(settings).context("Initial selection does not render")?;

    debug!("Initializing terminal for TUI mode");
    install_panic_hook();
    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .context("Failed to create terminal")
        .and_then(|mut terminal| app.run(&mut terminal).context("Application error"));

    // Always restore the terminal, even if the app failed
    restore_terminal();
    result
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);
}

/// Restore the terminal before the default panic message is printed
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));
}

/// Render one page to stdout
fn print_page(mut settings: Settings, selection: &Selection, json: bool, width: usize) -> Result<()> {
    selection.apply(&mut settings);
    settings.validate().context("Invalid selection")?;

    let state = settings.initial_state();
    let page = view::render(&state)?;
    debug!(page = %page.page, blocks = page.blocks.len(), "Rendered page");

    if json {
        println!("{}", page.to_json().context("Failed to serialize page")?);
    } else {
        print!("{}", render_text(&page, &settings, width.max(20)));
    }
    Ok(())
}

fn print_premium(settings: &Settings, item: &str) -> Result<()> {
    settings.validate().context("Invalid base price")?;
    let quote = PremiumQuote::for_item(item, settings.base_price)?;
    info!(item, premium = quote.premium_percent, "Resolved premium");

    println!("{}: {}", quote.metric_label(), quote.metric_value());
    for line in wrap_lines(&quote.sentence(), UiConstants::TEXT_WIDTH) {
        println!("{}", line);
    }
    Ok(())
}

fn print_sources(topic: &str) -> Result<()> {
    let records = resolver::resolve_citations(topic)?;
    info!(topic, count = records.len(), "Resolved sources");

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for text in [
            record.citation.to_string(),
            format!("Summary: {}", record.summary),
            format!("Why this matters: {}", record.why),
        ] {
            for line in wrap_lines(&text, UiConstants::TEXT_WIDTH) {
                println!("{}", line);
            }
        }
        println!("Source: {}", record.link);
    }
    Ok(())
}

fn print_list(what: ListKind) {
    print!("{}", render_list(what));
}
