//! contact-form binary entry point

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use contact_form::{
    cli::{self, Cli, Commands},
    config::Config,
    contact_tui::App,
    form::FormValues,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "contact_form=info");
    }

    let config = Config::from_env()?;
    config.validate()?;

    // Log to file only; anything on the terminal would corrupt the TUI
    let file_appender =
        tracing_appender::rolling::never(&config.logging.log_dir, &config.logging.log_file);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(file_appender).with_ansi(false))
        .init();

    info!("Starting contact-form (log: {})", config.log_path().display());

    // Handle CLI mode - print output and exit without TUI
    if cli.cli {
        let code = cli::run(&cli, &mut io::stdout(), &mut io::stderr())?;
        std::process::exit(code);
    }

    let values = match cli.command {
        Some(Commands::Submit(args)) => args.values(),
        None => FormValues::default(),
    };

    // Setup terminal for TUI mode
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_values(config, values);
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result {
        Ok(_) => {
            info!("contact-form exited successfully");
        }
        Err(e) => {
            error!("contact-form encountered an error: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
