use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::config::{paths::TallyPaths, settings::Settings};
use tally::session::Session;
use tally::sink::CsvSink;

#[derive(Parser)]
#[command(
    name = "tally",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based bilingual expense and income tracker",
    long_about = "tally is a terminal-based expense and income tracker. Records \
                  live in memory for the session; foreign amounts are converted \
                  to the home currency at a rate you control from the sidebar."
)]
struct Cli {
    /// Append every new record to this CSV file (write-only)
    #[arg(long, value_name = "PATH")]
    sink: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TallyPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("tally Configuration");
            println!("===================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Language: {}", settings.language.as_str());
            println!("  Rate:     {:.1}", settings.rate);
            match &settings.sink_path {
                Some(path) => println!("  Sink:     {}", path.display()),
                None => println!("  Sink:     (none)"),
            }
        }
        None => {
            // CLI flag overrides the configured sink path
            let sink_path = cli.sink.or_else(|| settings.sink_path.clone());

            let mut session = Session::new(settings.language, settings.rate);
            if let Some(path) = &sink_path {
                session = session.with_sink(Box::new(CsvSink::new(path)));
            }

            tally::tui::run_tui(&mut session)?;

            // Persist the sidebar preferences for the next session. The
            // ledger itself is deliberately not persisted.
            settings.language = session.language;
            settings.rate = session.rate();
            settings.sink_path = sink_path;
            if let Err(e) = settings.save(&paths) {
                eprintln!("Warning: failed to save settings: {}", e);
            }
        }
    }

    Ok(())
}
