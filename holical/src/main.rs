use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use holical::app::{build_source, load_events, load_names, AppError};
use holical::config::AppConfig;
use holical::engine::{Language, Message};
use holical::render::CalendarView;
use holical::source::{CalendarController, SourceError};
use holical::time::Date;

#[derive(Parser)]
#[command(
    name = "holical",
    version,
    about = "South Korean public holidays with long-weekend detection"
)]
struct Cli {
    /// Year to show (defaults to the current year)
    #[arg(long)]
    year: Option<u16>,

    /// Display language: ko or en
    #[arg(long)]
    lang: Option<Language>,

    /// Config file (defaults to $HOLICAL_CONFIG, then holical.toml)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Backup holiday file to use instead of the configured one
    #[arg(long)]
    backup: Option<PathBuf>,

    /// Directory with major-events-ko.json and major-events-en.json
    #[arg(long)]
    events: Option<PathBuf>,

    /// Print the aggregated year as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_failure(language: Language, message: String) -> AppError {
    eprintln!("{}: {message}", Message::Error.render(language));
    eprintln!("{}", Message::ErrorApiKey.render(language));
    AppError::Load(message)
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.backup {
        config.source.backup_path = Some(path);
    }
    if let Some(dir) = cli.events {
        config.display.events_dir = Some(dir);
    }
    let language = cli.lang.unwrap_or(config.display.language);
    init_logging(&config.log.level);

    let today = Date::today()?;
    let year = cli.year.unwrap_or(today.year());

    let source = match build_source(&config).await {
        Ok(source) => source,
        Err(e @ AppError::Source(SourceError::Backup(_))) => {
            error!("{e}");
            return Err(load_failure(language, e.user_message(language)));
        }
        Err(e) => return Err(e),
    };
    let names = load_names(&config).await?;
    let mut controller = CalendarController::new(year, language);
    let state = controller
        .load(&source, year, language, &names, &config.period)
        .await;

    let dataset = match (&state.dataset, &state.error) {
        (Some(dataset), _) => dataset,
        (None, error) => {
            let message = error
                .clone()
                .unwrap_or_else(|| Message::ErrorMessage.render(language));
            return Err(load_failure(language, message));
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(dataset)?);
        return Ok(());
    }

    let events = load_events(&config, language).await?.events_for(year);
    print!("{}", CalendarView::new(dataset, &events, Some(today)));
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Load(_)) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
