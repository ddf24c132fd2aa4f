use clap::Parser;
use std::io::Read as _;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tsv::{Config, Options, Result, Validator};

const EXIT_ISSUES: u8 = 1;
const EXIT_FATAL_ERROR: u8 = 2;

#[derive(Parser)]
#[command(
    name = "tsv",
    about = "Check that SQL reading Timestream tables filters on a time column"
)]
struct Cli {
    /// SQL file to check (reads stdin when omitted)
    path: Option<PathBuf>,

    /// Accepted time column; repeat to accept several (overrides TSV_TIME_COLUMNS)
    #[arg(long = "time-column", value_name = "NAME")]
    time_columns: Vec<String>,

    /// TOML file with defaults for any TSV_* setting
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_ISSUES),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("ERROR: {e}");
            ExitCode::from(EXIT_FATAL_ERROR)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => Config::load_with_file(path)?,
        None => Config::load()?,
    };
    let options = Options::from(&config).with_time_columns(&cli.time_columns);

    let sql = match &cli.path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let report = Validator::new(options).sql(&sql);
    if report.passed() {
        println!("ok");
    }
    for issue in report.issues() {
        println!("{issue}");
    }
    Ok(report.passed())
}
