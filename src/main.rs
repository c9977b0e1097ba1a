use std::{fs, process::ExitCode};

use clap::{Parser, ValueEnum};
use computor::{
    Session,
    util::settings::{DECIMAL_PRECISION, Settings},
};
use env_logger::Env;

/// computor evaluates exact rational, complex, matrix and polynomial
/// expressions and solves equations up to degree 2.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells computor to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Log verbosity. Defaults to `RUST_LOG`, or warnings only.
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,

    /// Decimal digits kept when a float result is made exact, at most the
    /// ten digits values are printed with.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=i64::from(DECIMAL_PRECISION)))]
    precision: Option<u32>,

    /// Largest exponent accepted by `^`.
    #[arg(long)]
    max_exponent: Option<u32>,

    /// One statement per line; blank lines and `#` comments are skipped.
    contents: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = args.log_level {
        logger.filter_level(level.into());
    }
    logger.init();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let defaults = Settings::default();
    let settings = Settings { precision: args.precision.unwrap_or(defaults.precision),
                              max_power_exponent: args.max_exponent
                                                      .unwrap_or(defaults.max_power_exponent),
                              ..defaults };
    log::debug!("settings: {settings:?}");

    let mut session = Session::with_settings(settings);
    for (index, line) in script.lines().enumerate() {
        let statement = line.trim();
        if statement.is_empty() || statement.starts_with('#') {
            continue;
        }

        match session.execute_line(statement, index + 1) {
            Ok(outcome) => println!("{outcome}"),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}
