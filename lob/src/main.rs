use std::{path::PathBuf, time::Duration};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use lob_file::MIB;
use lob_frontend::settings::Settings;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
}

#[tokio::main]
async fn main() {
    let logpath = match get_logging_path() {
        Ok(it) => it,
        Err(_) => return,
    };

    let logfile = tracing_appender::rolling::daily(logpath, "log");
    tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .init();

    debug!("starting application");

    let mut settings = Settings::default();
    map_args_to_settings(&cli().get_matches(), &mut settings);

    match lob_frontend::run(settings).await {
        Ok(()) => {
            debug!("closing application");
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
        }
    }
}

fn cli() -> Command {
    Command::new("lob")
        .about("lob - select files, validate them and watch them fly")
        .args([
            // NOTE: arguments
            Arg::new("paths")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("files to add to the upload session on startup"),
            // NOTE: options
            Arg::new("max-file-size")
                .long("max-file-size")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u64))
                .help("largest accepted file in MiB"),
            Arg::new("max-total-size")
                .long("max-total-size")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u64))
                .help("largest accepted sum of all files in MiB"),
            Arg::new("max-files")
                .long("max-files")
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize))
                .help("maximum amount of paths picked at once"),
            Arg::new("tick")
                .long("tick")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u64))
                .help("interval of the simulated transport in milliseconds"),
            Arg::new("failure-rate")
                .long("failure-rate")
                .action(ArgAction::Set)
                .value_parser(parse_failure_rate)
                .help("chance between 0 and 1 that a simulated transfer tick fails"),
            Arg::new("start")
                .long("start")
                .action(ArgAction::SetTrue)
                .default_value("false")
                .help("start uploading the accepted files right away"),
        ])
}

fn parse_failure_rate(value: &str) -> Result<f64, String> {
    let rate = value
        .parse::<f64>()
        .map_err(|error| format!("{} is not a number: {}", value, error))?;

    if rate.is_finite() && (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("{} is not between 0 and 1", value))
    }
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    if let Some(paths) = args.get_many::<PathBuf>("paths") {
        settings.paths = paths.cloned().collect();
    }

    if let Some(size) = args.get_one::<u64>("max-file-size") {
        settings.validation.max_file_size = size.saturating_mul(MIB);
    }

    if let Some(size) = args.get_one::<u64>("max-total-size") {
        settings.validation.max_total_size = size.saturating_mul(MIB);
    }

    if let Some(count) = args.get_one::<usize>("max-files") {
        settings.max_files = *count;
    }

    if let Some(tick) = args.get_one::<u64>("tick") {
        settings.tick = Duration::from_millis(*tick);
    }

    if let Some(rate) = args.get_one::<f64>("failure-rate") {
        settings.failure_rate = *rate;
    }

    settings.start_on_accept = args.get_flag("start");
}

fn get_logging_path() -> Result<String, Error> {
    let cache_dir = match dirs::cache_dir() {
        Some(cache_dir) => match cache_dir.to_str() {
            Some(cache_dir_string) => cache_dir_string.to_string(),
            None => return Err(Error::Initialization),
        },
        None => return Err(Error::Initialization),
    };

    Ok(format!("{}{}", cache_dir, "/lob/logs"))
}
