//! Command-line surface

use clap::error::ErrorKind;
use clap::{value_parser, ArgAction, ArgGroup, CommandFactory, Parser};
use std::path::PathBuf;

/// index-reaper - delete old time-stamped indices from an Elasticsearch cluster
///
/// Daily indices (`prefix-YYYY.MM.DD`) older than --days-to-keep and hourly
/// indices (`prefix-YYYY.MM.DD.HH`) older than --hours-to-keep are deleted.
/// With --disk-space-to-keep, the oldest indices are deleted until the
/// newest ones fit in the budget.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "index-reaper")]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
#[command(group(
    ArgGroup::new("policy")
        .required(true)
        .multiple(true)
        .args(["hours_to_keep", "days_to_keep", "disk_space_to_keep"])
))]
pub struct Args {
    /// Elasticsearch host [default: localhost]
    #[arg(long)]
    pub host: Option<String>,

    /// Elasticsearch port [default: 9200]
    #[arg(long)]
    pub port: Option<u16>,

    /// Elasticsearch timeout in seconds [default: 30]
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    /// Prefix for the indices; indices without it are skipped [default: logstash-]
    #[arg(short = 'p', long)]
    pub prefix: Option<String>,

    /// Time unit separator [default: .]
    #[arg(short = 's', long)]
    pub separator: Option<String>,

    /// Number of hours to keep
    #[arg(short = 'H', long, value_parser = value_parser!(u32).range(1..))]
    pub hours_to_keep: Option<u32>,

    /// Number of days to keep
    #[arg(short = 'd', long, value_parser = value_parser!(u32).range(1..))]
    pub days_to_keep: Option<u32>,

    /// Disk space to keep (GB)
    #[arg(
        short = 'g',
        long,
        value_parser = parse_gigabytes,
        conflicts_with_all = ["hours_to_keep", "days_to_keep"]
    )]
    pub disk_space_to_keep: Option<f64>,

    /// Report what would be deleted without deleting anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// TOML file with connection and naming defaults
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Compute cutoffs from local wall-clock time instead of UTC
    #[arg(long)]
    pub local_time: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: (),
}

/// Reported when none of the retention or budget options is given
pub const MISSING_POLICY: &str = "Invalid arguments: You must specify either the number of hours, \
     the number of days to keep or the maximum disk space to use";

impl Args {
    /// Parse the process arguments, exiting with status 2 on usage errors.
    ///
    /// A missing policy prints the full help text rather than clap's
    /// one-line usage.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
                eprintln!("{}", missing_policy_report());
                std::process::exit(2);
            }
            Err(err) => err.exit(),
        }
    }
}

/// Message and help text shown when no policy option was given
pub fn missing_policy_report() -> String {
    format!("{MISSING_POLICY}\n\n{}", Args::command().render_help())
}

fn parse_gigabytes(raw: &str) -> Result<f64, String> {
    let gb: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !gb.is_finite() || gb <= 0.0 {
        return Err(format!("'{raw}' must be a number greater than zero"));
    }
    Ok(gb)
}
