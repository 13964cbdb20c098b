use alke_parking_lot::prelude::*;
use alke_parking_lot::{sample_roster, ParkingConfig, RosterLoader};
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod report;
use report::ConsoleReporter;

const SAMPLE_CHECK_OUTS: [&str; 2] = ["AA111DD", "AA111JA"];

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    #[arg(short = 'v')]
    verbose: bool,

    /// JSON Lines roster to check in; the built-in sample roster is used otherwise
    #[arg(short = 'r', long = "roster")]
    roster: Option<String>,

    /// Plate to check out after check-in, may be repeated
    #[arg(short = 'o', long = "check-out", value_name = "PLATE")]
    check_out: Vec<String>,

    #[arg(long = "lot-name")]
    lot_name: Option<String>,

    #[arg(long = "capacity")]
    capacity: Option<usize>,

    #[arg(short = 'c', long = "config", default_value = ".parking.json")]
    config: String,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Loads the config and applies command line overrides, saving them when given.
fn resolve_config(args: &Args) -> ParkingConfig {
    let config_path = expand_path(&args.config);
    let mut config = ParkingConfig::load(&config_path).unwrap_or_else(|e| {
        warn!("Could not load config, using defaults: {:#}", e);
        ParkingConfig::default()
    });

    if args.lot_name.is_none() && args.capacity.is_none() {
        return config;
    }

    if let Some(lot_name) = &args.lot_name {
        config.lot_name = lot_name.clone();
    }
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    if let Err(e) = config.save(&config_path) {
        warn!("Could not save config: {:#}", e);
    }

    config
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = resolve_config(&args);

    let (roster, check_outs) = match &args.roster {
        Some(path) => {
            let roster = RosterLoader::new()
                .load_from_file(expand_path(path))
                .context("Failed to load roster")?;
            (roster, args.check_out.clone())
        }
        None => {
            let check_outs = if args.check_out.is_empty() {
                SAMPLE_CHECK_OUTS.iter().map(|p| p.to_string()).collect()
            } else {
                args.check_out.clone()
            };
            (sample_roster(Utc::now()), check_outs)
        }
    };

    let mut out = std::io::stdout().lock();
    run(&mut out, &config, roster, &check_outs, Utc::now())?;

    Ok(())
}

/// Checks in `roster`, checks out `check_outs` at `now` and writes the console report.
fn run<W: Write>(
    out: &mut W,
    config: &ParkingConfig,
    roster: Vec<Vehicle>,
    check_outs: &[String],
    now: DateTime<Utc>,
) -> Result<ParkingReport> {
    let mut parking = Parking::with_capacity(config.capacity);
    let reporter = ConsoleReporter::new(&config.lot_name);

    reporter.section(out, "income check")?;
    for (place, vehicle) in roster.into_iter().enumerate() {
        let result = parking.check_in(vehicle);
        reporter.check_in(out, place, &result)?;
    }

    reporter.section(out, "BUY")?;
    for plate in check_outs {
        let result = parking.check_out_at(plate, now);
        reporter.check_out(out, &result)?;
    }

    reporter.section(out, "PLATE LIST")?;
    reporter.plates(out, &parking.list_plates())?;

    let report = parking.report();
    reporter.summary(out, &report)?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_check_outs() -> Vec<String> {
        SAMPLE_CHECK_OUTS.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_default_run_with_sample_roster() {
        let now = Utc::now();
        let mut buffer = Vec::new();

        let report = run(
            &mut buffer,
            &ParkingConfig::default(),
            sample_roster(now),
            &sample_check_outs(),
            now,
        )
        .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(report, ParkingReport::new(2, 32));
        assert!(output.contains("Welcome to AlkeParking! place -> 0\n"));
        assert!(output.contains("Welcome to AlkeParking! place -> 19\n"));
        assert_eq!(output.matches("Sorry, the check-in failed").count(), 1);
        assert!(output.contains("Your fee is $17. Come back soon\n"));
        assert!(output.contains("Your fee is $15. Come back soon\n"));
        assert!(output.ends_with("2 vehicles have checked out and have earnings of 32\n"));
    }

    #[test]
    fn test_plate_list_excludes_departed_and_rejected() {
        let now = Utc::now();
        let mut buffer = Vec::new();

        run(
            &mut buffer,
            &ParkingConfig::default(),
            sample_roster(now),
            &sample_check_outs(),
            now,
        )
        .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let plate_list = output
            .split("//////////// PLATE LIST ////////////\n")
            .nth(1)
            .unwrap();
        let plates: Vec<&str> = plate_list.lines().take_while(|l| !l.is_empty()).collect();
        assert_eq!(plates.len(), 18);
        assert!(!plates.contains(&"AA111DD"));
        assert!(!plates.contains(&"AA111JA"));
        assert!(!plates.contains(&"ZC733FZZ"));
    }

    #[test]
    fn test_unknown_plate_check_out_fails() {
        let now = Utc::now();
        let mut buffer = Vec::new();

        let report = run(
            &mut buffer,
            &ParkingConfig::default(),
            sample_roster(now),
            &["XX000XX".to_string()],
            now,
        )
        .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(report, ParkingReport::default());
        assert!(output.contains("Sorry, the check-out failed\n"));
    }
}
