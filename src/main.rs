//! calbucket - calendar day boundaries, windows and bucket axes from the command line

mod logging;

use anyhow::Context;
use calbucket::calendar::{
    bucket_sequence, decode, decompose, encode, encode_simple, end_of_day, fake_buckets,
    in_window, start_of_day, utc_to_local_midnight,
};
use calbucket::config::Config;
use calbucket::utils::colour::colour_set;
use calbucket::utils::format::{print_banner, render, ReportRow};
use calbucket::utils::number::{compact_number, number_string};
use calbucket::utils::strings::{capitalize, safe_join};
use calbucket::{Instant, OutputFormat, Scale, TimeZoneId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calbucket")]
#[command(author, version, about = "Calendar day boundaries, time windows and bucket axes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Zone for wall-clock fields: UTC, local or an offset like +05:30
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    zone: Option<TimeZoneId>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Config file (default: <config dir>/calbucket/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Break an instant into calendar fields
    Fields {
        /// Epoch milliseconds, "now" or "yyyy-MM-dd HH:mm"
        #[arg(allow_hyphen_values = true)]
        instant: String,
    },
    /// Start and end of the day containing an instant
    Day {
        #[arg(allow_hyphen_values = true)]
        instant: String,
    },
    /// Check whether TARGET lies within [START, END]
    Window {
        #[arg(allow_hyphen_values = true)]
        target: String,
        #[arg(allow_hyphen_values = true)]
        start: String,
        #[arg(allow_hyphen_values = true)]
        end: String,
    },
    /// Relabel the UTC calendar date of an instant as local midnight
    Shift {
        #[arg(allow_hyphen_values = true)]
        instant: String,
    },
    /// Bucket boundaries from the day of START through the day of END
    Buckets {
        #[arg(allow_hyphen_values = true)]
        start: String,
        #[arg(allow_hyphen_values = true)]
        end: String,
        /// day, week or month
        #[arg(short, long)]
        scale: Option<String>,
        /// Ignore the range and return a placeholder year of month starts
        #[arg(long)]
        fake: bool,
    },
    /// Encode or decode CSV date strings
    Csv {
        #[command(subcommand)]
        action: CsvAction,
    },
    /// Colour set for chart series
    Colours {
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
        /// Evenly spread hues instead of random colours
        #[arg(long)]
        distinct: bool,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show a sample of every helper
    Demo,
}

#[derive(Subcommand)]
enum CsvAction {
    /// Instant to yyyy-MM-dd HH:mm
    Encode {
        #[arg(allow_hyphen_values = true)]
        instant: String,
        /// Use yyyy/MM/dd instead
        #[arg(long)]
        simple: bool,
    },
    /// yyyy-MM-dd HH:mm to instant
    Decode { text: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::discover(cli.config.as_deref())?;
    let zone = cli.zone.or(config.zone).unwrap_or_default();
    let format = cli.format.or(config.format).unwrap_or_default();
    tracing::debug!(%zone, ?format, "resolved settings");

    let rows = match cli.command {
        Commands::Fields { ref instant } => run_fields(instant, zone)?,
        Commands::Day { ref instant } => run_day(instant, zone)?,
        Commands::Window {
            ref target,
            ref start,
            ref end,
        } => run_window(target, start, end, zone)?,
        Commands::Shift { ref instant } => run_shift(instant, zone)?,
        Commands::Buckets {
            ref start,
            ref end,
            ref scale,
            fake,
        } => {
            let scale = scale.as_deref().unwrap_or(config.buckets.scale.as_str());
            run_buckets(start, end, scale, fake, config.buckets.fake_year, zone)?
        }
        Commands::Csv { ref action } => run_csv(action, zone)?,
        Commands::Colours {
            count,
            distinct,
            seed,
        } => run_colours(count, distinct, seed),
        Commands::Demo => run_demo(zone)?,
    };

    // Only show banner for table format
    if matches!(format, OutputFormat::Table) {
        print_banner();
    }
    println!("{}", render(&rows, format));

    Ok(())
}

/// Epoch milliseconds, `now`, or a `yyyy-MM-dd HH:mm` reading in `zone`
fn parse_instant(raw: &str, zone: TimeZoneId) -> anyhow::Result<Instant> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("now") {
        return Ok(Instant::now());
    }
    if let Ok(millis) = trimmed.parse::<i64>() {
        return Ok(Instant::from_millis(millis)?);
    }
    decode(trimmed, zone).with_context(|| {
        format!("expected epoch milliseconds, \"now\" or yyyy-MM-dd HH:mm, got {raw:?}")
    })
}

fn run_fields(raw: &str, zone: TimeZoneId) -> anyhow::Result<Vec<ReportRow>> {
    let instant = parse_instant(raw, zone)?;
    let f = decompose(instant, zone);
    Ok(vec![
        ReportRow::instant("instant", instant, zone),
        ReportRow::text("year", f.year.to_string()),
        ReportRow::text("month", f.month.to_string()),
        ReportRow::text("day", f.day.to_string()),
        ReportRow::text("hour", f.hour.to_string()),
        ReportRow::text("minute", f.minute.to_string()),
        ReportRow::text("second", f.second.to_string()),
        ReportRow::text("millisecond", f.millisecond.to_string()),
    ])
}

fn run_day(raw: &str, zone: TimeZoneId) -> anyhow::Result<Vec<ReportRow>> {
    let instant = parse_instant(raw, zone)?;
    Ok(vec![
        ReportRow::instant("instant", instant, zone),
        ReportRow::instant("start of day", start_of_day(instant, zone), zone),
        ReportRow::instant("end of day", end_of_day(instant, zone), zone),
    ])
}

fn run_window(
    target: &str,
    start: &str,
    end: &str,
    zone: TimeZoneId,
) -> anyhow::Result<Vec<ReportRow>> {
    let target = parse_instant(target, zone)?;
    let start = parse_instant(start, zone)?;
    let end = parse_instant(end, zone)?;
    if start > end {
        tracing::info!(%start, %end, "window is inverted and matches nothing");
    }
    Ok(vec![
        ReportRow::instant("target", target, zone),
        ReportRow::instant("start", start, zone),
        ReportRow::instant("end", end, zone),
        ReportRow::text("inside", in_window(target, start, end).to_string()),
    ])
}

fn run_shift(raw: &str, zone: TimeZoneId) -> anyhow::Result<Vec<ReportRow>> {
    let instant = parse_instant(raw, zone)?;
    Ok(vec![
        ReportRow::instant("utc", instant, TimeZoneId::Utc),
        ReportRow::instant("local midnight", utc_to_local_midnight(instant, zone), zone),
    ])
}

fn run_buckets(
    start: &str,
    end: &str,
    scale: &str,
    fake: bool,
    fake_year: i32,
    zone: TimeZoneId,
) -> anyhow::Result<Vec<ReportRow>> {
    // an unknown scale fails even in fake mode
    let scale: Scale = scale.parse()?;
    let buckets = if fake {
        fake_buckets(fake_year, zone)
    } else {
        let start = parse_instant(start, zone)?;
        let end = parse_instant(end, zone)?;
        bucket_sequence(start, end, scale, false, zone)
    };
    tracing::info!(%scale, fake, count = buckets.len(), "bucket sequence ready");

    Ok(buckets
        .into_iter()
        .enumerate()
        .map(|(i, bucket)| ReportRow::instant(format!("{scale} {i}"), bucket, zone))
        .collect())
}

fn run_csv(action: &CsvAction, zone: TimeZoneId) -> anyhow::Result<Vec<ReportRow>> {
    match action {
        CsvAction::Encode { instant, simple } => {
            let instant = parse_instant(instant, zone)?;
            let text = if *simple {
                encode_simple(instant, zone)
            } else {
                encode(instant, zone)
            };
            Ok(vec![
                ReportRow::instant("instant", instant, zone),
                ReportRow::text("csv", text),
            ])
        }
        CsvAction::Decode { text } => {
            let instant = decode(text, zone)?;
            Ok(vec![
                ReportRow::text("csv", text.clone()),
                ReportRow::instant("instant", instant, zone),
            ])
        }
    }
}

fn run_colours(count: usize, distinct: bool, seed: Option<u64>) -> Vec<ReportRow> {
    colour_set(seed, count, distinct)
        .into_iter()
        .enumerate()
        .map(|(i, colour)| ReportRow::text(format!("colour {i}"), colour.to_string()))
        .collect()
}

fn run_demo(zone: TimeZoneId) -> anyhow::Result<Vec<ReportRow>> {
    let now = Instant::now();
    let offset = |delta: i64| Instant::from_millis(now.as_millis() + delta);
    let csv_sample = "2025-11-03 07:00";

    let colours: Vec<String> = colour_set(None, 5, true)
        .iter()
        .map(|c| c.to_string())
        .collect();

    Ok(vec![
        ReportRow::instant("now", now, zone),
        ReportRow::text(
            "in_window(now, now-1s, now+1s)",
            in_window(now, offset(-1000)?, offset(1000)?).to_string(),
        ),
        ReportRow::text(
            "in_window(now, now+1s, now+2s)",
            in_window(now, offset(1000)?, offset(2000)?).to_string(),
        ),
        ReportRow::instant("utc_to_local_midnight(now)", utc_to_local_midnight(now, zone), zone),
        ReportRow::instant("start_of_day(now)", start_of_day(now, zone), zone),
        ReportRow::instant("end_of_day(now)", end_of_day(now, zone), zone),
        ReportRow::text("encode(now)", encode(now, zone)),
        ReportRow::text("encode_simple(now)", encode_simple(now, zone)),
        ReportRow::instant(format!("decode({csv_sample:?})"), decode(csv_sample, zone)?, zone),
        ReportRow::text("capitalize(\"TEST\")", capitalize("TEST")),
        ReportRow::text("capitalize(\"test\")", capitalize("test")),
        ReportRow::text(
            "safe_join([\"1,,\", \"2\", \"three\", \"\", \"5.55\", \",\"], \",\")",
            safe_join(["1,,", "2", "three", "", "5.55", ","], ","),
        ),
        ReportRow::text("number_string(5.678, 2, signed)", number_string(5.678, 2, true)),
        ReportRow::text("number_string(-5.678, 2, signed)", number_string(-5.678, 2, true)),
        ReportRow::text("number_string(0, 3, signed)", number_string(0.0, 3, true)),
        ReportRow::text("number_string(12345.6789, 0)", number_string(12345.6789, 0, false)),
        ReportRow::text("compact_number(2345678, 1)", compact_number(2_345_678, 1)),
        ReportRow::text("compact_number(2345678, 3)", compact_number(2_345_678, 3)),
        ReportRow::text("colour_set(5, distinct)", colours.join(" ")),
    ])
}
