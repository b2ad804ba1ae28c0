use anyhow::{Context, Result};
use moment_engine::Instant;
use tracing::{debug, info};

use crate::cli::{EpochArgs, FieldsArgs, HolidaysArgs, NowArgs, ShiftArgs};
use crate::format::{iso_date, Breakdown};
use crate::holidays;

fn print_breakdown(t: Instant) -> Result<()> {
    let json = serde_json::to_string_pretty(&Breakdown::from(t))?;
    println!("{json}");
    Ok(())
}

pub fn fields(args: FieldsArgs) -> Result<()> {
    let t = Instant::from_fields(
        args.year,
        args.month,
        args.day,
        args.hour,
        args.minute,
        args.second,
        args.nanosecond,
        args.offset,
    )
    .context("invalid civil fields")?;
    debug!(?t, "built from fields");
    print_breakdown(t)
}

pub fn epoch(args: EpochArgs) -> Result<()> {
    let t = Instant::from_epoch_seconds(args.seconds, args.nanosecond, args.offset)
        .with_context(|| format!("invalid epoch value {}", args.seconds))?;
    debug!(?t, "built from epoch seconds");
    print_breakdown(t)
}

pub fn shift(args: ShiftArgs) -> Result<()> {
    let start = Instant::from_epoch_seconds(args.epoch, 0, args.offset)
        .with_context(|| format!("invalid epoch value {}", args.epoch))?;
    let shifted = start
        .plus(args.unit, args.amount)
        .with_context(|| format!("cannot shift by {} {}", args.amount, args.unit))?;
    info!(unit = %args.unit, amount = args.amount, "shifted");
    print_breakdown(shifted)
}

pub fn now(args: NowArgs) -> Result<()> {
    let t = if args.utc {
        Instant::now_utc()
    } else {
        Instant::now()
    }
    .context("system clock is outside the supported range")?;
    print_breakdown(t)
}

pub fn holidays(args: HolidaysArgs) -> Result<()> {
    let list = holidays::us_federal(args.year)?;
    info!(year = args.year, count = list.len(), "computed holidays");
    for h in list {
        println!("{}\t{}", iso_date(h.date), h.name);
    }
    Ok(())
}
