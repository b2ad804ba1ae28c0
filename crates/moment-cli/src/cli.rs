use clap::{Parser, Subcommand};
use moment_engine::Unit;

/// Inspect, build and shift fixed-offset instants.
#[derive(Parser)]
#[command(
    name = "moment",
    version,
    about = "Inspect, build and shift fixed-offset instants"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build an instant from civil fields and print every component.
    Fields(FieldsArgs),
    /// Build an instant from Unix epoch seconds and print every component.
    Epoch(EpochArgs),
    /// Add (or, with a negative amount, subtract) a unit amount.
    Shift(ShiftArgs),
    /// Print the current instant.
    Now(NowArgs),
    /// List the US federal holidays of a year with observed dates.
    Holidays(HolidaysArgs),
}

#[derive(clap::Args)]
pub struct FieldsArgs {
    #[arg(long)]
    pub year: i32,

    #[arg(long)]
    pub month: u32,

    #[arg(long)]
    pub day: u32,

    #[arg(long, default_value_t = 0)]
    pub hour: u32,

    #[arg(long, default_value_t = 0)]
    pub minute: u32,

    #[arg(long, default_value_t = 0)]
    pub second: u32,

    #[arg(long, default_value_t = 0)]
    pub nanosecond: u32,

    /// UTC offset in minutes east of Greenwich.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,
}

#[derive(clap::Args)]
pub struct EpochArgs {
    /// Seconds since 1970-01-01T00:00:00Z.
    #[arg(allow_negative_numbers = true)]
    pub seconds: i64,

    #[arg(long, default_value_t = 0)]
    pub nanosecond: u32,

    /// UTC offset in minutes east of Greenwich.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,
}

#[derive(clap::Args)]
pub struct ShiftArgs {
    /// Starting point in seconds since 1970-01-01T00:00:00Z.
    #[arg(long, allow_negative_numbers = true)]
    pub epoch: i64,

    /// years, months, weeks, days, hours, minutes, seconds, millis, micros or nanos.
    #[arg(long)]
    pub unit: Unit,

    #[arg(long, allow_negative_numbers = true)]
    pub amount: i64,

    /// UTC offset in minutes east of Greenwich.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,
}

#[derive(clap::Args)]
pub struct NowArgs {
    /// Report at offset zero instead of the local offset.
    #[arg(long)]
    pub utc: bool,
}

#[derive(clap::Args)]
pub struct HolidaysArgs {
    pub year: i32,
}
