//! Meta command - show metadata for a shortcode.

use std::io::Write;

use chrono::{DateTime, FixedOffset};
use clap::Args;
use pare_client::{ApiResponse, MetaResponse, PareClient};

use super::{Context, Outcome};
use crate::error::{CliError, CliResult};

/// Date and clock of a `date`-style timestamp; the zone and year follow.
const UNIX_CLOCK: &str = "%a %b %e %H:%M:%S";

/// Arguments for the meta command.
#[derive(Args, Debug)]
pub struct MetaArgs {
    /// Output JSON instead of human-readable
    #[arg(long)]
    pub json: bool,

    /// Code to fetch metadata for
    pub code: String,
}

/// Run the meta command.
pub fn run(args: MetaArgs, ctx: &Context, out: &mut impl Write) -> CliResult<Outcome> {
    tracing::debug!(code = %args.code, "meta");
    let client = PareClient::from_config(&ctx.config)?;

    let meta = match client.links().meta(&args.code)? {
        ApiResponse::Success(meta) => meta,
        ApiResponse::Status(404) => {
            writeln!(out, "noexist")?;
            return Ok(Outcome::NoExist);
        }
        ApiResponse::Status(status) => return Err(CliError::UnexpectedStatus(status)),
    };

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&meta)?)?;
    } else {
        print_human(&args.code, &meta, out)?;
    }
    Ok(Outcome::Done)
}

fn print_human(code: &str, meta: &MetaResponse, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Code: {}", code.to_uppercase())?;
    writeln!(out, "Full URL: {}", meta.full_url)?;
    writeln!(out, "Owner: {}", meta.meta.owner)?;
    writeln!(out, "Created at: {}", unix_date(&meta.meta.time))?;
    if let Some(user_meta) = &meta.meta.user_meta {
        writeln!(out, "User-defined metadata: {}", user_meta)?;
    }
    Ok(())
}

/// Format like `date`, e.g. `Mon Jan  2 15:04:05 UTC 2006`. A zero offset
/// reads `UTC`; any other keeps its numeric form (`+0100`).
fn unix_date(time: &DateTime<FixedOffset>) -> String {
    let zone = if time.offset().local_minus_utc() == 0 {
        "UTC".to_string()
    } else {
        time.format("%z").to_string()
    };
    format!("{} {} {}", time.format(UNIX_CLOCK), zone, time.format("%Y"))
}
