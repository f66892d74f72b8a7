use anyhow::{Context, Result, bail};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::warn;

#[derive(Debug, Clone, Copy)]
enum Base {
    Seconds,
    Days,
}

/// Unit prefix, base quantity and multiplier. Months and years are fixed-length.
const UNITS: [(&str, Base, i64); 7] = [
    ("second", Base::Seconds, 1),
    ("minute", Base::Seconds, 60),
    ("hour", Base::Seconds, 3600),
    ("day", Base::Days, 1),
    ("week", Base::Days, 7),
    ("month", Base::Days, 30),
    ("year", Base::Days, 365),
];

/// Parse a phrase like `"3 days ago"` into the offset it describes
///
/// The phrase must be exactly three words: a non-negative integer, a unit word and a
/// trailing word that is ignored. Units match case-insensitively by prefix, so both
/// `day` and `DAYS` work.
///
/// # Errors
///
/// Returns an error on a wrong word count, a magnitude that is not a non-negative
/// integer, an unknown unit, or an offset too large to represent.
pub fn parse_relative_offset(input: &str) -> Result<TimeDelta> {
    let lowered = input.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let [magnitude, unit, _] = tokens.as_slice() else {
        bail!("expected \"<number> <unit> ago\", got {} word(s)", tokens.len());
    };

    let magnitude: u64 =
        magnitude.parse().with_context(|| format!("invalid magnitude: {}", magnitude))?;

    let (_, base, multiplier) = UNITS
        .iter()
        .find(|(prefix, _, _)| unit.starts_with(prefix))
        .with_context(|| format!("unknown time unit: {}", unit))?;

    let amount = i64::try_from(magnitude).ok().and_then(|m| m.checked_mul(*multiplier));
    let delta = match base {
        Base::Seconds => amount.and_then(TimeDelta::try_seconds),
        Base::Days => amount.and_then(TimeDelta::try_days),
    };

    delta.with_context(|| format!("offset out of range: {} {}", magnitude, unit))
}

/// Resolve a relative phrase against `now`
///
/// Never fails: unparseable input logs a warning and yields `now` itself, which
/// leaves a time bound built from it inert.
pub fn parse_relative(input: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    let resolved = parse_relative_offset(input).and_then(|delta| {
        now.checked_sub_signed(delta).context("resulting time is out of range")
    });

    match resolved {
        Ok(point) => point,
        Err(e) => {
            warn!("Failed to parse relative time {:?}: {:#}", input, e);
            now
        }
    }
}
