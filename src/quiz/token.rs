//! Callback token wire format: `dq_<DD.MM.YYYY>_<correct|wrong>`.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::quiz::submission::Claim;
use crate::utils::datetime::{format_quiz_date, parse_quiz_date};

pub const CALLBACK_PREFIX: &str = "dq";

/// Quick namespace check used to route callback queries; anything else on the
/// bot is not ours.
pub fn matches(data: &str) -> bool {
    data.starts_with("dq_")
}

pub fn encode(date: NaiveDate, claim: Claim) -> String {
    format!("{CALLBACK_PREFIX}_{}_{}", format_quiz_date(date), claim.as_str())
}

/// Rejects anything that is not exactly three `_`-separated fields with our
/// namespace, a parseable date, and a known status.
pub fn decode(data: &str) -> Result<(NaiveDate, Claim)> {
    let parts: Vec<&str> = data.split('_').collect();
    if parts.len() != 3 {
        return Err(anyhow!(
            "callback token must have 3 fields, got {}",
            parts.len()
        ));
    }
    if parts[0] != CALLBACK_PREFIX {
        return Err(anyhow!("unknown callback namespace '{}'", parts[0]));
    }

    let date = parse_quiz_date(parts[1])?;
    let claim = parts[2].parse()?;

    Ok((date, claim))
}
