//! Grades a single answer tap: late, duplicate, or recorded.

use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;

use crate::database::models::Texts;
use crate::database::store::QuizStore;
use crate::utils::datetime::format_timestamp;

/// The correct/wrong label a button carries, fixed at publish time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    Correct,
    Wrong,
}

impl Claim {
    pub fn as_str(&self) -> &'static str {
        match self {
            Claim::Correct => "correct",
            Claim::Wrong => "wrong",
        }
    }
}

impl FromStr for Claim {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self> {
        match input {
            "correct" => Ok(Claim::Correct),
            "wrong" => Ok(Claim::Wrong),
            other => Err(anyhow::anyhow!("unknown claim status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Late,
    AlreadyAnswered,
    Recorded(Claim),
}

impl Outcome {
    pub fn feedback<'a>(&self, texts: &'a Texts) -> &'a str {
        match self {
            Outcome::Late => &texts.late,
            Outcome::AlreadyAnswered => &texts.answered_already,
            Outcome::Recorded(Claim::Correct) => &texts.correct,
            Outcome::Recorded(Claim::Wrong) => &texts.wrong,
        }
    }
}

/// Submissions are accepted until the next day's posting time.
pub fn deadline(date: NaiveDate, schedule_time: NaiveTime) -> NaiveDateTime {
    (date + Duration::days(1)).and_time(schedule_time)
}

/// Decides the outcome for one tap and performs the store mutation for it.
///
/// The deadline check runs before any store access; `now` exactly at the
/// deadline is on-time. At most one write happens per call, and the store's
/// conditional write guarantees that of any number of racing submissions for
/// the same (user, date) key exactly one is recorded.
pub async fn evaluate(
    store: &dyn QuizStore,
    user_id: &str,
    date: NaiveDate,
    claim: Claim,
    now: NaiveDateTime,
    schedule_time: NaiveTime,
) -> Result<Outcome> {
    if now > deadline(date, schedule_time) {
        return Ok(Outcome::Late);
    }

    if store.get_answer_record(user_id, date).await?.is_some() {
        return Ok(Outcome::AlreadyAnswered);
    }

    let value = format!("{} {}", claim.as_str(), format_timestamp(now));
    if store.set_answer_record(user_id, date, &value).await? {
        Ok(Outcome::Recorded(claim))
    } else {
        // Lost the race against a concurrent submission for the same key.
        Ok(Outcome::AlreadyAnswered)
    }
}
