//! The daily publish run: reveal yesterday's answer, then announce today's
//! question.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use std::sync::Arc;
use tracing::{error, info};

use crate::bot::transport::Transport;
use crate::quiz::context::AppContext;
use crate::quiz::keyboard::question_keyboard;
use crate::utils::datetime::format_quiz_date;
use crate::utils::report::build_error_report;

/// What one run actually sent. A false flag means the catalog had no entry
/// for that step, which is a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishReport {
    pub revealed: bool,
    pub announced: bool,
}

pub struct DailyPublisher {
    ctx: AppContext,
    transport: Arc<dyn Transport>,
}

impl DailyPublisher {
    pub fn new(ctx: AppContext, transport: Arc<dyn Transport>) -> Self {
        Self { ctx, transport }
    }

    /// Reveal always runs before Announce. Both steps are attempted on every
    /// run; a step's collaborator error propagates after the other step has
    /// had its attempt.
    pub async fn run(&self, today: NaiveDate) -> Result<PublishReport> {
        info!("Starting daily publish run for {}", format_quiz_date(today));

        let revealed = self.reveal_answer(today).await;
        let announced = self.announce_question(today).await;

        let report = PublishReport {
            revealed: revealed?,
            announced: announced?,
        };

        info!(
            "Daily publish run done: revealed={}, announced={}",
            report.revealed, report.announced
        );
        Ok(report)
    }

    async fn reveal_answer(&self, today: NaiveDate) -> Result<bool> {
        let yesterday = today - Duration::days(1);

        let question = match self.ctx.store.get_question(yesterday).await? {
            Some(question) => question,
            None => {
                info!("No answer to reveal for {}", format_quiz_date(yesterday));
                return Ok(false);
            }
        };

        self.transport
            .publish_answer(
                self.ctx.recipients.publish,
                &question.answer_picture,
                &question.answer_caption,
            )
            .await?;

        info!("Revealed answer for {}", format_quiz_date(yesterday));
        Ok(true)
    }

    async fn announce_question(&self, today: NaiveDate) -> Result<bool> {
        let question = match self.ctx.store.get_question(today).await? {
            Some(question) => question,
            None => {
                info!("No question to announce for {}", format_quiz_date(today));
                return Ok(false);
            }
        };

        let keyboard = question_keyboard(&question);
        self.transport
            .publish_question(
                self.ctx.recipients.publish,
                &question.question_picture,
                &question.question_caption,
                keyboard,
            )
            .await?;

        info!("Announced question for {}", format_quiz_date(today));
        Ok(true)
    }

    /// One scheduled tick: run for the current date in the configured time
    /// zone and forward any failure to the admin chat.
    pub async fn run_scheduled(&self) {
        let today = self.ctx.today();
        if let Err(e) = self.run(today).await {
            error!("Daily publish run failed: {:#}", e);
            let payload = format_quiz_date(today);
            for message in build_error_report("the daily publish run", &payload, &e) {
                if let Err(send_err) = self
                    .transport
                    .notify_admin(self.ctx.recipients.admin, &message)
                    .await
                {
                    error!("Failed to forward error report to admin: {:#}", send_err);
                    break;
                }
            }
        }
    }
}
