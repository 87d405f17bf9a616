use chrono::{NaiveTime, Timelike};
use chrono_tz::Tz;
use std::sync::Arc;
use std::time::Duration;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::config::Config;
use crate::services::publisher::DailyPublisher;

/// Fires the daily publish run. Production mode schedules it once per day at
/// the configured time in the configured time zone; debug mode fires a single
/// run shortly after startup and never recurs. There is no catch-up: a firing
/// missed while the process was down is simply skipped.
pub struct SchedulerService {
    publisher: Arc<DailyPublisher>,
    scheduler: JobScheduler,
    timezone: Tz,
    schedule_time: NaiveTime,
    debug: bool,
}

impl SchedulerService {
    pub async fn new(
        publisher: Arc<DailyPublisher>,
        config: &Config,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            publisher,
            scheduler,
            timezone: config.timezone,
            schedule_time: config.schedule_time,
            debug: config.debug,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let publisher = self.publisher.clone();

        let job = if self.debug {
            tracing::info!("Debug mode: scheduling one publish run in 2 seconds");
            Job::new_one_shot_async(Duration::from_secs(2), move |_uuid, _l| {
                let publisher = publisher.clone();
                Box::pin(async move {
                    publisher.run_scheduled().await;
                })
            })?
        } else {
            let cron = daily_cron(self.schedule_time);
            tracing::info!(
                "Scheduling daily publish at {} ({})",
                self.schedule_time.format("%H:%M"),
                self.timezone
            );
            Job::new_async_tz(cron.as_str(), self.timezone, move |_uuid, _l| {
                let publisher = publisher.clone();
                Box::pin(async move {
                    publisher.run_scheduled().await;
                })
            })?
        };

        self.scheduler.add(job).await?;
        self.scheduler.start().await?;

        tracing::info!("Scheduler started");
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }

    // Manual trigger for testing
    pub async fn publish_now(&self) {
        self.publisher.run_scheduled().await;
    }
}

fn daily_cron(time: NaiveTime) -> String {
    format!("0 {} {} * * *", time.minute(), time.hour())
}
