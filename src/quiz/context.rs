use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

use crate::config::Config;
use crate::database::models::{Recipients, TextKey, Texts};
use crate::database::store::QuizStore;

/// Everything a handler needs, bundled and passed explicitly. Recipients and
/// texts are resolved once here; a missing row fails startup before the
/// scheduler is armed.
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<dyn QuizStore>,
    pub recipients: Recipients,
    pub texts: Texts,
    pub timezone: Tz,
    pub schedule_time: NaiveTime,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("recipients", &self.recipients)
            .field("texts", &self.texts)
            .field("timezone", &self.timezone)
            .field("schedule_time", &self.schedule_time)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    pub async fn load(store: Arc<dyn QuizStore>, config: &Config) -> Result<Self> {
        let recipients = store.get_recipients().await?;

        let texts = Texts {
            correct: require_text(store.as_ref(), TextKey::Correct).await?,
            wrong: require_text(store.as_ref(), TextKey::Wrong).await?,
            late: require_text(store.as_ref(), TextKey::Late).await?,
            answered_already: require_text(store.as_ref(), TextKey::AnsweredAlready).await?,
        };

        Ok(Self {
            store,
            recipients,
            texts,
            timezone: config.timezone,
            schedule_time: config.schedule_time,
        })
    }

    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }

    pub fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }
}

async fn require_text(store: &dyn QuizStore, key: TextKey) -> Result<String> {
    store
        .get_text(key)
        .await?
        .ok_or_else(|| anyhow!("missing i18n text for key '{}'", key.as_str()))
}
