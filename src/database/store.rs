use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::database::connection::DatabaseManager;
use crate::database::models::{AnswerRecord, I18nText, Question, Recipients, TextKey};

/// The external store the core talks to. Point lookups and point writes only;
/// nothing here caches store contents across operations.
#[async_trait]
pub trait QuizStore: Send + Sync {
    async fn get_question(&self, date: NaiveDate) -> Result<Option<Question>>;

    /// The recorded value for this key, or None when absent or empty.
    async fn get_answer_record(&self, user_id: &str, date: NaiveDate) -> Result<Option<String>>;

    /// Conditional write: records `value` only while no non-empty record
    /// exists for the key. Returns whether the write won.
    async fn set_answer_record(&self, user_id: &str, date: NaiveDate, value: &str) -> Result<bool>;

    async fn get_recipients(&self) -> Result<Recipients>;

    async fn get_text(&self, key: TextKey) -> Result<Option<String>>;
}

#[async_trait]
impl QuizStore for DatabaseManager {
    async fn get_question(&self, date: NaiveDate) -> Result<Option<Question>> {
        Question::find_by_date(&self.pool, date).await
    }

    async fn get_answer_record(&self, user_id: &str, date: NaiveDate) -> Result<Option<String>> {
        Ok(AnswerRecord::find(&self.pool, user_id, date)
            .await?
            .map(|record| record.value))
    }

    async fn set_answer_record(&self, user_id: &str, date: NaiveDate, value: &str) -> Result<bool> {
        AnswerRecord::insert_if_absent(&self.pool, user_id, date, value).await
    }

    async fn get_recipients(&self) -> Result<Recipients> {
        Recipients::load(&self.pool).await
    }

    async fn get_text(&self, key: TextKey) -> Result<Option<String>> {
        I18nText::find(&self.pool, key).await
    }
}
