use anyhow::Result;
use chrono::NaiveDate;
use sqlx::FromRow;

use crate::utils::datetime::format_quiz_date;

/// A recorded submission for one (user, date) key. `value` is the outcome tag
/// followed by the submission timestamp.
#[derive(Debug, Clone, FromRow)]
pub struct AnswerRecord {
    pub user_id: String,
    pub date: String,
    pub value: String,
}

impl AnswerRecord {
    /// Returns the non-empty record for this key, if any. Rows pre-created
    /// with an empty value count as absent.
    pub async fn find(
        pool: &sqlx::SqlitePool,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<Self>> {
        let record = sqlx::query_as::<_, AnswerRecord>(
            "SELECT user_id, date, value FROM results WHERE user_id = ? AND date = ?",
        )
        .bind(user_id)
        .bind(format_quiz_date(date))
        .fetch_optional(pool)
        .await?;

        Ok(record.filter(|r| !r.value.is_empty()))
    }

    /// Compare-and-swap write: succeeds only while the cell is absent or
    /// empty. Returns false when a non-empty record already exists, so two
    /// racing submissions cannot both win.
    pub async fn insert_if_absent(
        pool: &sqlx::SqlitePool,
        user_id: &str,
        date: NaiveDate,
        value: &str,
    ) -> Result<bool> {
        let result = sqlx::query(
            "INSERT INTO results (user_id, date, value) VALUES (?, ?, ?) \
             ON CONFLICT(user_id, date) DO UPDATE SET value = excluded.value \
             WHERE results.value = ''",
        )
        .bind(user_id)
        .bind(format_quiz_date(date))
        .bind(value)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
