use anyhow::Result;

/// The fixed set of user-facing message keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Correct,
    Wrong,
    Late,
    AnsweredAlready,
}

impl TextKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextKey::Correct => "correct",
            TextKey::Wrong => "wrong",
            TextKey::Late => "late",
            TextKey::AnsweredAlready => "answered_already",
        }
    }
}

/// All feedback strings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Texts {
    pub correct: String,
    pub wrong: String,
    pub late: String,
    pub answered_already: String,
}

pub struct I18nText;

impl I18nText {
    pub async fn find(pool: &sqlx::SqlitePool, key: TextKey) -> Result<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM i18n WHERE key = ?")
            .bind(key.as_str())
            .fetch_optional(pool)
            .await?;
        Ok(value)
    }
}
