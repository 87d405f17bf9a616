use anyhow::{anyhow, Result};

pub const ROLE_PUBLISH: &str = "publish";
pub const ROLE_ADMIN: &str = "admin";

/// Outbound destinations, resolved once at startup and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipients {
    pub publish: i64,
    pub admin: i64,
}

impl Recipients {
    /// Fails unless exactly one recipient exists per role.
    pub async fn load(pool: &sqlx::SqlitePool) -> Result<Self> {
        Ok(Recipients {
            publish: single_chat_id(pool, ROLE_PUBLISH).await?,
            admin: single_chat_id(pool, ROLE_ADMIN).await?,
        })
    }
}

async fn single_chat_id(pool: &sqlx::SqlitePool, role: &str) -> Result<i64> {
    let rows: Vec<(i64,)> = sqlx::query_as("SELECT chat_id FROM recipients WHERE role = ?")
        .bind(role)
        .fetch_all(pool)
        .await?;

    match rows.as_slice() {
        [(chat_id,)] => Ok(*chat_id),
        [] => Err(anyhow!("no recipient with role '{}' configured", role)),
        many => Err(anyhow!(
            "expected exactly one recipient with role '{}', found {}",
            role,
            many.len()
        )),
    }
}
