use anyhow::{anyhow, Result};
use chrono::NaiveTime;
use chrono_tz::Tz;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    pub timezone: Tz,
    pub schedule_time: NaiveTime,
    pub debug: bool,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:./data/quiz.db".to_string());
        let database_url = if database_url.trim().is_empty() {
            "sqlite:./data/quiz.db".to_string()
        } else {
            database_url
        };

        let tz_name = env::var("TZ").unwrap_or_else(|_| "UTC".to_string());
        let timezone: Tz = tz_name
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid TZ '{}'", tz_name))?;

        let time_str = env::var("SCHEDULE_TIME").unwrap_or_else(|_| "20:00".to_string());
        let schedule_time = NaiveTime::parse_from_str(time_str.trim(), "%H:%M")
            .map_err(|_| anyhow!("Invalid SCHEDULE_TIME '{}', expected HH:MM", time_str))?;

        let debug = matches!(
            env::var("DEBUG").unwrap_or_default().trim().to_lowercase().as_str(),
            "true" | "1" | "yes"
        );

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token: token,
            database_url,
            timezone,
            schedule_time,
            debug,
            http_port,
        })
    }
}
