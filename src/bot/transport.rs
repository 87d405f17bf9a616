//! Outbound boundary: everything the core sends to the chat goes through
//! [`Transport`], so publishing can be exercised in tests without a live bot.

use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, InputFile, ParseMode};
use url::Url;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn publish_question(
        &self,
        chat_id: i64,
        picture: &str,
        caption: &str,
        keyboard: InlineKeyboardMarkup,
    ) -> Result<()>;

    async fn publish_answer(&self, chat_id: i64, picture: &str, caption: &str) -> Result<()>;

    /// Sends one operator report message. Text is HTML-formatted.
    async fn notify_admin(&self, chat_id: i64, text: &str) -> Result<()>;
}

pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

/// Picture references in the store are either URLs or Telegram file ids.
fn picture_input(reference: &str) -> InputFile {
    match Url::parse(reference) {
        Ok(parsed) => InputFile::url(parsed),
        Err(_) => InputFile::file_id(reference),
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn publish_question(
        &self,
        chat_id: i64,
        picture: &str,
        caption: &str,
        keyboard: InlineKeyboardMarkup,
    ) -> Result<()> {
        self.bot
            .send_photo(ChatId(chat_id), picture_input(picture))
            .caption(caption.to_string())
            .reply_markup(keyboard)
            .parse_mode(ParseMode::Markdown)
            .await?;
        Ok(())
    }

    async fn publish_answer(&self, chat_id: i64, picture: &str, caption: &str) -> Result<()> {
        self.bot
            .send_photo(ChatId(chat_id), picture_input(picture))
            .caption(caption.to_string())
            .parse_mode(ParseMode::Markdown)
            .await?;
        Ok(())
    }

    async fn notify_admin(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text.to_string())
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }
}
