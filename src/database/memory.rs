//! In-memory [`QuizStore`] used by the test suite. Shares the CAS contract of
//! the SQLite store: a write wins only while the key holds no non-empty value.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::database::models::{Question, Recipients, TextKey, Texts};
use crate::database::store::QuizStore;

pub struct MemoryStore {
    questions: HashMap<NaiveDate, Question>,
    results: Mutex<HashMap<(String, NaiveDate), String>>,
    recipients: Recipients,
    texts: Texts,
}

impl MemoryStore {
    pub fn new(recipients: Recipients) -> Self {
        Self {
            questions: HashMap::new(),
            results: Mutex::new(HashMap::new()),
            recipients,
            texts: Texts {
                correct: "Correct!".to_string(),
                wrong: "Wrong!".to_string(),
                late: "Too late!".to_string(),
                answered_already: "Already answered!".to_string(),
            },
        }
    }

    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.insert(question.date, question);
        self
    }

    pub fn with_text(mut self, key: TextKey, value: &str) -> Self {
        let slot = match key {
            TextKey::Correct => &mut self.texts.correct,
            TextKey::Wrong => &mut self.texts.wrong,
            TextKey::Late => &mut self.texts.late,
            TextKey::AnsweredAlready => &mut self.texts.answered_already,
        };
        *slot = value.to_string();
        self
    }

    pub fn record_count(&self) -> usize {
        self.lock_results().len()
    }

    pub fn record(&self, user_id: &str, date: NaiveDate) -> Option<String> {
        self.lock_results().get(&(user_id.to_string(), date)).cloned()
    }

    fn lock_results(&self) -> std::sync::MutexGuard<'_, HashMap<(String, NaiveDate), String>> {
        self.results.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl QuizStore for MemoryStore {
    async fn get_question(&self, date: NaiveDate) -> Result<Option<Question>> {
        Ok(self.questions.get(&date).cloned())
    }

    async fn get_answer_record(&self, user_id: &str, date: NaiveDate) -> Result<Option<String>> {
        Ok(self
            .lock_results()
            .get(&(user_id.to_string(), date))
            .filter(|value| !value.is_empty())
            .cloned())
    }

    async fn set_answer_record(&self, user_id: &str, date: NaiveDate, value: &str) -> Result<bool> {
        let mut results = self.lock_results();
        let cell = results.entry((user_id.to_string(), date)).or_default();
        if cell.is_empty() {
            *cell = value.to_string();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn get_recipients(&self) -> Result<Recipients> {
        Ok(self.recipients)
    }

    async fn get_text(&self, key: TextKey) -> Result<Option<String>> {
        let value = match key {
            TextKey::Correct => &self.texts.correct,
            TextKey::Wrong => &self.texts.wrong,
            TextKey::Late => &self.texts.late,
            TextKey::AnsweredAlready => &self.texts.answered_already,
        };
        Ok(Some(value.clone()))
    }
}
