use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use sqlx::FromRow;

use crate::utils::datetime::{format_quiz_date, parse_quiz_date};

/// One quiz entry in the catalog. The correct cell is 0-indexed here; the
/// store carries it 1-indexed in the external `RxC` notation.
#[derive(Debug, Clone)]
pub struct Question {
    pub date: NaiveDate,
    pub rows: u32,
    pub cols: u32,
    pub correct_row: u32,
    pub correct_col: u32,
    pub question_picture: String,
    pub question_caption: String,
    pub answer_picture: String,
    pub answer_caption: String,
}

#[derive(Debug, Clone, FromRow)]
struct QuestionRow {
    date: String,
    keyboard_size: String,
    correct_answer: String,
    question_picture: String,
    question_caption: String,
    answer_picture: String,
    answer_caption: String,
}

impl Question {
    pub async fn find_by_date(pool: &sqlx::SqlitePool, date: NaiveDate) -> Result<Option<Self>> {
        let row = sqlx::query_as::<_, QuestionRow>(
            "SELECT date, keyboard_size, correct_answer, question_picture, question_caption, \
             answer_picture, answer_caption FROM questions WHERE date = ?",
        )
        .bind(format_quiz_date(date))
        .fetch_optional(pool)
        .await?;

        row.map(Question::from_row).transpose()
    }

    fn from_row(row: QuestionRow) -> Result<Self> {
        let date = parse_quiz_date(&row.date)?;

        let (rows, cols) = parse_pair(&row.keyboard_size)?;
        if rows == 0 || cols == 0 {
            return Err(anyhow!(
                "keyboard for {} must be at least 1x1, got {}",
                row.date,
                row.keyboard_size
            ));
        }

        let (correct_row, correct_col) = parse_pair(&row.correct_answer)?;
        if correct_row == 0 || correct_col == 0 || correct_row > rows || correct_col > cols {
            return Err(anyhow!(
                "correct answer {} lies outside the {}x{} keyboard for {}",
                row.correct_answer,
                rows,
                cols,
                row.date
            ));
        }

        Ok(Question {
            date,
            rows,
            cols,
            correct_row: correct_row - 1,
            correct_col: correct_col - 1,
            question_picture: row.question_picture,
            question_caption: row.question_caption,
            answer_picture: row.answer_picture,
            answer_caption: row.answer_caption,
        })
    }

    /// `row` and `col` are 0-indexed grid coordinates.
    pub fn is_correct_cell(&self, row: u32, col: u32) -> bool {
        row == self.correct_row && col == self.correct_col
    }
}

fn parse_pair(input: &str) -> Result<(u32, u32)> {
    let (first, second) = input
        .trim()
        .split_once('x')
        .ok_or_else(|| anyhow!("expected 'RxC', got '{}'", input))?;

    let first = first
        .trim()
        .parse()
        .map_err(|_| anyhow!("expected 'RxC', got '{}'", input))?;
    let second = second
        .trim()
        .parse()
        .map_err(|_| anyhow!("expected 'RxC', got '{}'", input))?;

    Ok((first, second))
}
