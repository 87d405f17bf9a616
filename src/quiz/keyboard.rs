use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::database::models::Question;
use crate::quiz::submission::Claim;
use crate::quiz::token;

/// Builds the answer grid for a question. Labels are 1-indexed `RxC`
/// positions; each callback token embeds the question date and the claim
/// derived by comparing the button's cell to the correct cell, so exactly one
/// button in the grid carries `correct`.
pub fn question_keyboard(question: &Question) -> InlineKeyboardMarkup {
    let rows = (0..question.rows).map(|row| {
        (0..question.cols)
            .map(|col| {
                let claim = if question.is_correct_cell(row, col) {
                    Claim::Correct
                } else {
                    Claim::Wrong
                };
                InlineKeyboardButton::callback(
                    format!("{}x{}", row + 1, col + 1),
                    token::encode(question.date, claim),
                )
            })
            .collect::<Vec<_>>()
    });

    InlineKeyboardMarkup::new(rows)
}
