use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, warn};

use crate::bot::transport::Transport;
use crate::bot::HandlerResult;
use crate::quiz::context::AppContext;
use crate::quiz::submission::{self, Outcome};
use crate::quiz::token;
use crate::utils::datetime::format_quiz_date;
use crate::utils::report::build_error_report;

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    ctx: AppContext,
    transport: Arc<dyn Transport>,
) -> HandlerResult {
    let data = match q.data.clone() {
        Some(data) => data,
        None => {
            bot.answer_callback_query(q.id).await?;
            return Ok(());
        }
    };

    if !token::matches(&data) {
        // Not one of our answer buttons.
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    }

    if let Err(e) = handle_submission(&bot, &q, &data, &ctx).await {
        error!("Failed to handle callback '{}': {:#}", data, e);
        report_to_admin(transport.as_ref(), &ctx, &data, &e).await;

        // The user still gets an acknowledgement so the button stops
        // spinning; a second answer for an already-answered query is a no-op.
        if let Err(ack_err) = bot.answer_callback_query(q.id.clone()).await {
            warn!("Failed to acknowledge callback after error: {}", ack_err);
        }
    }

    Ok(())
}

async fn handle_submission(
    bot: &Bot,
    q: &CallbackQuery,
    data: &str,
    ctx: &AppContext,
) -> anyhow::Result<()> {
    let user_id = q.from.id.0.to_string();

    let (date, claim) = match token::decode(data) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Rejected malformed callback token '{}' from user {}: {}", data, user_id, e);
            bot.answer_callback_query(q.id.clone()).await?;
            return Ok(());
        }
    };

    let log_str = format!(
        "for user {} by date {} with claim {}",
        user_id,
        format_quiz_date(date),
        claim.as_str()
    );
    info!("Got callback {}", log_str);

    let outcome = submission::evaluate(
        ctx.store.as_ref(),
        &user_id,
        date,
        claim,
        ctx.now(),
        ctx.schedule_time,
    )
    .await?;

    match outcome {
        Outcome::Late => info!("Too late {}", log_str),
        Outcome::AlreadyAnswered => info!("Already answered {}", log_str),
        Outcome::Recorded(_) => info!("Set result {}", log_str),
    }

    bot.answer_callback_query(q.id.clone())
        .text(outcome.feedback(&ctx.texts))
        .await?;

    Ok(())
}

async fn report_to_admin(
    transport: &dyn Transport,
    ctx: &AppContext,
    payload: &str,
    error: &anyhow::Error,
) {
    for message in build_error_report("a callback query", payload, error) {
        if let Err(send_err) = transport.notify_admin(ctx.recipients.admin, &message).await {
            error!("Failed to forward error report to admin: {:#}", send_err);
            break;
        }
    }
}
