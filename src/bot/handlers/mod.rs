pub mod callback;

use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

use crate::bot::transport::Transport;
use crate::quiz::context::AppContext;

pub struct BotHandler {
    pub ctx: AppContext,
    pub transport: Arc<dyn Transport>,
}

impl BotHandler {
    pub fn new(ctx: AppContext, transport: Arc<dyn Transport>) -> Self {
        Self { ctx, transport }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::UpdateFilterExt;

        let ctx = self.ctx.clone();
        let transport = self.transport.clone();

        teloxide::dptree::entry().branch(Update::filter_callback_query().endpoint(
            move |bot, q| {
                let ctx = ctx.clone();
                let transport = transport.clone();
                async move { callback::callback_handler(bot, q, ctx, transport).await }
            },
        ))
    }
}
