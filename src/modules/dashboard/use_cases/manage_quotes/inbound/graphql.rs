use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};
use rust_decimal::Decimal;

use crate::modules::dashboard::core::commands::{ApproveQuote, RejectQuote};
use crate::modules::dashboard::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::BearerToken;
use crate::shell::state::AppState;

fn caller<'a>(context: &'a Context<'_>) -> GqlResult<(&'a AppState, &'a BearerToken)> {
    let state = context.data_unchecked::<AppState>();
    let token = context
        .data_opt::<BearerToken>()
        .ok_or_else(|| ApplicationError::MissingToken.extend())?;
    Ok((state, token))
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn delete_event(&self, context: &Context<'_>, id: i64) -> GqlResult<bool> {
        let (state, token) = caller(context)?;
        state
            .manage_quotes
            .delete_event(token, id)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }

    async fn approve_quote(
        &self,
        context: &Context<'_>,
        id: i64,
        final_price: Decimal,
        requested_workers: u32,
        admin_notes: Option<String>,
    ) -> GqlResult<bool> {
        let (state, token) = caller(context)?;
        let command = ApproveQuote {
            final_price,
            requested_workers,
            admin_notes,
        };
        state
            .manage_quotes
            .approve_quote(token, id, command)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }

    async fn reject_quote(&self, context: &Context<'_>, id: i64, reason: String) -> GqlResult<bool> {
        let (state, token) = caller(context)?;
        state
            .manage_quotes
            .reject_quote(token, id, RejectQuote { reason })
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }

    async fn send_quote(&self, context: &Context<'_>, id: i64) -> GqlResult<bool> {
        let (state, token) = caller(context)?;
        state
            .manage_quotes
            .send_quote(token, id)
            .await
            .map_err(|e| e.extend())?;
        Ok(true)
    }
}
