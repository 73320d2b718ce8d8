// Pure validation for quote commands.
//
// Purpose
// - Reject malformed commands before any request reaches the backend.
//
// Responsibilities
// - Approve: final price must be positive.
// - Reject: a reason is required; surrounding whitespace is dropped.
// - Never perform input or output.

use rust_decimal::Decimal;

use crate::modules::dashboard::core::commands::{ApproveQuote, RejectQuote};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("final price must be greater than zero")]
    NonPositivePrice,

    #[error("a rejection reason is required")]
    MissingReason,
}

pub fn decide_approve(command: ApproveQuote) -> Result<ApproveQuote, ValidationError> {
    if command.final_price <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice);
    }
    let admin_notes = command
        .admin_notes
        .map(|notes| notes.trim().to_string())
        .filter(|notes| !notes.is_empty());
    Ok(ApproveQuote {
        admin_notes,
        ..command
    })
}

pub fn decide_reject(command: RejectQuote) -> Result<RejectQuote, ValidationError> {
    let reason = command.reason.trim();
    if reason.is_empty() {
        return Err(ValidationError::MissingReason);
    }
    Ok(RejectQuote {
        reason: reason.to_string(),
    })
}
