//! Rule-based interpretation strategy — ordered keyword classification plus
//! per-intent slot extraction.
//!
//! Handles the common well-formed commands deterministically at zero cost.
//! The transcript is expected to be lowercased and trimmed by the caller
//! (the speech layer does this); case handling is a documented precondition,
//! not enforced here.

mod classify;
mod extract;

pub use classify::classify;

use vl_protocol::{Action, ActionKind};

use crate::error::{InterpretError, InterpretResult};

/// Interpret a transcript deterministically.
///
/// Classifies the intent, dispatches to the matching extractor, and wraps
/// the extracted slots plus the intent into an `Action`. An unmatched
/// transcript fails with [`InterpretError::Classification`] — it never
/// yields a default `Action`.
pub fn interpret(transcript: &str) -> InterpretResult<Action> {
    let action = match classify::classify(transcript) {
        ActionKind::Statistics => extract::statistics(transcript),
        ActionKind::Expense => extract::expense(transcript),
        ActionKind::Income => extract::income(transcript),
        ActionKind::Reminder => extract::reminder(transcript),
        ActionKind::Unknown => return Err(InterpretError::Classification),
    };
    tracing::debug!(kind = ?action.kind, "rule-based interpretation matched");
    Ok(action)
}
