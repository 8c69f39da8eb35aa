//! Shared types for VoiceLedger — the `Action` contract both interpretation
//! strategies (rule-based and generative) converge on.

pub mod action;

pub use action::{Action, ActionKind, Amount, CATEGORY_GENERAL, CATEGORY_UNSPECIFIED, StatRange};
