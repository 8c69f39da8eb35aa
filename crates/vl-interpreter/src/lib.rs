//! VoiceLedger command interpretation engine.
//!
//! Converts a lowercase transcript string ("додай витрату 50 грн на їжу")
//! into one validated [`Action`](vl_protocol::Action) using two cooperating
//! strategies behind the same output contract:
//!
//! - **Rule-based** (local): ordered keyword classification plus per-intent
//!   regex slot extraction. Deterministic, pure, synchronous.
//! - **Generative fallback** (remote): a fixed instruction prompt sent to a
//!   generative-model collaborator whose free-text reply is defensively
//!   parsed back into the same `Action` shape.
//!
//! The strategies are independent entry points used by different caller
//! paths, not a primary/retry chain.

pub mod engine;
pub mod error;
pub mod generative;
pub mod rules;

pub use engine::Interpreter;
pub use error::{InterpretError, ParseError};
