//! Defensive parsing of the generative collaborator's response envelope.
//!
//! The reply nests the payload three levels deep (candidates → content →
//! parts) and the payload itself usually arrives wrapped in a markdown
//! ```json fence. None of that framing is contractually guaranteed, so
//! every stage is a named failure point and the fence strip is a
//! best-effort transform that never fails a part.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use vl_protocol::Action;

use crate::error::ParseError;

/// Fenced JSON block: literal ```json opener, non-greedy interior spanning
/// newlines, ``` closer.
static RE_JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\n(.*?)\n```").unwrap());

/// The model's reply, modeled only deep enough to reach the payload.
///
/// Serde aliases accept both the REST camelCase and the SDK-marshaled
/// PascalCase key forms; neither casing is contractual upstream.
#[derive(Debug, Deserialize)]
pub struct GenerativeEnvelope {
    #[serde(default, alias = "Candidates")]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default, alias = "Content")]
    pub content: Content,
}

#[derive(Debug, Default, Deserialize)]
pub struct Content {
    #[serde(default, alias = "Role")]
    pub role: String,
    #[serde(default, alias = "Parts")]
    pub parts: Vec<Part>,
}

/// One reply part. REST responses carry `{"text": ...}` objects, SDK
/// marshaling carries bare strings; anything else is re-serialized as JSON
/// text rather than rejected.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        #[serde(alias = "Text")]
        text: String,
    },
    Raw(String),
    Other(serde_json::Value),
}

impl Part {
    fn into_text(self) -> String {
        match self {
            Part::Text { text } => text,
            Part::Raw(text) => text,
            Part::Other(value) => value.to_string(),
        }
    }
}

/// Parse a raw envelope body into an `Action`.
///
/// Only `candidates[0].content.parts[0]` is consumed. That narrowing is
/// deliberate and validated: an envelope with no candidates or no parts is
/// an error, never a silent default.
pub fn parse_envelope(raw: &str) -> Result<Action, ParseError> {
    let envelope: GenerativeEnvelope =
        serde_json::from_str(raw).map_err(|e| ParseError::EnvelopeDecode(e.to_string()))?;

    let first = envelope
        .candidates
        .into_iter()
        .next()
        .ok_or(ParseError::NoCandidates)?;

    let parts: Vec<String> = first
        .content
        .parts
        .into_iter()
        .map(|part| upgrade_fenced_json(part.into_text()))
        .collect();

    let payload = parts.first().ok_or(ParseError::NoContentParts)?;

    serde_json::from_str::<Action>(payload).map_err(|e| ParseError::PayloadDecode(e.to_string()))
}

/// Best-effort upgrade of one part: if it carries a ```json fence whose
/// interior decodes as JSON, substitute the interior for the part;
/// otherwise leave the part unchanged. A part is never required to be JSON.
fn upgrade_fenced_json(part: String) -> String {
    let Some(caps) = RE_JSON_FENCE.captures(&part) else {
        return part;
    };
    match serde_json::from_str::<serde_json::Value>(&caps[1]) {
        Ok(value) => value.to_string(),
        Err(_) => part,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vl_protocol::{ActionKind, Amount, StatRange};

    fn envelope_with_part(part: serde_json::Value) -> String {
        serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [part] }
            }]
        })
        .to_string()
    }

    fn fenced(payload: &str) -> String {
        format!("```json\n{payload}\n```")
    }

    // ── happy paths ─────────────────────────────────────────────

    #[test]
    fn fenced_payload_roundtrip() {
        let payload = r#"{"amount": 50, "category": "їжу", "type": "витрати"}"#;
        let raw = envelope_with_part(serde_json::json!({ "text": fenced(payload) }));

        let action = parse_envelope(&raw).unwrap();
        assert_eq!(action.kind, ActionKind::Expense);
        assert_eq!(action.amount, Amount::Value(50.0));
        assert_eq!(action.category, "їжу");
    }

    #[test]
    fn unfenced_json_part_still_decodes() {
        let raw = envelope_with_part(serde_json::json!({
            "text": r#"{"category": "", "range": "тиждень", "type": "статистика"}"#
        }));

        let action = parse_envelope(&raw).unwrap();
        assert_eq!(action.kind, ActionKind::Statistics);
        assert_eq!(action.range, StatRange::Week);
    }

    #[test]
    fn sdk_pascal_case_envelope() {
        // Envelope re-marshaled from an SDK struct: PascalCase keys, parts
        // as bare strings.
        let payload = r#"{"reminder_text": "оплатити рахунок", "type": "нагадування"}"#;
        let raw = serde_json::json!({
            "Candidates": [{
                "Content": { "Role": "model", "Parts": [fenced(payload)] }
            }]
        })
        .to_string();

        let action = parse_envelope(&raw).unwrap();
        assert_eq!(action.kind, ActionKind::Reminder);
        assert_eq!(action.reminder_text, "оплатити рахунок");
    }

    #[test]
    fn fence_with_surrounding_prose() {
        let payload = r#"{"type": "доходи", "amount": 99.99, "category": "зарплата"}"#;
        let text = format!("Ось результат:\n{}\nГотово.", fenced(payload));
        let raw = envelope_with_part(serde_json::json!({ "text": text }));

        let action = parse_envelope(&raw).unwrap();
        assert_eq!(action.kind, ActionKind::Income);
        assert_eq!(action.amount, Amount::Value(99.99));
    }

    #[test]
    fn unknown_type_falls_back_to_unknown_kind() {
        let raw = envelope_with_part(serde_json::json!({
            "text": fenced(r#"{"type": "", "category": ""}"#)
        }));

        let action = parse_envelope(&raw).unwrap();
        assert_eq!(action.kind, ActionKind::Unknown);
    }

    #[test]
    fn extra_candidates_and_parts_are_ignored() {
        let payload = r#"{"type": "витрати", "amount": 10, "category": "кава"}"#;
        let raw = serde_json::json!({
            "candidates": [
                { "content": { "role": "model", "parts": [
                    { "text": fenced(payload) },
                    { "text": "друга частина" }
                ]}},
                { "content": { "role": "model", "parts": [{ "text": "інший кандидат" }] } }
            ]
        })
        .to_string();

        let action = parse_envelope(&raw).unwrap();
        assert_eq!(action.kind, ActionKind::Expense);
        assert_eq!(action.category, "кава");
    }

    // ── named failure stages ────────────────────────────────────

    #[test]
    fn malformed_envelope_json() {
        let err = parse_envelope("{not json").unwrap_err();
        assert!(matches!(err, ParseError::EnvelopeDecode(_)));
    }

    #[test]
    fn empty_candidates() {
        let err = parse_envelope(r#"{"candidates": []}"#).unwrap_err();
        assert_eq!(err, ParseError::NoCandidates);
    }

    #[test]
    fn missing_candidates_key() {
        let err = parse_envelope("{}").unwrap_err();
        assert_eq!(err, ParseError::NoCandidates);
    }

    #[test]
    fn empty_parts() {
        let raw = r#"{"candidates": [{"content": {"role": "model", "parts": []}}]}"#;
        let err = parse_envelope(raw).unwrap_err();
        assert_eq!(err, ParseError::NoContentParts);
    }

    #[test]
    fn prose_part_fails_payload_stage() {
        let raw = envelope_with_part(serde_json::json!({
            "text": "вибачте, я не зрозумів команду"
        }));
        let err = parse_envelope(&raw).unwrap_err();
        assert!(matches!(err, ParseError::PayloadDecode(_)));
    }

    #[test]
    fn broken_fence_interior_leaves_part_as_text() {
        // Interior is not valid JSON — the upgrade must not raise; the part
        // stays raw and fails at the payload stage instead.
        let raw = envelope_with_part(serde_json::json!({
            "text": "```json\n{broken json\n```"
        }));
        let err = parse_envelope(&raw).unwrap_err();
        assert!(matches!(err, ParseError::PayloadDecode(_)));
    }

    // ── properties ──────────────────────────────────────────────

    #[test]
    fn parse_is_idempotent() {
        let raw = envelope_with_part(serde_json::json!({
            "text": fenced(r#"{"type": "витрати", "amount": 50, "category": "їжу"}"#)
        }));
        assert_eq!(parse_envelope(&raw).unwrap(), parse_envelope(&raw).unwrap());
    }

    #[test]
    fn upgrade_is_non_greedy_across_fences() {
        let first = r#"{"type": "витрати", "amount": 1, "category": "а"}"#;
        let text = format!("{}\n{}", fenced(first), fenced(r#"{"type": "доходи"}"#));
        let raw = envelope_with_part(serde_json::json!({ "text": text }));

        let action = parse_envelope(&raw).unwrap();
        assert_eq!(action.kind, ActionKind::Expense);
    }
}
