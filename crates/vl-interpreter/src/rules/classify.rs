//! Keyword-based intent classification.

use vl_protocol::ActionKind;

/// Ordered intent table — the first intent whose keyword set has any
/// substring match wins. The order is a tie-break policy, not a score.
const INTENT_TABLE: &[(ActionKind, &[&str])] = &[
    (ActionKind::Statistics, &["статистика", "статистику"]),
    (ActionKind::Expense, &["додай витрату", "додай витрати"]),
    (ActionKind::Income, &["додай дохід"]),
    (ActionKind::Reminder, &["нагадай"]),
];

/// Route a lowercased transcript to an intent. Unmatched input classifies
/// as `Unknown`; the caller decides whether that is an error.
pub fn classify(transcript: &str) -> ActionKind {
    for (intent, keywords) in INTENT_TABLE {
        if matches_any(transcript, keywords) {
            return *intent;
        }
    }
    ActionKind::Unknown
}

/// Check if the text contains any of the given patterns.
fn matches_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}
