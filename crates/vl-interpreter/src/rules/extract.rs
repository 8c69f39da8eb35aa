//! Per-intent slot extraction — pure functions from transcript to `Action`.
//!
//! A missing slot is never an error: each extractor falls back to the
//! documented sentinel for that intent.

use regex::Regex;
use std::sync::LazyLock;

use vl_protocol::{Action, Amount, CATEGORY_GENERAL, CATEGORY_UNSPECIFIED, StatRange};

/// Number immediately followed (after optional whitespace) by the currency
/// unit token.
static RE_EXPENSE_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*грн").unwrap());

/// The word "на" followed by a Cyrillic word token.
static RE_EXPENSE_CATEGORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"на\s+([а-яА-ЯіІїЇєЄґҐ]+)").unwrap());

/// Number immediately followed by the word "за".
static RE_INCOME_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*за").unwrap());

/// The phrase "за категорією" followed by a Cyrillic word token.
static RE_INCOME_CATEGORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"за\s+категорією\s+([а-яА-ЯіІїЇєЄґҐ]+)").unwrap());

const REMINDER_TRIGGER: &str = "нагадай";

pub(crate) fn expense(transcript: &str) -> Action {
    let amount = captured(&RE_EXPENSE_AMOUNT, transcript)
        .map(Amount::parse)
        .unwrap_or_default();
    let category = captured(&RE_EXPENSE_CATEGORY, transcript)
        .map(str::to_string)
        .unwrap_or_else(|| CATEGORY_UNSPECIFIED.to_string());
    Action::expense(amount, category)
}

pub(crate) fn income(transcript: &str) -> Action {
    let amount = captured(&RE_INCOME_AMOUNT, transcript)
        .map(Amount::parse)
        .unwrap_or_default();
    let category = captured(&RE_INCOME_CATEGORY, transcript)
        .map(str::to_string)
        .unwrap_or_else(|| CATEGORY_GENERAL.to_string());
    Action::income(amount, category)
}

/// Strip the leading trigger word from the live transcript; the trimmed
/// remainder is the reminder text.
pub(crate) fn reminder(transcript: &str) -> Action {
    let text = transcript.replacen(REMINDER_TRIGGER, "", 1);
    Action::reminder(text.trim())
}

pub(crate) fn statistics(transcript: &str) -> Action {
    let category = if transcript.contains("доход") {
        "доходи"
    } else if transcript.contains("витрат") {
        "витрати"
    } else {
        ""
    };
    // Priority order: місяць > тиждень > день; no match means all time.
    let range = if transcript.contains("місяць") {
        StatRange::Month
    } else if transcript.contains("тиждень") {
        StatRange::Week
    } else if transcript.contains("день") {
        StatRange::Day
    } else {
        StatRange::Unspecified
    };
    Action::statistics(category, range)
}

/// First capture group of the first match, trimmed.
fn captured<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}
