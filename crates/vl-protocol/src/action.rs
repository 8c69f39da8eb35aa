use serde::{Deserialize, Serialize};

/// Default category sentinel for an expense with no recognizable label.
pub const CATEGORY_UNSPECIFIED: &str = "не вказано";
/// Default category sentinel for an income with no recognizable label.
pub const CATEGORY_GENERAL: &str = "загальна";

/// What kind of command an interpreted transcript represents.
///
/// Wire values are the Ukrainian labels the generative contract mandates;
/// anything unrecognized (including the empty string) maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    /// "витрати" — add an expense.
    Expense,
    /// "доходи" — add an income.
    Income,
    /// "нагадування" — create a reminder.
    Reminder,
    /// "статистика" — show statistics.
    Statistics,
    /// Empty or unrecognized command type.
    #[default]
    Unknown,
}

impl ActionKind {
    pub fn as_wire(&self) -> &'static str {
        match self {
            ActionKind::Expense => "витрати",
            ActionKind::Income => "доходи",
            ActionKind::Reminder => "нагадування",
            ActionKind::Statistics => "статистика",
            ActionKind::Unknown => "",
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "витрати" => ActionKind::Expense,
            "доходи" => ActionKind::Income,
            "нагадування" => ActionKind::Reminder,
            "статистика" => ActionKind::Statistics,
            _ => ActionKind::Unknown,
        }
    }
}

impl From<String> for ActionKind {
    fn from(s: String) -> Self {
        Self::from_wire(&s)
    }
}

impl From<ActionKind> for String {
    fn from(kind: ActionKind) -> Self {
        kind.as_wire().to_string()
    }
}

/// Statistics period. `Unspecified` (wire `""`) means all time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatRange {
    Day,
    Week,
    Month,
    Year,
    #[default]
    Unspecified,
}

impl StatRange {
    pub fn as_wire(&self) -> &'static str {
        match self {
            StatRange::Day => "день",
            StatRange::Week => "тиждень",
            StatRange::Month => "місяць",
            StatRange::Year => "рік",
            StatRange::Unspecified => "",
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "день" => StatRange::Day,
            "тиждень" => StatRange::Week,
            "місяць" => StatRange::Month,
            "рік" => StatRange::Year,
            _ => StatRange::Unspecified,
        }
    }
}

impl From<String> for StatRange {
    fn from(s: String) -> Self {
        Self::from_wire(&s)
    }
}

impl From<StatRange> for String {
    fn from(range: StatRange) -> Self {
        range.as_wire().to_string()
    }
}

/// Monetary amount of an expense or income.
///
/// `Unspecified` is the "not extracted" sentinel — the original commands
/// defaulted to `"нуль"`/`"0"` when no amount could be matched, and callers
/// treat that as "needs confirmation", not as a zero-value transaction. The
/// distinction is kept as a variant even though the wire form reuses `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Amount {
    /// Extracted value, non-negative, rounded to two decimals.
    Value(f64),
    /// No amount was extracted from the command.
    #[default]
    Unspecified,
}

impl Amount {
    /// Normalize a raw number. Zero, negative, and non-finite values
    /// collapse to the sentinel.
    pub fn from_f64(n: f64) -> Self {
        if n.is_finite() && n > 0.0 {
            Amount::Value(round2(n))
        } else {
            Amount::Unspecified
        }
    }

    /// Parse matched transcript text ("50", "12.5"). Non-numeric words
    /// (e.g. the legacy "нуль" sentinel) collapse to `Unspecified`.
    pub fn parse(text: &str) -> Self {
        text.trim()
            .parse::<f64>()
            .map(Self::from_f64)
            .unwrap_or(Amount::Unspecified)
    }

    pub fn is_specified(&self) -> bool {
        matches!(self, Amount::Value(_))
    }

    /// Wire form: the extracted value, or `0.0` for the sentinel.
    pub fn as_f64(&self) -> f64 {
        match self {
            Amount::Value(v) => *v,
            Amount::Unspecified => 0.0,
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Tolerant by contract: the rule path historically carried the amount
        // as matched text, generative replies carry a number, and either may
        // be absent or garbage. A field never fails the whole Action.
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Number(n) => {
                n.as_f64().map(Amount::from_f64).unwrap_or_default()
            }
            serde_json::Value::String(s) => Amount::parse(&s),
            _ => Amount::Unspecified,
        })
    }
}

/// The structured result of interpreting one voice command.
///
/// Every field has a deterministic default — a caller never observes an
/// absent key in either serialization direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Command type. Always one of the five `ActionKind` values.
    #[serde(rename = "type", default)]
    pub kind: ActionKind,
    /// Amount for expense/income commands.
    #[serde(default)]
    pub amount: Amount,
    /// Free-text label ("їжу", "зарплата", or "доходи"/"витрати" as the
    /// statistics subject). Sentinel, never null, when absent.
    #[serde(default = "default_category")]
    pub category: String,
    /// Statistics period. `Unspecified` outside statistics commands.
    #[serde(default)]
    pub range: StatRange,
    /// What to be reminded about. Empty outside reminder commands.
    #[serde(default)]
    pub reminder_text: String,
}

fn default_category() -> String {
    CATEGORY_UNSPECIFIED.to_string()
}

impl Default for Action {
    fn default() -> Self {
        Self {
            kind: ActionKind::Unknown,
            amount: Amount::Unspecified,
            category: default_category(),
            range: StatRange::Unspecified,
            reminder_text: String::new(),
        }
    }
}

impl Action {
    pub fn expense(amount: Amount, category: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Expense,
            amount,
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn income(amount: Amount, category: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Income,
            amount,
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn reminder(text: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Reminder,
            category: String::new(),
            reminder_text: text.into(),
            ..Self::default()
        }
    }

    pub fn statistics(category: impl Into<String>, range: StatRange) -> Self {
        Self {
            kind: ActionKind::Statistics,
            category: category.into(),
            range,
            ..Self::default()
        }
    }
}
