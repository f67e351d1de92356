//! Value formatters attached to panel channels.

use serde::{Deserialize, Serialize};

/// How a channel's values are printed on axes, labels and table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// One decimal, `%` appended.
    Percent,
    /// Like `Percent` with an explicit sign.
    SignedPercent,
    /// Grouped thousands, `€` appended; cents only when present.
    Euro,
    /// Grouped integer count.
    Count,
    /// Value already in thousands, ` k` appended.
    Thousands,
    /// Base-100 index, one decimal.
    Index,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Percent => format!("{value:.1}%"),
            ValueFormat::SignedPercent => format!("{value:+.1}%"),
            ValueFormat::Euro => {
                // Round to cents before splitting so 2.996 carries to 3.
                let total = (value.abs() * 100.0).round() as i64;
                let (euros, cents) = (total / 100, total % 100);
                let sign = if value < 0.0 && total > 0 { "-" } else { "" };
                if cents == 0 {
                    format!("{sign}{}€", group_thousands(euros))
                } else {
                    format!("{sign}{}.{cents:02}€", group_thousands(euros))
                }
            }
            ValueFormat::Count => group_thousands(value.round() as i64),
            ValueFormat::Thousands => format!("{} k", group_thousands(value.round() as i64)),
            ValueFormat::Index => format!("{value:.1}"),
        }
    }
}

/// `1234567` → `"1 234 567"`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
