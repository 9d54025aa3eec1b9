use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display currencies a user can pick for their profile. The code only ever
/// formats amounts with the matching symbol; nothing converts between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
    Inr,
    Chf,
}

impl CurrencyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Inr => "INR",
            Self::Chf => "CHF",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Cad => "CA$",
            Self::Aud => "A$",
            Self::Inr => "₹",
            Self::Chf => "CHF ",
        }
    }

    /// Lenient parse for user input; unknown codes fall back to USD.
    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "EUR" => Self::Eur,
            "GBP" => Self::Gbp,
            "JPY" => Self::Jpy,
            "CAD" => Self::Cad,
            "AUD" => Self::Aud,
            "INR" => Self::Inr,
            "CHF" => Self::Chf,
            _ => Self::Usd,
        }
    }

    pub fn all() -> &'static [CurrencyCode] {
        &[
            Self::Usd,
            Self::Eur,
            Self::Gbp,
            Self::Jpy,
            Self::Cad,
            Self::Aud,
            Self::Inr,
            Self::Chf,
        ]
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Format a magnitude with its currency symbol, thousand separators and
/// 2 decimal places. e.g. `1234567.89` → `"$1,234,567.89"`
pub fn format_amount(val: Decimal, code: CurrencyCode) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    format!("{}{with_commas}.{dec_part}", code.symbol())
}
