//! Currency formatting with a fixed fallback
//!
//! Locale-aware formatting is attempted first. Whenever it is unavailable
//! (no recognised locale, or an amount the locale cannot render) the
//! formatter falls back to `ر.س 1,234.56`. Errors never reach the caller.

use thiserror::Error;

/// Saudi riyal symbol used by the fallback format
pub const RIYAL_SYMBOL: &str = "ر.س";

/// Locale tags tried in order when none are configured
pub const DEFAULT_LOCALES: [&str; 2] = ["ar_SA.UTF-8", "Arabic_Saudi Arabia.1256"];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("no locale-aware currency format is available")]
    NoLocale,
    #[error("cannot format non-finite amount {0}")]
    NonFinite(f64),
}

/// Monetary conventions for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonetaryConvention {
    pub symbol: &'static str,
    /// Symbol goes before the amount
    pub symbol_first: bool,
    pub thousands_sep: &'static str,
    pub decimal_point: &'static str,
}

/// Arabic (Saudi Arabia): `1٬234٫56 ر.س`
const SAUDI_ARABIC: MonetaryConvention = MonetaryConvention {
    symbol: RIYAL_SYMBOL,
    symbol_first: false,
    thousands_sep: "\u{066C}",
    decimal_point: "\u{066B}",
};

/// English (Saudi Arabia): `SAR 1,234.56`
const SAUDI_ENGLISH: MonetaryConvention = MonetaryConvention {
    symbol: "SAR",
    symbol_first: true,
    thousands_sep: ",",
    decimal_point: ".",
};

/// [`DEFAULT_LOCALES`] followed by `$LANG`, when set
pub fn environment_locales() -> Vec<String> {
    let mut candidates: Vec<String> = DEFAULT_LOCALES.iter().map(|s| s.to_string()).collect();
    if let Ok(lang) = std::env::var("LANG") {
        candidates.push(lang);
    }
    candidates
}

/// Look up conventions for a locale tag such as `ar_SA.UTF-8`
///
/// Encoding (`.UTF-8`, `.1256`) and modifier (`@...`) suffixes are ignored.
pub fn lookup_locale(tag: &str) -> Option<MonetaryConvention> {
    let base = tag
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('-', "_")
        .to_ascii_lowercase();

    match base.as_str() {
        "ar_sa" | "arabic_saudi arabia" => Some(SAUDI_ARABIC),
        "en_sa" => Some(SAUDI_ENGLISH),
        _ => None,
    }
}

/// Currency formatter bound to the first available locale, if any
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormatter {
    locale: Option<(String, MonetaryConvention)>,
}

impl CurrencyFormatter {
    /// Use the first recognised tag from `candidates`
    pub fn from_locales<S: AsRef<str>>(candidates: &[S]) -> Self {
        for tag in candidates {
            let tag = tag.as_ref();
            if let Some(convention) = lookup_locale(tag) {
                log::debug!("Using currency locale {}", tag);
                return Self { locale: Some((tag.to_string(), convention)) };
            }
            log::debug!("Currency locale {} unavailable", tag);
        }
        log::warn!("No currency locale available, using fallback format");
        Self::fallback_only()
    }

    /// Default candidates, then the `LANG` environment variable
    pub fn from_environment() -> Self {
        Self::from_locales(environment_locales().as_slice())
    }

    /// A formatter that always uses the fallback format
    pub fn fallback_only() -> Self {
        Self { locale: None }
    }

    /// Tag of the active locale, `None` when using the fallback
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_ref().map(|(tag, _)| tag.as_str())
    }

    /// Locale-aware format, failing when no locale is available
    pub fn try_format(&self, amount: f64) -> Result<String, FormatError> {
        let (_, convention) = self.locale.as_ref().ok_or(FormatError::NoLocale)?;
        if !amount.is_finite() {
            return Err(FormatError::NonFinite(amount));
        }
        let number = format_grouped(amount, convention.thousands_sep, convention.decimal_point);
        if convention.symbol_first {
            Ok(format!("{} {}", convention.symbol, number))
        } else {
            Ok(format!("{} {}", number, convention.symbol))
        }
    }

    /// Format an amount, recovering from any locale failure
    pub fn format(&self, amount: f64) -> String {
        match self.try_format(amount) {
            Ok(text) => text,
            Err(err) => {
                if self.locale.is_some() {
                    log::debug!("Falling back to default currency format: {}", err);
                }
                fallback_format(amount)
            }
        }
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::from_locales(&DEFAULT_LOCALES)
    }
}

/// `ر.س {amount}` with two decimals and comma thousands separators
pub fn fallback_format(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{} {}", RIYAL_SYMBOL, amount);
    }
    format!("{} {}", RIYAL_SYMBOL, format_grouped(amount, ",", "."))
}

/// Two-decimal rendering with grouped thousands
fn format_grouped(amount: f64, thousands_sep: &str, decimal_point: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3 * thousands_sep.len());
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push_str(thousands_sep);
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}{}{}", sign, grouped, decimal_point, frac_part)
}
