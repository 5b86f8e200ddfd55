//! Display formatting with fallbacks for missing values.
//!
//! Every helper takes an `Option` and returns a defined literal when the
//! value is absent or not finite.

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|v| v.is_finite())
}

/// `£X.Ym`, or `£0.0m`.
pub fn money(v: Option<f64>) -> String {
    format!("£{}m", decimal(v))
}

/// One decimal place, or `0.0`.
pub fn decimal(v: Option<f64>) -> String {
    format!("{:.1}", finite(v).unwrap_or(0.0))
}

/// One decimal place with an explicit sign for positive values.
pub fn signed(v: Option<f64>) -> String {
    match finite(v) {
        Some(v) if v > 0.0 => format!("+{v:.1}"),
        other => decimal(other),
    }
}

/// Integer, or `0`.
pub fn count(v: Option<i64>) -> String {
    v.unwrap_or(0).to_string()
}

/// Shortest natural representation (`5`, `9.99`), or `0`.
pub fn plain(v: Option<f64>) -> String {
    finite(v).unwrap_or(0.0).to_string()
}

/// Integer with comma thousands separators, or `0`.
pub fn grouped(v: Option<i64>) -> String {
    let n = v.unwrap_or(0);
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The string, or `fallback` when absent or blank.
pub fn text_or<'a>(v: Option<&'a str>, fallback: &'a str) -> &'a str {
    v.filter(|s| !s.trim().is_empty()).unwrap_or(fallback)
}
