//! Matching strategies and value normalisation

use chrono::NaiveDate;
use regex::Regex;

/// Shape of the value captured after a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuePattern {
    /// Everything up to the end of the line
    Line,
    /// ISO calendar date
    IsoDate,
    /// Digits with optional thousands separators and decimals
    Amount,
    /// Alphanumeric code with dashes
    Code,
    /// Uppercase prefix, a dash, then a code (e.g. `CLM-2024-001`)
    PrefixedCode,
    /// Four-digit year
    Year,
    /// Indian-style registration plate, or any code
    Plate,
}

impl ValuePattern {
    pub fn regex(&self) -> &'static str {
        match self {
            ValuePattern::Line => r"([^\n\r]+)",
            ValuePattern::IsoDate => r"(\d{4}-\d{2}-\d{2})",
            ValuePattern::Amount => r"([\d,]+(?:\.\d+)?)",
            ValuePattern::Code => r"([A-Za-z0-9-]+)",
            ValuePattern::PrefixedCode => r"([A-Z]{3,}-[A-Za-z0-9-]+)",
            ValuePattern::Year => r"(\d{4})",
            ValuePattern::Plate => {
                r"([A-Za-z]{2}\s*\d{1,2}\s*[A-Za-z]{1,3}\s*\d{3,5}|[A-Za-z0-9-]+)"
            }
        }
    }
}

/// One way of locating a field in the text
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    /// A known label, an optional `:` or `-`, then a value of the given shape
    Labeled {
        labels: &'static [&'static str],
        value: ValuePattern,
    },
    /// A bare regular expression; capture group 1 if present, else the whole match
    Bare(&'static str),
}

impl Strategy {
    /// Builds the case-insensitive regex for this strategy
    pub fn pattern(&self) -> String {
        match self {
            Strategy::Labeled { labels, value } => {
                let alternatives: Vec<String> = labels.iter().map(|l| regex::escape(l)).collect();
                format!(
                    r"(?im)\b(?:{})\b\s*[:\-]?\s*{}",
                    alternatives.join("|"),
                    value.regex()
                )
            }
            Strategy::Bare(pattern) => format!("(?i){}", pattern),
        }
    }
}

/// Runs a compiled strategy and returns the trimmed capture, if non-empty
pub fn capture(regex: &Regex, text: &str) -> Option<String> {
    let caps = regex.captures(text)?;
    let found = caps.get(1).or_else(|| caps.get(0))?;
    let trimmed = found.as_str().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalises a truthy/falsy token; anything else is absent
pub fn to_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

/// Parses a number after stripping thousands separators and whitespace
pub fn to_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses an ISO calendar date
pub fn to_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
