//! Environment variable validation with helpful error messages
//!
//! Invalid `COMPONENT_HINT_*` values never abort a run. The loader logs the
//! returned `EnvVarError` (with a typo suggestion when one is close) and keeps
//! the value it already had.

use std::fmt;

/// An environment variable held a value outside its accepted set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarError {
    pub var_name: String,
    pub value: String,
    pub suggestion: Option<String>,
    pub valid_values: Vec<String>,
}

impl fmt::Display for EnvVarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} value '{}'", self.var_name, self.value)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, ". Did you mean '{}'?", suggestion)?;
        }
        write!(f, " Valid values: {}", self.valid_values.join(", "))
    }
}

impl std::error::Error for EnvVarError {}

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a raw value, explaining the failure when `parser` rejects it.
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Result<T, EnvVarError>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value.trim()).ok_or_else(|| EnvVarError {
            var_name: self.var_name.to_string(),
            value: value.to_string(),
            suggestion: self.suggest(value),
            valid_values: self.valid_values.iter().map(|v| v.to_string()).collect(),
        })
    }

    fn suggest(&self, value: &str) -> Option<String> {
        closest(&value.trim().to_lowercase(), self.valid_values).map(str::to_string)
    }
}

/// Accepted spellings of a boolean environment value.
pub const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no", "on", "off"];

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Closest candidate within two edits, if any.
pub fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    let mut best: Option<(&str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(input, candidate);
        match best {
            None => best = Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => best = Some((candidate, dist)),
            _ => {}
        }
    }

    match best {
        Some((candidate, dist)) if dist <= 2 && dist > 0 => Some(candidate),
        _ => None,
    }
}

/// Simple Levenshtein distance for typo detection
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let a_len = a_bytes.len();
    let b_len = b_bytes.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}
