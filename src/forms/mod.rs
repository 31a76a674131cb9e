//! Incoming JSON and multipart payloads with their validation rules.

use serde::{Deserialize, Deserializer};

use crate::domain::money::parse_cents;

pub mod addresses;
pub mod carts;
pub mod collections;
pub mod customers;
pub mod orders;
pub mod product_images;
pub mod products;
pub mod promotions;
pub mod reviews;
pub mod tags;
pub mod users;

/// Price as sent by clients: a decimal string (`"10.50"`) or a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DecimalInput {
    Text(String),
    Number(serde_json::Number),
}

impl DecimalInput {
    /// Convert to cents, `None` when the value is negative or has more than
    /// two fraction digits.
    pub fn to_cents(&self) -> Option<i64> {
        match self {
            DecimalInput::Text(text) => parse_cents(text),
            DecimalInput::Number(number) => parse_cents(&number.to_string()),
        }
    }
}

impl From<&str> for DecimalInput {
    fn from(value: &str) -> Self {
        DecimalInput::Text(value.to_string())
    }
}

/// Deserialize an optional string, mapping blank input to `None`.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

/// Collapse runs of whitespace into single spaces and drop control characters.
pub fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Sanitize each line and squeeze blank lines, keeping paragraph breaks.
pub fn sanitize_multiline_text(input: &str) -> String {
    let mut lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();

    while matches!(lines.first(), Some(line) if line.is_empty()) {
        lines.remove(0);
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    let mut result = Vec::with_capacity(lines.len());
    let mut previous_empty = false;
    for line in lines {
        if line.is_empty() {
            if previous_empty {
                continue;
            }
            previous_empty = true;
            result.push(String::new());
        } else {
            previous_empty = false;
            result.push(line);
        }
    }

    result.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_text_collapses_whitespace() {
        assert_eq!(sanitize_inline_text("  Deluxe \t Product \u{7}"), "Deluxe Product");
    }

    #[test]
    fn multiline_text_keeps_single_blank_line() {
        assert_eq!(
            sanitize_multiline_text("\n First line.\n\n\n Second line.  \n"),
            "First line.\n\nSecond line."
        );
    }

    #[test]
    fn decimal_input_accepts_strings_and_numbers() {
        let text: DecimalInput = serde_json::from_str("\"10.50\"").expect("string");
        let number: DecimalInput = serde_json::from_str("7.5").expect("number");
        let integer: DecimalInput = serde_json::from_str("12").expect("integer");

        assert_eq!(text.to_cents(), Some(1050));
        assert_eq!(number.to_cents(), Some(750));
        assert_eq!(integer.to_cents(), Some(1200));
        assert_eq!(DecimalInput::from("1.999").to_cents(), None);
    }
}
