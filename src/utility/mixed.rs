
use regex::Regex;
use once_cell::sync::Lazy;

use std::pin::Pin;
use std::future::Future;


pub type BoxedFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

static ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:<@!?)?(\d{1,20})>?$").expect("id regex is valid")
});

/// Extracts a user id from either a raw snowflake or a mention.
pub fn parse_user_id(word: &str) -> Option<String> {
    let captures = ID_REGEX.captures(word.trim())?;
    let id = captures.get(1)?.as_str();
    match id.parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(id.to_string()),
    }
}

pub fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut formatted = String::new();
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_raw_ids_and_mentions() {
        assert_eq!(parse_user_id("996364193588592740"), Some("996364193588592740".to_string()));
        assert_eq!(parse_user_id("<@996364193588592740>"), Some("996364193588592740".to_string()));
        assert_eq!(parse_user_id("<@!996364193588592740>"), Some("996364193588592740".to_string()));
    }

    #[test]
    fn rejects_names_and_zero() {
        assert_eq!(parse_user_id("JuicyJuggler"), None);
        assert_eq!(parse_user_id("0"), None);
        assert_eq!(parse_user_id("99999999999999999999999"), None);
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("äöü", 2), "äö");
        assert_eq!(truncate_chars("short", 1000), "short");
    }

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
