pub mod health;
pub use self::health::health;

pub mod signup;
pub use self::signup::signup;

pub mod login;
pub use self::login::login;

pub mod blog;
pub mod work;

// common functions for the handlers
use regex::Regex;

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

/// Split a comma separated tag string into trimmed, non-empty tags.
#[must_use]
pub fn split_tags(tags: Option<&str>) -> Vec<String> {
    tags.map_or_else(Vec::new, |raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(ToString::to_string)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("a@x.com"));
        assert!(valid_email("gm+admin@gmoran.dev"));
        assert!(!valid_email("a@x"));
        assert!(!valid_email("not an email"));
        assert!(!valid_email(""));
    }

    #[test]
    fn test_split_tags() {
        assert_eq!(
            split_tags(Some("react, javascript , frontend")),
            vec!["react", "javascript", "frontend"]
        );
        assert_eq!(split_tags(Some(" , ,")), Vec::<String>::new());
        assert_eq!(split_tags(None), Vec::<String>::new());
    }
}
