//! # Validation Utilities
//!
//! Input validation helpers, measured the way the browser measures form
//! values: lengths in UTF-16 code units (an accented or Cyrillic letter counts
//! once, an emoji twice) and whitespace as JavaScript's `\s` and `trim()`.

/// Whether `c` is whitespace to JavaScript's `\s` and `String.prototype.trim`.
///
/// Unicode `White_Space` plus U+FEFF, minus U+0085.
pub fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// `value` without surrounding [`is_js_whitespace`] characters.
pub fn trim_js(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

/// Length in UTF-16 code units, like a JavaScript string's `length`.
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Length of `value` after trimming surrounding whitespace, in UTF-16 units.
pub fn trimmed_len(value: &str) -> usize {
    utf16_len(trim_js(value))
}

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if trim_js(value).is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate that the trimmed length lies within `min..=max`.
pub fn validate_length(value: &str, min: usize, max: usize, field_name: &str) -> Result<(), String> {
    let len = trimmed_len(value);
    if len < min {
        Err(format!("{} must be at least {} characters", field_name, min))
    } else if len > max {
        Err(format!("{} must be at most {} characters", field_name, max))
    } else {
        Ok(())
    }
}

/// Validate email format: `local@domain.tld`.
///
/// The trimmed value must hold exactly one `@` and no whitespace. The local
/// part must be non-empty and the domain must contain a `.` that is neither
/// its first nor its last character.
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = trim_js(email);
    if email.chars().any(is_js_whitespace) {
        return Err("Email cannot contain whitespace".to_string());
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err("Invalid email format".to_string());
    };
    if local.is_empty() || domain.contains('@') {
        return Err("Invalid email format".to_string());
    }

    let last = domain.chars().count().saturating_sub(1);
    let dotted = domain
        .chars()
        .enumerate()
        .any(|(i, c)| c == '.' && i > 0 && i < last);
    if dotted {
        Ok(())
    } else {
        Err("Invalid email format".to_string())
    }
}

/// Whether `c` may appear in a personal name.
///
/// Accepts ASCII letters, `U+00C0..=U+017E` (Latin-1 Supplement letters and
/// Latin Extended-A), the basic Cyrillic alphabet with `Ё`/`ё`, apostrophe,
/// hyphen and whitespace.
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('\u{00C0}'..='\u{017E}').contains(&c)
        || ('А'..='я').contains(&c)
        || c == 'Ё'
        || c == 'ё'
        || c == '\''
        || c == '-'
        || is_js_whitespace(c)
}

/// Validate that every character of the trimmed value is a name character.
pub fn validate_name_chars(value: &str, field_name: &str) -> Result<(), String> {
    validate_not_empty(value, field_name)?;
    match trim_js(value).chars().find(|c| !is_name_char(*c)) {
        Some(c) => Err(format!("{} contains an invalid character: {:?}", field_name, c)),
        None => Ok(()),
    }
}

/// Truncate `value` to at most `max` UTF-16 units.
///
/// Cuts at the last char boundary that fits, so a surrogate pair straddling
/// `max` is dropped whole. Returns `None` when the value already fits.
pub fn truncate_utf16(value: &str, max: usize) -> Option<String> {
    let mut units = 0;
    for (byte_idx, c) in value.char_indices() {
        units += c.len_utf16();
        if units > max {
            return Some(value[..byte_idx].to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_len_counts_utf16_units() {
        assert_eq!(trimmed_len("  Андрей  "), 6);
        assert_eq!(trimmed_len("   "), 0);
        assert_eq!(trimmed_len(&"😀".repeat(6)), 12);
        assert_eq!(trimmed_len("a😀b"), 4);
    }

    #[test]
    fn test_whitespace_follows_javascript() {
        assert!(is_js_whitespace('\u{FEFF}'));
        assert!(is_js_whitespace('\u{00A0}'));
        assert!(is_js_whitespace('\u{2028}'));
        assert!(!is_js_whitespace('\u{0085}'));

        assert_eq!(trim_js("\u{FEFF} Andrew \t\n"), "Andrew");
        assert_eq!(trim_js("\u{0085}Andrew"), "\u{0085}Andrew");
        assert!(validate_not_empty("\u{FEFF}\u{FEFF}", "Name").is_err());
        assert!(validate_email("a@b.com\u{FEFF}").is_ok());
        assert!(validate_email("a\u{FEFF}x@b.com").is_err());
        assert!(validate_email("a\u{0085}x@b.com").is_ok());
        assert!(validate_name_chars("Ann\u{0085}Lee", "Name").is_err());
    }

    #[test]
    fn test_validate_length_bounds() {
        assert!(validate_length("ab", 2, 20, "Name").is_ok());
        assert!(validate_length(" a ", 2, 20, "Name").is_err());
        assert!(validate_length(&"a".repeat(21), 2, 20, "Name").is_err());
        assert_eq!(
            validate_length("a", 2, 20, "Name").unwrap_err(),
            "Name must be at least 2 characters"
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("  test@test.com ").is_ok());
        assert!(validate_email("first.last@mail.example.org").is_ok());
        assert!(validate_email("a@.b.c").is_ok());

        assert!(validate_email("invalidemail").is_err());
        assert!(validate_email("@b.com").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a@.com").is_err());
        assert!(validate_email("a@b.").is_err());
        assert!(validate_email("a@@b.com").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("a b@c.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_name_chars() {
        assert!(validate_name_chars("Andrew", "Name").is_ok());
        assert!(validate_name_chars("Jean-Luc O'Neil", "Name").is_ok());
        assert!(validate_name_chars("Zoë Ångström", "Name").is_ok());
        assert!(validate_name_chars("Ёлка Андреевна", "Name").is_ok());

        assert!(validate_name_chars("R2D2", "Name").is_err());
        assert!(validate_name_chars("bob@home", "Name").is_err());
        assert!(validate_name_chars("   ", "Name").is_err());
        // Ukrainian Ї sits outside А-я
        assert!(validate_name_chars("Їжак", "Name").is_err());
    }

    #[test]
    fn test_truncate_utf16() {
        assert_eq!(truncate_utf16("hello", 10), None);
        assert_eq!(truncate_utf16("hello", 5), None);
        assert_eq!(truncate_utf16("hello", 3), Some("hel".to_string()));
        assert_eq!(truncate_utf16("Андрей", 2), Some("Ан".to_string()));
    }

    #[test]
    fn test_truncate_utf16_astral_plane() {
        let emoji = "😀".repeat(500);
        assert_eq!(truncate_utf16(&emoji, 500), Some("😀".repeat(250)));
        assert_eq!(truncate_utf16(&"😀".repeat(250), 500), None);
        // a pair that would straddle the limit is dropped whole
        assert_eq!(truncate_utf16("a😀", 2), Some("a".to_string()));
        assert_eq!(truncate_utf16("😀😀😀", 5), Some("😀😀".to_string()));
    }
}
