pub use fast_chemail::is_valid_email;

/// Minimum number of characters of a (trimmed) review comment.
pub const MIN_COMMENT_LEN: usize = 10;

pub fn is_valid_comment(comment: &str) -> bool {
    comment.trim().chars().count() >= MIN_COMMENT_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_length_is_counted_without_surrounding_whitespace() {
        assert!(!is_valid_comment("too short"));
        assert!(!is_valid_comment("   too short   "));
        assert!(is_valid_comment("long enough"));
        // Characters, not bytes
        assert!(!is_valid_comment("ééééééééé"));
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("marco@venezia.it"));
        assert!(!is_valid_email("marco@"));
    }
}
