//! Title rules for lists and todos.
//!
//! Every rule that fails contributes one message; callers show them all.

/// Default upper bound on title length, in characters.
pub const DEFAULT_MAX_TITLE_LEN: usize = 100;

/// Validates a list title that has already been trimmed.
///
/// `taken` reports whether a sibling list already uses the title.
#[must_use]
pub fn validate_list_title(title: &str, max_len: usize, taken: bool) -> Vec<String> {
    let mut errors = Vec::new();

    if title.is_empty() {
        errors.push("The list title is required.".to_string());
    }
    if title.chars().count() > max_len {
        errors.push(format!(
            "List title must be between 1 and {max_len} characters."
        ));
    }
    if taken {
        errors.push("List title must be unique.".to_string());
    }

    errors
}

/// Validates a todo title that has already been trimmed.
#[must_use]
pub fn validate_todo_title(title: &str, max_len: usize) -> Vec<String> {
    let mut errors = Vec::new();

    if title.is_empty() {
        errors.push("The todo title is required.".to_string());
    }
    if title.chars().count() > max_len {
        errors.push(format!(
            "Todo title must be between 1 and {max_len} characters."
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_list_title_has_no_errors() {
        assert!(validate_list_title("Groceries", DEFAULT_MAX_TITLE_LEN, false).is_empty());
    }

    #[test]
    fn empty_list_title_is_required() {
        assert_eq!(
            validate_list_title("", DEFAULT_MAX_TITLE_LEN, false),
            vec!["The list title is required.".to_string()]
        );
    }

    #[test]
    fn long_and_duplicate_list_title_reports_both() {
        let title = "x".repeat(101);
        let errors = validate_list_title(&title, DEFAULT_MAX_TITLE_LEN, true);
        assert_eq!(
            errors,
            vec![
                "List title must be between 1 and 100 characters.".to_string(),
                "List title must be unique.".to_string(),
            ]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let title = "é".repeat(100);
        assert!(validate_todo_title(&title, DEFAULT_MAX_TITLE_LEN).is_empty());
        assert!(validate_list_title(&title, DEFAULT_MAX_TITLE_LEN, false).is_empty());
    }

    #[test]
    fn todo_title_rules() {
        assert_eq!(
            validate_todo_title("", 100),
            vec!["The todo title is required.".to_string()]
        );
        assert_eq!(
            validate_todo_title("abcdef", 5),
            vec!["Todo title must be between 1 and 5 characters.".to_string()]
        );
        assert!(validate_todo_title("Buy milk", 100).is_empty());
    }
}
