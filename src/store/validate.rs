//! Field validation for task payloads.
//!
//! One rule set, two modes: `Full` (create — title required) and `Partial`
//! (update — only fields present in the payload are checked). Every
//! violated rule is collected so a caller sees all problems at once.

use super::{Priority, TaskInput};
use super::error::{Field, Violation};

pub const MAX_TITLE_LEN: usize = 80;
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Whether a payload must carry every required field or only the ones
/// it chose to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Full,
    Partial,
}

/// Check `input` against the field rules, returning every violation.
/// An empty vec means the payload is valid for the given mode.
pub fn validate(input: &TaskInput, mode: ValidationMode) -> Vec<Violation> {
    let mut violations = Vec::new();

    match input.title.as_deref() {
        Some(title) => {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                violations.push(Violation {
                    field: Field::Title,
                    message: "Title cannot be empty".to_string(),
                });
            } else if trimmed.chars().count() > MAX_TITLE_LEN {
                violations.push(Violation {
                    field: Field::Title,
                    message: format!("Title must be {MAX_TITLE_LEN} characters or less"),
                });
            }
        }
        None if mode == ValidationMode::Full => {
            violations.push(Violation {
                field: Field::Title,
                message: "Title is required".to_string(),
            });
        }
        None => {}
    }

    if let Some(description) = input.description.as_deref() {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            violations.push(Violation {
                field: Field::Description,
                message: format!("Description must be {MAX_DESCRIPTION_LEN} characters or less"),
            });
        }
    }

    if let Some(priority) = input.priority.as_deref() {
        if priority.parse::<Priority>().is_err() {
            violations.push(Violation {
                field: Field::Priority,
                message: "Priority must be one of: low, medium, high".to_string(),
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn titled(title: &str) -> TaskInput {
        TaskInput {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn full_mode_requires_title() {
        let violations = validate(&TaskInput::default(), ValidationMode::Full);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, Field::Title);
    }

    #[test]
    fn partial_mode_accepts_absent_title() {
        assert!(validate(&TaskInput::default(), ValidationMode::Partial).is_empty());
    }

    #[test]
    fn whitespace_only_title_rejected_in_both_modes() {
        for mode in [ValidationMode::Full, ValidationMode::Partial] {
            let violations = validate(&titled("   "), mode);
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].field, Field::Title);
        }
    }

    #[test]
    fn title_length_checked_after_trimming() {
        // 80 meaningful chars plus surrounding whitespace is still legal.
        let padded = format!("  {}  ", "x".repeat(80));
        assert!(validate(&titled(&padded), ValidationMode::Full).is_empty());
        assert!(!validate(&titled(&"x".repeat(81)), ValidationMode::Full).is_empty());
    }

    #[test]
    fn all_violations_collected_together() {
        let input = TaskInput {
            title: Some("  ".to_string()),
            description: Some("d".repeat(501)),
            priority: Some("urgent".to_string()),
            completed: Some(true),
        };
        let violations = validate(&input, ValidationMode::Full);
        let fields: Vec<Field> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec![Field::Title, Field::Description, Field::Priority]);
    }

    proptest! {
        #[test]
        fn titles_up_to_80_chars_pass(title in "[a-z][a-z0-9 ]{0,79}") {
            prop_assert!(validate(&titled(&title), ValidationMode::Full).is_empty());
        }

        #[test]
        fn titles_over_80_chars_fail(title in "[a-z]{81,160}") {
            prop_assert!(!validate(&titled(&title), ValidationMode::Full).is_empty());
        }

        #[test]
        fn descriptions_up_to_500_chars_pass(description in "[a-z ]{0,500}") {
            let input = TaskInput {
                title: Some("t".to_string()),
                description: Some(description),
                ..Default::default()
            };
            prop_assert!(validate(&input, ValidationMode::Full).is_empty());
        }
    }
}
