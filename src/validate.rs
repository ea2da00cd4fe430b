//! Draft validation for the add-employee dialog.
//!
//! The rules here are the single source of truth for whether a draft is
//! submittable. `validate` is a pure function over the draft and the
//! configured option lists so it can be exercised without any UI.

use std::collections::BTreeMap;

use crate::models::employee::CreateEmployee;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 40;
pub const CODE_LEN: usize = 4;
pub const PROFESSION_MIN: usize = 3;
pub const PROFESSION_MAX: usize = 30;
pub const CITY_MIN: usize = 3;
pub const CITY_MAX: usize = 25;

/// Fields that can fail validation.
///
/// `assigned` is a plain bool and has no failure mode, so it does not
/// appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Code,
    Profession,
    Color,
    City,
    Branch,
}

impl Field {
    /// Display label used next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Code => "Code",
            Field::Profession => "Profession",
            Field::Color => "Color",
            Field::City => "City",
            Field::Branch => "Branch",
        }
    }
}

/// Per-field validation messages, at most one per field.
pub type FieldErrors = BTreeMap<Field, String>;

/// Validate a draft against the configured color and branch options.
///
/// Returns an empty map when the draft is submittable. Lengths are counted
/// in characters, not bytes.
pub fn validate(draft: &CreateEmployee, colors: &[String], branches: &[String]) -> FieldErrors {
    let mut errors = FieldErrors::new();

    check_text(&mut errors, Field::Name, &draft.name, NAME_MIN, NAME_MAX);

    if draft.code.chars().count() != CODE_LEN {
        errors.insert(Field::Code, format!("Code must be exactly {CODE_LEN} characters"));
    }

    check_text(
        &mut errors,
        Field::Profession,
        &draft.profession,
        PROFESSION_MIN,
        PROFESSION_MAX,
    );

    check_option(&mut errors, Field::Color, &draft.color, colors);

    check_text(&mut errors, Field::City, &draft.city, CITY_MIN, CITY_MAX);

    check_option(&mut errors, Field::Branch, &draft.branch, branches);

    errors
}

/// Required text field with a character length range.
fn check_text(errors: &mut FieldErrors, field: Field, value: &str, min: usize, max: usize) {
    let len = value.chars().count();
    if len == 0 {
        errors.insert(field, format!("{} is required", field.label()));
    } else if len < min || len > max {
        errors.insert(
            field,
            format!("{} must be between {min} and {max} characters", field.label()),
        );
    }
}

/// Required enum field whose value must come from the configured options.
fn check_option(errors: &mut FieldErrors, field: Field, value: &str, options: &[String]) {
    if value.is_empty() {
        errors.insert(field, format!("{} is required", field.label()));
    } else if !options.iter().any(|o| o == value) {
        errors.insert(field, format!("{} must be one of the listed options", field.label()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> (Vec<String>, Vec<String>) {
        let colors = vec!["blue".to_string(), "green".to_string(), "red".to_string()];
        let branches = vec!["main".to_string(), "north".to_string()];
        (colors, branches)
    }

    fn valid_draft() -> CreateEmployee {
        let (colors, branches) = palette();
        CreateEmployee {
            name: "Alice Doe".to_string(),
            code: "A123".to_string(),
            profession: "Estimator".to_string(),
            color: colors[0].clone(),
            city: "Toronto".to_string(),
            branch: branches[0].clone(),
            assigned: true,
        }
    }

    #[test]
    fn test_default_draft_passes() {
        let (colors, branches) = palette();
        let errors = validate(&valid_draft(), &colors, &branches);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_name_blocks_with_single_message() {
        let (colors, branches) = palette();
        let mut draft = valid_draft();
        draft.name = String::new();

        let errors = validate(&draft, &colors, &branches);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&Field::Name).unwrap(), "Name is required");
    }

    #[test]
    fn test_name_length_bounds() {
        let (colors, branches) = palette();
        let mut draft = valid_draft();

        draft.name = "A".to_string();
        assert!(validate(&draft, &colors, &branches).contains_key(&Field::Name));

        draft.name = "Al".to_string();
        assert!(validate(&draft, &colors, &branches).is_empty());

        draft.name = "x".repeat(40);
        assert!(validate(&draft, &colors, &branches).is_empty());

        draft.name = "x".repeat(41);
        assert!(validate(&draft, &colors, &branches).contains_key(&Field::Name));
    }

    #[test]
    fn test_code_requires_exactly_four_characters() {
        let (colors, branches) = palette();
        let mut draft = valid_draft();

        draft.code = "A12".to_string();
        let errors = validate(&draft, &colors, &branches);
        assert_eq!(errors.get(&Field::Code).unwrap(), "Code must be exactly 4 characters");

        draft.code = "A1234".to_string();
        assert!(validate(&draft, &colors, &branches).contains_key(&Field::Code));

        draft.code = "A123".to_string();
        assert!(validate(&draft, &colors, &branches).is_empty());
    }

    #[test]
    fn test_profession_length_bounds() {
        let (colors, branches) = palette();
        let mut draft = valid_draft();

        draft.profession = "ab".to_string();
        let errors = validate(&draft, &colors, &branches);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&Field::Profession).unwrap(),
            "Profession must be between 3 and 30 characters"
        );

        draft.profession = "x".repeat(31);
        assert!(validate(&draft, &colors, &branches).contains_key(&Field::Profession));
    }

    #[test]
    fn test_city_length_bounds() {
        let (colors, branches) = palette();
        let mut draft = valid_draft();

        draft.city = "ab".to_string();
        assert!(validate(&draft, &colors, &branches).contains_key(&Field::City));

        draft.city = "x".repeat(26);
        assert!(validate(&draft, &colors, &branches).contains_key(&Field::City));

        draft.city = "x".repeat(25);
        assert!(validate(&draft, &colors, &branches).is_empty());
    }

    #[test]
    fn test_empty_color_is_required() {
        let (colors, branches) = palette();
        let mut draft = valid_draft();
        draft.color = String::new();

        let errors = validate(&draft, &colors, &branches);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&Field::Color).unwrap(), "Color is required");
    }

    #[test]
    fn test_unknown_color_rejected() {
        let (colors, branches) = palette();
        let mut draft = valid_draft();
        draft.color = "chartreuse".to_string();

        let errors = validate(&draft, &colors, &branches);
        assert_eq!(errors.len(), 1);
        assert!(errors.get(&Field::Color).unwrap().contains("Color"));
    }

    #[test]
    fn test_unknown_branch_rejected() {
        let (colors, branches) = palette();
        let mut draft = valid_draft();
        draft.branch = "unknown".to_string();

        let errors = validate(&draft, &colors, &branches);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&Field::Branch));
    }

    #[test]
    fn test_lengths_counted_in_characters() {
        let (colors, branches) = palette();
        let mut draft = valid_draft();

        // 4 characters, more than 4 bytes
        draft.code = "çöde".to_string();
        assert!(validate(&draft, &colors, &branches).is_empty());
    }

    #[test]
    fn test_multiple_violations_reported_per_field() {
        let (colors, branches) = palette();
        let draft = CreateEmployee {
            name: String::new(),
            code: "12".to_string(),
            profession: String::new(),
            color: String::new(),
            city: String::new(),
            branch: String::new(),
            assigned: false,
        };

        let errors = validate(&draft, &colors, &branches);
        assert_eq!(errors.len(), 6);
    }
}
