//! Raw project form input and its validation.

use std::fmt;

use thiserror::Error;

use crate::{
    config::ValidationRules,
    core::{
        project::NewProject,
        validation::{Validatable, Violation},
    },
};

pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input please try again!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    People,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::People => "people",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Rule(Violation),
    NotANumber(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Rule(violation) => write!(f, "{violation}"),
            FieldError::NotANumber(raw) => write!(f, "`{raw}` is not a whole number"),
        }
    }
}

/// Rejected form input. Displays as the generic user-facing message; the
/// per-field detail is kept in `errors`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", INVALID_INPUT_MESSAGE)]
pub struct InvalidInput {
    pub errors: Vec<(Field, FieldError)>,
}

impl InvalidInput {
    pub fn has_field(&self, field: Field) -> bool {
        self.errors.iter().any(|(f, _)| *f == field)
    }

    pub fn detail(&self) -> String {
        self.errors
            .iter()
            .map(|(field, error)| format!("{field}: {error}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl ProjectForm {
    pub fn gather(&self, rules: &ValidationRules) -> Result<NewProject, InvalidInput> {
        let mut errors = Vec::new();

        let title = Validatable::text(&self.title).required();
        errors.extend(
            title
                .violations()
                .into_iter()
                .map(|v| (Field::Title, FieldError::Rule(v))),
        );

        let description = Validatable::text(&self.description)
            .required()
            .min_length(rules.description_min_length)
            .max_length(rules.description_max_length);
        errors.extend(
            description
                .violations()
                .into_iter()
                .map(|v| (Field::Description, FieldError::Rule(v))),
        );

        let people = match self.people.trim().parse::<i64>() {
            Ok(people) => {
                let rule = Validatable::number(people)
                    .required()
                    .min(rules.people_min)
                    .max(rules.people_max);
                errors.extend(
                    rule.violations()
                        .into_iter()
                        .map(|v| (Field::People, FieldError::Rule(v))),
                );
                let headcount = u32::try_from(people).ok();
                if headcount.is_none() && people > 0 {
                    errors.push((
                        Field::People,
                        FieldError::Rule(Violation::AboveMax {
                            value: people,
                            max: i64::from(u32::MAX),
                        }),
                    ));
                }
                headcount
            }
            Err(_) => {
                errors.push((Field::People, FieldError::NotANumber(self.people.clone())));
                None
            }
        };

        match people {
            Some(people) if errors.is_empty() => Ok(NewProject {
                title: self.title.clone(),
                description: self.description.clone(),
                people,
            }),
            _ => Err(InvalidInput { errors }),
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, description: &str, people: &str) -> ProjectForm {
        ProjectForm {
            title: title.to_string(),
            description: description.to_string(),
            people: people.to_string(),
        }
    }

    #[test]
    fn accepts_valid_input() {
        let new = form("Ship it", "Release the thing", "3")
            .gather(&ValidationRules::default())
            .unwrap();
        assert_eq!(new.title, "Ship it");
        assert_eq!(new.people, 3);
    }

    #[test]
    fn rejects_non_numeric_people() {
        let err = form("Ship it", "Release the thing", "many")
            .gather(&ValidationRules::default())
            .unwrap_err();
        assert!(err.has_field(Field::People));
        assert!(!err.has_field(Field::Title));
    }

    #[test]
    fn rejects_zero_and_negative_people() {
        let rules = ValidationRules::default();
        assert!(form("a", "long enough", "0").gather(&rules).is_err());
        assert!(form("a", "long enough", "-2").gather(&rules).is_err());
    }

    #[test]
    fn people_upper_bound_is_configurable() {
        let rules = ValidationRules {
            people_max: Some(5),
            ..ValidationRules::default()
        };
        assert!(form("a", "long enough", "5").gather(&rules).is_ok());
        assert!(form("a", "long enough", "6").gather(&rules).is_err());
    }

    #[test]
    fn error_displays_generic_message() {
        let err = form("", "", "").gather(&ValidationRules::default()).unwrap_err();
        assert_eq!(err.to_string(), INVALID_INPUT_MESSAGE);
        assert!(err.detail().contains("title: value is required"));
    }

    #[test]
    fn clear_empties_every_field() {
        let mut f = form("a", "b", "1");
        f.clear();
        assert_eq!(f, ProjectForm::default());
    }
}
