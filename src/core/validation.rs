//! Field-level validation for form input.
//!
//! Length bounds are strict (`len > min_length`, `len < max_length`) while
//! numeric bounds are inclusive (`value >= min`, `value <= max`). Length is
//! counted in characters on the untrimmed value; only the `required` check
//! trims.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Number(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("value is required")]
    Required,
    #[error("length {length} must be greater than {min_length}")]
    TooShort { length: usize, min_length: usize },
    #[error("length {length} must be less than {max_length}")]
    TooLong { length: usize, max_length: usize },
    #[error("value {value} must be at least {min}")]
    BelowMin { value: i64, min: i64 },
    #[error("value {value} must be at most {max}")]
    AboveMax { value: i64, max: i64 },
}

/// A single value together with the rules it has to satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable<'a> {
    pub value: FieldValue<'a>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl<'a> Validatable<'a> {
    pub fn new(value: FieldValue<'a>) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn text(value: &'a str) -> Self {
        Self::new(FieldValue::Text(value))
    }

    pub fn number(value: i64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: Option<i64>) -> Self {
        self.max = max;
        self
    }

    /// Every rule the value breaks, in rule order.
    pub fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.required && self.value.to_string().trim().is_empty() {
            violations.push(Violation::Required);
        }

        match self.value {
            FieldValue::Text(text) => {
                let length = text.chars().count();
                if let Some(min_length) = self.min_length
                    && length <= min_length
                {
                    violations.push(Violation::TooShort { length, min_length });
                }
                if let Some(max_length) = self.max_length
                    && length >= max_length
                {
                    violations.push(Violation::TooLong { length, max_length });
                }
            }
            FieldValue::Number(value) => {
                if let Some(min) = self.min
                    && value < min
                {
                    violations.push(Violation::BelowMin { value, min });
                }
                if let Some(max) = self.max
                    && value > max
                {
                    violations.push(Violation::AboveMax { value, max });
                }
            }
        }

        violations
    }
}

pub fn validate(input: &Validatable<'_>) -> bool {
    input.violations().is_empty()
}
