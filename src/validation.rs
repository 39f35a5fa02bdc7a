//! Field rules for roster entities
//!
//! Each entity declares a list of rules: the field, its display label, a
//! check and the message shown when the check fails. The store evaluates
//! these before any write; callers surface the messages as-is.

use crate::error::{FieldError, Result, RosterError};
use crate::models::{Player, Team};


/// Upper bound shared by every text column
pub const MAX_NAME_LENGTH: usize = 50;

/// Predicate applied to a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Present and not blank
    Required,
    /// At most this many characters
    MaxLength(usize),
}

impl Check {
    pub fn passes(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (Check::Required, Some(v)) => !v.trim().is_empty(),
            (Check::Required, None) => false,
            (Check::MaxLength(max), Some(v)) => v.chars().count() <= *max,
            (Check::MaxLength(_), None) => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub label: &'static str,
    pub check: Check,
    pub message: &'static str,
}

pub const TEAM_RULES: &[FieldRule] = &[
    FieldRule {
        field: "TeamName",
        label: "Team Name",
        check: Check::Required,
        message: "Team Name is required.",
    },
    FieldRule {
        field: "TeamName",
        label: "Team Name",
        check: Check::MaxLength(MAX_NAME_LENGTH),
        message: "Team Name may not be longer than 50 charaters.",
    },
];

pub const PLAYER_RULES: &[FieldRule] = &[
    FieldRule {
        field: "FirstName",
        label: "First Name",
        check: Check::Required,
        message: "First Name is required.",
    },
    FieldRule {
        field: "FirstName",
        label: "First Name",
        check: Check::MaxLength(MAX_NAME_LENGTH),
        message: "First Name may not be longer than 50 charaters.",
    },
    FieldRule {
        field: "LastName",
        label: "Last Name",
        check: Check::Required,
        message: "Last Name is required.",
    },
    FieldRule {
        field: "LastName",
        label: "Last Name",
        check: Check::MaxLength(MAX_NAME_LENGTH),
        message: "Last Name may not be longer than 50 characters.",
    },
];

/// Display label for a field, falling back to the field name.
pub fn label_for(rules: &[FieldRule], field: &str) -> String {
    rules
        .iter()
        .find(|r| r.field == field)
        .map(|r| r.label.to_string())
        .unwrap_or_else(|| field.to_string())
}

pub trait Validate {
    fn rules() -> &'static [FieldRule];

    /// Current value of a text field named in `rules()`
    fn field_value(&self, field: &str) -> Option<&str>;

    /// Failing rules in declaration order, at most one per field.
    fn violations(&self) -> Vec<FieldError> {
        let mut errors: Vec<FieldError> = Vec::new();
        for rule in Self::rules() {
            if errors.iter().any(|e| e.field == rule.field) {
                continue;
            }
            if !rule.check.passes(self.field_value(rule.field)) {
                errors.push(FieldError {
                    field: rule.field,
                    message: rule.message.to_string(),
                });
            }
        }
        errors
    }

    fn validate(&self) -> Result<()> {
        let errors = self.violations();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(RosterError::Validation { errors })
        }
    }
}

impl Validate for Team {
    fn rules() -> &'static [FieldRule] {
        TEAM_RULES
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "TeamName" => Some(self.team_name.as_str()),
            _ => None,
        }
    }
}

impl Validate for Player {
    fn rules() -> &'static [FieldRule] {
        PLAYER_RULES
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "FirstName" => Some(self.first_name.as_str()),
            "LastName" => Some(self.last_name.as_str()),
            _ => None,
        }
    }
}
