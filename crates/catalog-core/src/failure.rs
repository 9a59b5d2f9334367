use thiserror::Error;

/// Failures the handler layer is allowed to raise
///
/// The error normalizer in the server crate is the only place these are
/// translated into response bodies; everything between the point of
/// detection and the normalizer forwards them unchanged.
#[derive(Debug, Clone, Error)]
pub enum Failure {
    /// A single business-rule violation (e.g. requested entity absent)
    #[error("{message}")]
    InvalidRequest { message: String },

    /// One or more declarative constraint violations, detected before
    /// handler logic runs
    #[error("request validation failed with {} violation(s)", .0.len())]
    Validation(ValidationFailure),

    /// Anything the handler layer could not classify
    #[error("{message}")]
    Internal { message: String },
}

impl Failure {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }
}

/// Aggregated validation violations, split into the two levels the
/// normalizer processes in order: per-field first, then per-object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationFailure {
    pub fields: Vec<Violation>,
    pub objects: Vec<Violation>,
}

impl ValidationFailure {
    pub fn push_field(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.fields.push(Violation {
            name: name.into(),
            message: message.into(),
        });
    }

    pub fn push_object(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.objects.push(Violation {
            name: name.into(),
            message: message.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.fields.len() + self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.objects.is_empty()
    }
}

/// One violated constraint: the field or object it applies to, and the
/// message declared on the constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub name: String,
    pub message: String,
}

impl From<validator::ValidationErrors> for Failure {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut failure = ValidationFailure::default();

        for (field, violations) in errors.field_errors() {
            for violation in violations {
                let message = violation
                    .message
                    .as_ref()
                    .map_or_else(|| violation.code.to_string(), ToString::to_string);

                // The derive records struct-level (schema) violations
                // under the `__all__` pseudo-field
                if field == "__all__" {
                    failure.push_object("request", message);
                } else {
                    failure.push_field(field.to_string(), message);
                }
            }
        }

        Self::Validation(failure)
    }
}
