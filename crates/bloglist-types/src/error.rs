use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// A rule of the draft schema that a field broke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldIssue {
    /// Required field absent, null, or an empty string.
    Missing,
    /// Field present with the wrong JSON type.
    WrongType { expected: &'static str },
}

/// A draft failed the schema. Every offending field is listed, in schema order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}", describe(.fields))]
pub struct ValidationError {
    pub fields: Vec<(&'static str, FieldIssue)>,
}

impl ValidationError {
    /// Error for a body that is not a JSON object at all.
    pub fn not_an_object() -> Self {
        Self {
            fields: vec![("body", FieldIssue::WrongType { expected: "a JSON object" })],
        }
    }

    /// Names of the offending fields.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }
}

fn describe(fields: &[(&'static str, FieldIssue)]) -> String {
    let parts: Vec<String> = fields
        .iter()
        .map(|(name, issue)| match issue {
            FieldIssue::Missing => format!("`{name}` is required"),
            FieldIssue::WrongType { expected } => format!("`{name}` must be {expected}"),
        })
        .collect();
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_every_field() {
        let err = ValidationError {
            fields: vec![
                ("title", FieldIssue::Missing),
                ("author", FieldIssue::WrongType { expected: "a string" }),
            ],
        };
        assert_eq!(
            err.to_string(),
            "`title` is required, `author` must be a string"
        );
        assert_eq!(err.field_names(), vec!["title", "author"]);
    }

    #[test]
    fn not_an_object_message() {
        assert_eq!(
            ValidationError::not_an_object().to_string(),
            "`body` must be a JSON object"
        );
    }
}
