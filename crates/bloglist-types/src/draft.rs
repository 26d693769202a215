//! The draft schema.
//!
//! Create and replace both validate request bodies against [`DRAFT_SCHEMA`]
//! through [`parse_draft`]; there is no other path from client JSON to a
//! [`BlogDraft`].

use std::collections::HashMap;

use serde_json::Value;

use crate::blog::BlogDraft;
use crate::error::{FieldIssue, ValidationError};

/// How a single draft field is checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Must be present as a string with visible content.
    RequiredText,
    /// May be absent or null; otherwise must be a string.
    OptionalText,
    /// Non-negative integer. Anything else (absent, negative, fractional,
    /// wrong type) falls back to zero.
    Count,
}

/// One entry of the draft schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Field rules for blog drafts, in reporting order.
pub const DRAFT_SCHEMA: &[FieldRule] = &[
    FieldRule { name: "title", kind: FieldKind::RequiredText },
    FieldRule { name: "author", kind: FieldKind::OptionalText },
    FieldRule { name: "url", kind: FieldKind::RequiredText },
    FieldRule { name: "likes", kind: FieldKind::Count },
];

/// Names of the fields the schema requires.
pub fn required_fields() -> Vec<&'static str> {
    DRAFT_SCHEMA
        .iter()
        .filter(|rule| rule.kind == FieldKind::RequiredText)
        .map(|rule| rule.name)
        .collect()
}

enum Checked {
    Text(Option<String>),
    Count(u64),
}

fn check(kind: FieldKind, value: Option<&Value>) -> Result<Checked, FieldIssue> {
    match kind {
        FieldKind::RequiredText => match value {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(Checked::Text(Some(s.clone()))),
            None | Some(Value::Null) | Some(Value::String(_)) => Err(FieldIssue::Missing),
            Some(_) => Err(FieldIssue::WrongType {
                expected: "a non-empty string",
            }),
        },
        FieldKind::OptionalText => match value {
            None | Some(Value::Null) => Ok(Checked::Text(None)),
            Some(Value::String(s)) => Ok(Checked::Text(Some(s.clone()))),
            Some(_) => Err(FieldIssue::WrongType { expected: "a string" }),
        },
        FieldKind::Count => Ok(Checked::Count(
            value.and_then(Value::as_u64).unwrap_or(0),
        )),
    }
}

struct CheckedFields(HashMap<&'static str, Checked>);

impl CheckedFields {
    fn text(&mut self, name: &str) -> Option<String> {
        match self.0.remove(name) {
            Some(Checked::Text(text)) => text,
            _ => None,
        }
    }

    fn count(&mut self, name: &str) -> u64 {
        match self.0.remove(name) {
            Some(Checked::Count(n)) => n,
            _ => 0,
        }
    }
}

/// Validate an untrusted JSON body against [`DRAFT_SCHEMA`].
///
/// All rules are evaluated before returning so the error names every
/// offending field at once.
pub fn parse_draft(body: &Value) -> Result<BlogDraft, ValidationError> {
    let Some(object) = body.as_object() else {
        return Err(ValidationError::not_an_object());
    };

    let mut checked = HashMap::with_capacity(DRAFT_SCHEMA.len());
    let mut issues = Vec::new();
    for rule in DRAFT_SCHEMA {
        match check(rule.kind, object.get(rule.name)) {
            Ok(value) => {
                checked.insert(rule.name, value);
            }
            Err(issue) => issues.push((rule.name, issue)),
        }
    }
    if !issues.is_empty() {
        return Err(ValidationError { fields: issues });
    }

    let mut fields = CheckedFields(checked);
    Ok(BlogDraft {
        title: fields.text("title").unwrap_or_default(),
        author: fields.text("author"),
        url: fields.text("url").unwrap_or_default(),
        likes: fields.count("likes"),
    })
}
