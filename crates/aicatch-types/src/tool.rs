//! Tool identity and record types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Opaque identifier for a catalog entry, assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolId(String);

impl ToolId {
    /// Creates a new `ToolId`. The only requirement is that it is not blank.
    pub fn new(id: impl Into<String>) -> Result<Self, CatalogError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CatalogError::invalid_input("Invalid tool ID"));
        }
        Ok(Self(id))
    }

    /// Returns the tool id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ToolId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// The four mutable fields of a tool, always replaced together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolFields {
    pub name: String,
    pub category: String,
    pub description: String,
    pub link: String,
}

impl ToolFields {
    /// Builds a field set from anything string-like.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: description.into(),
            link: link.into(),
        }
    }

    /// Names of the fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        ToolDraft::from(self.clone()).missing_fields()
    }
}

/// Create/update payload as it arrives on the wire.
///
/// Every field is optional so callers can tell "absent" apart from
/// "present but empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl ToolDraft {
    /// Names of the fields that are absent or empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        [
            ("name", &self.name),
            ("category", &self.category),
            ("description", &self.description),
            ("link", &self.link),
        ]
        .into_iter()
        .filter(|(_, value)| !present(value))
        .map(|(field, _)| field)
        .collect()
    }

    /// Converts into a full field set.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error naming every missing field.
    pub fn require_all(self) -> Result<ToolFields, CatalogError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CatalogError::invalid_input("Missing required fields")
                .with_context(missing.join(", ")));
        }
        Ok(ToolFields {
            name: self.name.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            link: self.link.unwrap_or_default(),
        })
    }
}

impl From<ToolFields> for ToolDraft {
    fn from(fields: ToolFields) -> Self {
        Self {
            name: Some(fields.name),
            category: Some(fields.category),
            description: Some(fields.description),
            link: Some(fields.link),
        }
    }
}

/// A stored catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: ToolId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub link: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp of the last update (equals `created_at` until edited).
    pub updated_at: String,
}

impl Tool {
    /// Returns a copy of the mutable fields.
    pub fn fields(&self) -> ToolFields {
        ToolFields {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            link: self.link.clone(),
        }
    }

    /// Replaces all four mutable fields in place.
    pub fn apply(&mut self, fields: ToolFields) {
        self.name = fields.name;
        self.category = fields.category;
        self.description = fields.description;
        self.link = fields.link;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tool {
        Tool {
            id: ToolId::new("a1").unwrap(),
            name: "Alpha".into(),
            category: "X".into(),
            description: "first".into(),
            link: "https://alpha.example".into(),
            created_at: "2024-01-01T00:00:00+00:00".into(),
            updated_at: "2024-01-01T00:00:00+00:00".into(),
        }
    }

    #[test]
    fn blank_tool_id_rejected() {
        assert!(ToolId::new("").is_err());
        assert!(ToolId::new("   ").is_err());
        assert_eq!(ToolId::new("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn tool_id_serializes_as_plain_string() {
        let id = ToolId::new("123").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"123\"");
    }

    #[test]
    fn tool_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00+00:00");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn draft_reports_absent_and_empty_fields() {
        let draft: ToolDraft = serde_json::from_str(r#"{"category":"C","name":""}"#).unwrap();
        assert_eq!(draft.missing_fields(), vec!["name", "description", "link"]);
    }

    #[test]
    fn draft_require_all_names_missing_fields() {
        let draft = ToolDraft {
            name: Some("A".into()),
            ..ToolDraft::default()
        };
        let err = draft.require_all().unwrap_err();
        assert_eq!(err.context.as_deref(), Some("category, description, link"));
    }

    #[test]
    fn complete_draft_converts() {
        let fields = ToolDraft::from(ToolFields::new("A", "C", "D", "L"))
            .require_all()
            .unwrap();
        assert_eq!(fields, ToolFields::new("A", "C", "D", "L"));
    }

    #[test]
    fn apply_keeps_id_and_timestamps() {
        let mut tool = sample();
        tool.apply(ToolFields::new("Beta", "Y", "second", "https://beta.example"));
        assert_eq!(tool.id.as_str(), "a1");
        assert_eq!(tool.name, "Beta");
        assert_eq!(tool.created_at, "2024-01-01T00:00:00+00:00");
    }
}
