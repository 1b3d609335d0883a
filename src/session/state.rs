//! Session snapshot shared by all resolutions.

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Text format of descriptions and comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TextFormat {
    #[default]
    PlainText,
    TextWithMarkup,
}

#[derive(Debug, Error)]
#[error("Unknown text format {0}")]
pub struct UnknownTextFormat(pub u8);

impl From<TextFormat> for u8 {
    fn from(format: TextFormat) -> Self {
        match format {
            TextFormat::PlainText => 0,
            TextFormat::TextWithMarkup => 1,
        }
    }
}

impl TryFrom<u8> for TextFormat {
    type Error = UnknownTextFormat;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TextFormat::PlainText),
            1 => Ok(TextFormat::TextWithMarkup),
            other => Err(UnknownTextFormat(other)),
        }
    }
}

/// Attribute value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttributeKind {
    #[default]
    Text,
    Enum,
    Numeric,
    DateTime,
    User,
}

/// Schema of a single issue attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSchema {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: AttributeKind,
    /// Raw default value, interpreted by a `ValueParser`.
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub required: bool,
}

/// An issue type known to the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueType {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<AttributeSchema>,
}

/// Project or folder the user is currently browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// Server-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub default_format: TextFormat,
}

/// Read-only view of client state consulted while resolving a route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    pub authenticated: bool,
    pub user_name: Option<String>,
    pub server_uuid: Option<String>,
    pub settings: Settings,
    pub types: Vec<IssueType>,
    pub project: Option<Location>,
    pub folder: Option<Location>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn find_type(&self, type_id: u64) -> Option<&IssueType> {
        self.types.iter().find(|t| t.id == type_id)
    }

    pub fn project_id(&self) -> Option<u64> {
        self.project.as_ref().map(|p| p.id)
    }

    pub fn folder_id(&self) -> Option<u64> {
        self.folder.as_ref().map(|f| f.id)
    }
}

/// Shared, atomically swappable session.
///
/// Each resolution takes one snapshot up front and never observes a later
/// login or logout halfway through.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<ArcSwap<Session>>,
}

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(session)),
        }
    }

    pub fn snapshot(&self) -> Arc<Session> {
        self.inner.load_full()
    }

    pub fn replace(&self, session: Session) {
        self.inner.store(Arc::new(session));
    }

    /// Apply a change to a copy of the current session and publish it.
    pub fn update<F>(&self, mut f: F)
    where
        F: FnMut(&mut Session),
    {
        self.inner.rcu(|current| {
            let mut next = Session::clone(current);
            f(&mut next);
            next
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_format_wire_values() {
        assert_eq!(serde_json::to_string(&TextFormat::TextWithMarkup).unwrap(), "1");
        let format: TextFormat = serde_json::from_str("0").unwrap();
        assert_eq!(format, TextFormat::PlainText);
        assert!(serde_json::from_str::<TextFormat>("7").is_err());
    }

    #[test]
    fn test_session_deserialize() {
        let session: Session = serde_json::from_value(serde_json::json!({
            "authenticated": true,
            "userName": "alice",
            "settings": { "defaultFormat": 1 },
            "types": [{
                "id": 2,
                "name": "Bugs",
                "attributes": [{ "id": 5, "name": "Severity", "type": "ENUM", "default": "Low" }]
            }],
            "project": { "id": 4 }
        }))
        .unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.settings.default_format, TextFormat::TextWithMarkup);
        assert_eq!(session.project_id(), Some(4));
        assert_eq!(session.folder_id(), None);
        let bugs = session.find_type(2).unwrap();
        assert_eq!(bugs.attributes[0].kind, AttributeKind::Enum);
        assert!(session.find_type(3).is_none());
    }

    #[test]
    fn test_handle_snapshot_isolation() {
        let handle = SessionHandle::default();
        let before = handle.snapshot();

        handle.update(|s| s.authenticated = true);

        assert!(!before.is_authenticated());
        assert!(handle.snapshot().is_authenticated());
    }
}
