//! Initial attribute values for new issues.

use crate::session::state::{AttributeKind, AttributeSchema, SessionHandle};

/// Placeholder a user attribute default may use for the current user.
pub const CURRENT_USER_TOKEN: &str = "[Me]";

/// Converts a raw attribute default into the initial form value.
pub trait ValueParser: Send + Sync {
    fn convert_initial_value(&self, default: Option<&str>, attribute: &AttributeSchema) -> String;
}

/// Expands `[Me]` on user attributes and passes other defaults through trimmed.
#[derive(Debug, Clone, Default)]
pub struct DefaultValueParser {
    session: SessionHandle,
}

impl DefaultValueParser {
    pub fn new(session: SessionHandle) -> Self {
        Self { session }
    }
}

impl ValueParser for DefaultValueParser {
    fn convert_initial_value(&self, default: Option<&str>, attribute: &AttributeSchema) -> String {
        let Some(raw) = default.map(str::trim).filter(|v| !v.is_empty()) else {
            return String::new();
        };

        match attribute.kind {
            AttributeKind::User if raw == CURRENT_USER_TOKEN => {
                self.session.snapshot().user_name.clone().unwrap_or_default()
            }
            _ => raw.to_string(),
        }
    }
}
