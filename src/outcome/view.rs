//! View descriptors and redirect instructions.
//!
//! A descriptor names the screen to show and carries the initial state the
//! screen needs. Every variant serializes to `{"component": "<Variant>", ...}`
//! with camelCase field names.

use serde::Serialize;
use std::path::PathBuf;

use crate::routing::RouteParams;
use crate::session::TextFormat;
use crate::transport::types::AttributeValue;

/// Presentation size hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewSize {
    Small,
    Large,
}

/// Mode of the issue form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueFormMode {
    Add,
    Edit,
    Clone,
}

/// Mode of the description, comment and file forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Add,
    Edit,
}

/// The screen a successful resolution renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "component", rename_all_fields = "camelCase")]
pub enum ViewDescriptor {
    IssueDetails,

    GoToItem,

    EditIssue {
        mode: IssueFormMode,
        #[serde(skip_serializing_if = "Option::is_none")]
        issue_id: Option<u64>,
        type_id: u64,
        initial_project_id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        initial_folder_id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        initial_name: Option<String>,
        attributes: Vec<AttributeValue>,
        #[serde(skip_serializing_if = "Option::is_none")]
        initial_description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        initial_format: Option<TextFormat>,
    },

    MoveIssue {
        issue_id: u64,
        type_id: u64,
        initial_project_id: u64,
        initial_folder_id: u64,
        name: String,
    },

    DeleteIssue {
        issue_id: u64,
        name: String,
    },

    EditDescription {
        mode: FormMode,
        issue_id: u64,
        issue_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        initial_description: Option<String>,
        initial_format: TextFormat,
    },

    DeleteDescription {
        issue_id: u64,
        issue_name: String,
    },

    EditComment {
        mode: FormMode,
        issue_id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        comment_id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        issue_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        initial_comment: Option<String>,
        initial_format: TextFormat,
    },

    DeleteComment {
        issue_id: u64,
        comment_id: u64,
    },

    EditFile {
        mode: FormMode,
        issue_id: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        file_id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        issue_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        initial_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        initial_description: Option<String>,
    },

    DeleteFile {
        issue_id: u64,
        file_id: u64,
        name: String,
    },

    ClientDownload {
        issue_id: u64,
        file_id: u64,
        name: String,
        total: u64,
        file_size: u64,
        initial_path: Option<PathBuf>,
    },
}

impl ViewDescriptor {
    /// The `component` identifier.
    pub fn component(&self) -> &'static str {
        match self {
            ViewDescriptor::IssueDetails => "IssueDetails",
            ViewDescriptor::GoToItem => "GoToItem",
            ViewDescriptor::EditIssue { .. } => "EditIssue",
            ViewDescriptor::MoveIssue { .. } => "MoveIssue",
            ViewDescriptor::DeleteIssue { .. } => "DeleteIssue",
            ViewDescriptor::EditDescription { .. } => "EditDescription",
            ViewDescriptor::DeleteDescription { .. } => "DeleteDescription",
            ViewDescriptor::EditComment { .. } => "EditComment",
            ViewDescriptor::DeleteComment { .. } => "DeleteComment",
            ViewDescriptor::EditFile { .. } => "EditFile",
            ViewDescriptor::DeleteFile { .. } => "DeleteFile",
            ViewDescriptor::ClientDownload { .. } => "ClientDownload",
        }
    }

    pub fn size(&self) -> Option<ViewSize> {
        match self {
            ViewDescriptor::IssueDetails => Some(ViewSize::Large),
            ViewDescriptor::DeleteDescription { .. }
            | ViewDescriptor::DeleteComment { .. }
            | ViewDescriptor::DeleteFile { .. } => Some(ViewSize::Small),
            _ => None,
        }
    }

    /// Wire form including the `size` hint.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        if let (Some(size), Some(map)) = (self.size(), value.as_object_mut()) {
            map.insert("size".to_string(), serde_json::to_value(size)?);
        }
        Ok(value)
    }
}

/// Retarget the resolution to another named route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedirectInstruction {
    pub replace: String,
    #[serde(flatten)]
    pub params: RouteParams,
}

impl RedirectInstruction {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            replace: target.into(),
            params: RouteParams::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name, value);
        self
    }
}

/// Successful result of a resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    View(ViewDescriptor),
    Redirect(RedirectInstruction),
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::View(_) => "view",
            Outcome::Redirect(_) => "redirect",
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Outcome::View(view) => view.to_json(),
            Outcome::Redirect(redirect) => serde_json::to_value(redirect),
        }
    }
}

impl From<ViewDescriptor> for Outcome {
    fn from(view: ViewDescriptor) -> Self {
        Outcome::View(view)
    }
}

impl From<RedirectInstruction> for Outcome {
    fn from(redirect: RedirectInstruction) -> Self {
        Outcome::Redirect(redirect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_size_hints() {
        assert_eq!(ViewDescriptor::IssueDetails.size(), Some(ViewSize::Large));
        assert_eq!(ViewDescriptor::GoToItem.size(), None);
        let view = ViewDescriptor::DeleteComment {
            issue_id: 1,
            comment_id: 2,
        };
        assert_eq!(view.size(), Some(ViewSize::Small));
    }

    #[test]
    fn test_wire_shape() {
        let view = ViewDescriptor::DeleteFile {
            issue_id: 3,
            file_id: 8,
            name: "trace.log".into(),
        };
        assert_eq!(
            view.to_json().unwrap(),
            json!({
                "component": "DeleteFile",
                "size": "small",
                "issueId": 3,
                "fileId": 8,
                "name": "trace.log"
            })
        );

        let view = ViewDescriptor::EditDescription {
            mode: FormMode::Add,
            issue_id: 3,
            issue_name: "Crash".into(),
            initial_description: None,
            initial_format: TextFormat::TextWithMarkup,
        };
        assert_eq!(
            view.to_json().unwrap(),
            json!({
                "component": "EditDescription",
                "mode": "add",
                "issueId": 3,
                "issueName": "Crash",
                "initialFormat": 1
            })
        );
    }

    #[test]
    fn test_redirect_wire_shape() {
        let redirect = RedirectInstruction::new("IssueItem")
            .param("issueId", 10)
            .param("itemId", 12);
        assert_eq!(
            Outcome::from(redirect).to_json().unwrap(),
            json!({ "replace": "IssueItem", "issueId": "10", "itemId": "12" })
        );
    }
}
