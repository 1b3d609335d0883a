//! Request and response payloads.

use serde::{Deserialize, Serialize};

use crate::session::TextFormat;

/// Access tier the server must verify before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Access {
    Admin,
    AdminOrOwner,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// `issues/find`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindItem {
    pub item_id: u64,
}

/// `issues/load`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadIssue {
    pub issue_id: u64,
    #[serde(skip_serializing_if = "is_false")]
    pub description: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub attributes: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
}

impl LoadIssue {
    pub fn new(issue_id: u64) -> Self {
        Self {
            issue_id,
            description: false,
            attributes: false,
            access: None,
        }
    }

    pub fn with_description(mut self) -> Self {
        self.description = true;
        self
    }

    pub fn with_attributes(mut self) -> Self {
        self.attributes = true;
        self
    }

    pub fn with_access(mut self, access: Access) -> Self {
        self.access = Some(access);
        self
    }
}

/// `issues/comments/load`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadComment {
    pub issue_id: u64,
    pub comment_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
}

impl LoadComment {
    pub fn new(issue_id: u64, comment_id: u64) -> Self {
        Self {
            issue_id,
            comment_id,
            access: None,
        }
    }

    pub fn with_access(mut self, access: Access) -> Self {
        self.access = Some(access);
        self
    }
}

/// `issues/files/load`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadFile {
    pub issue_id: u64,
    pub file_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
}

impl LoadFile {
    pub fn new(issue_id: u64, file_id: u64) -> Self {
        Self {
            issue_id,
            file_id,
            access: None,
        }
    }

    pub fn with_access(mut self, access: Access) -> Self {
        self.access = Some(access);
        self
    }
}

/// Core fields of an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDetails {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub type_id: u64,
    pub project_id: u64,
    pub folder_id: u64,
}

/// Issue description text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub text: String,
    #[serde(default)]
    pub format: TextFormat,
}

/// Value of one attribute, as loaded or as initialized for a new issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// `issues/load` response. Sub-resources are present only when requested
/// and existing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueData {
    pub details: IssueDetails,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub attributes: Option<Vec<AttributeValue>>,
}

/// `issues/comments/load` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommentData {
    pub text: String,
    #[serde(default)]
    pub format: TextFormat,
}

/// `issues/files/load` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileData {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub size: u64,
}
