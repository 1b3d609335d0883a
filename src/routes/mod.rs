//! Issue tracker route table.
//!
//! # Responsibilities
//! - Register every issue, description, comment and file route
//! - Declare which routes require an authenticated session
//! - Register the desktop-only `ClientDownload` route on request
//!
//! # Design Decisions
//! - One async handler per route; dependent calls are sequential
//! - Sub-resource presence is checked client-side, access levels server-side
//! - Reply routes always produce markup, whatever the quoted text's format

mod comment;
mod description;
mod file;
mod issue;

use crate::routing::{Gate, RouteConfigError, Router, RouterBuilder};

/// Route names.
pub mod names {
    pub const ISSUE_DETAILS: &str = "IssueDetails";
    pub const ISSUE_ITEM: &str = "IssueItem";
    pub const GO_TO_ITEM: &str = "GoToItem";
    pub const ITEM: &str = "Item";
    pub const EDIT_ISSUE: &str = "EditIssue";
    pub const ADD_ISSUE: &str = "AddIssue";
    pub const CLONE_ISSUE: &str = "CloneIssue";
    pub const MOVE_ISSUE: &str = "MoveIssue";
    pub const DELETE_ISSUE: &str = "DeleteIssue";
    pub const ADD_DESCRIPTION: &str = "AddDescription";
    pub const REPLY_DESCRIPTION: &str = "ReplyDescription";
    pub const EDIT_DESCRIPTION: &str = "EditDescription";
    pub const DELETE_DESCRIPTION: &str = "DeleteDescription";
    pub const ADD_COMMENT: &str = "AddComment";
    pub const REPLY_COMMENT: &str = "ReplyComment";
    pub const EDIT_COMMENT: &str = "EditComment";
    pub const DELETE_COMMENT: &str = "DeleteComment";
    pub const ADD_FILE: &str = "AddFile";
    pub const EDIT_FILE: &str = "EditFile";
    pub const DELETE_FILE: &str = "DeleteFile";
    pub const CLIENT_DOWNLOAD: &str = "ClientDownload";
}

/// Path parameter names.
pub mod params {
    pub const ISSUE_ID: &str = "issueId";
    pub const ITEM_ID: &str = "itemId";
    pub const TYPE_ID: &str = "typeId";
    pub const COMMENT_ID: &str = "commentId";
    pub const FILE_ID: &str = "fileId";
}

/// Which optional routes to register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Register `ClientDownload` (desktop shell only).
    pub client_download: bool,
}

/// Register the issue routes on `builder`.
pub fn register(builder: &mut RouterBuilder, options: RouteOptions) -> Result<(), RouteConfigError> {
    use Gate::{Authenticated, Public};

    builder
        .route(names::ISSUE_DETAILS, "/issues/:issueId", Public, issue::issue_details)?
        .route(names::ISSUE_ITEM, "/issues/:issueId/items/:itemId", Public, issue::issue_item)?
        .route(names::GO_TO_ITEM, "/items/goto", Public, issue::go_to_item)?
        .route(names::ITEM, "/items/:itemId", Public, issue::item)?
        .route(names::EDIT_ISSUE, "/issues/:issueId/edit", Authenticated, issue::edit_issue)?
        .route(names::ADD_ISSUE, "/types/:typeId/issues/add", Authenticated, issue::add_issue)?
        .route(names::CLONE_ISSUE, "/issues/:issueId/clone", Authenticated, issue::clone_issue)?
        .route(names::MOVE_ISSUE, "/issues/:issueId/move", Public, issue::move_issue)?
        .route(names::DELETE_ISSUE, "/issues/:issueId/delete", Public, issue::delete_issue)?
        .route(
            names::ADD_DESCRIPTION,
            "/issues/:issueId/description/add",
            Public,
            description::add_description,
        )?
        .route(
            names::REPLY_DESCRIPTION,
            "/issues/:issueId/description/reply",
            Authenticated,
            description::reply_description,
        )?
        .route(
            names::EDIT_DESCRIPTION,
            "/issues/:issueId/description/edit",
            Public,
            description::edit_description,
        )?
        .route(
            names::DELETE_DESCRIPTION,
            "/issues/:issueId/description/delete",
            Public,
            description::delete_description,
        )?
        .route(
            names::ADD_COMMENT,
            "/issues/:issueId/comments/add",
            Authenticated,
            comment::add_comment,
        )?
        .route(
            names::REPLY_COMMENT,
            "/issues/:issueId/comments/:commentId/reply",
            Authenticated,
            comment::reply_comment,
        )?
        .route(
            names::EDIT_COMMENT,
            "/issues/:issueId/comments/:commentId/edit",
            Public,
            comment::edit_comment,
        )?
        .route(
            names::DELETE_COMMENT,
            "/issues/:issueId/comments/:commentId/delete",
            Public,
            comment::delete_comment,
        )?
        .route(names::ADD_FILE, "/issues/:issueId/files/add", Authenticated, file::add_file)?
        .route(names::EDIT_FILE, "/issues/:issueId/files/:fileId/edit", Public, file::edit_file)?
        .route(
            names::DELETE_FILE,
            "/issues/:issueId/files/:fileId/delete",
            Public,
            file::delete_file,
        )?;

    if options.client_download {
        builder.route(
            names::CLIENT_DOWNLOAD,
            "/issues/:issueId/files/:fileId/download",
            Public,
            file::client_download,
        )?;
    }

    Ok(())
}

/// Build a router holding only the issue routes.
pub fn issue_router(options: RouteOptions) -> Result<Router, RouteConfigError> {
    let mut builder = Router::builder();
    register(&mut builder, options)?;
    Ok(builder.build())
}

/// Quote `text` under `header` in markup.
pub(crate) fn quote_block(header: &str, text: &str) -> String {
    format!("[quote {header}]\n{text}\n[/quote]\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_block() {
        assert_eq!(
            quote_block("Comment #3", "Hello"),
            "[quote Comment #3]\nHello\n[/quote]\n\n"
        );
    }

    #[test]
    fn test_client_download_is_optional() {
        let router = issue_router(RouteOptions::default()).unwrap();
        assert_eq!(router.len(), 20);
        assert!(router.get(names::CLIENT_DOWNLOAD).is_none());

        let router = issue_router(RouteOptions {
            client_download: true,
        })
        .unwrap();
        assert_eq!(router.len(), 21);
        assert!(router.get(names::CLIENT_DOWNLOAD).is_some());
    }

    #[test]
    fn test_registering_twice_fails() {
        let mut builder = Router::builder();
        register(&mut builder, RouteOptions::default()).unwrap();
        assert!(matches!(
            register(&mut builder, RouteOptions::default()),
            Err(RouteConfigError::DuplicateName(name)) if name == names::ISSUE_DETAILS
        ));
    }
}
