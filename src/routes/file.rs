//! Attachment routes.

use crate::outcome::{FormMode, Outcome, ResolveResult, ViewDescriptor};
use crate::routes::params::{FILE_ID, ISSUE_ID};
use crate::routing::{RouteContext, RouteParams};
use crate::transport::types::{Access, IssueData, LoadFile, LoadIssue};

pub(crate) async fn add_file(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let IssueData { details, .. } = ctx.api.load_issue(LoadIssue::new(issue_id)).await?;

    Ok(ViewDescriptor::EditFile {
        mode: FormMode::Add,
        issue_id,
        file_id: None,
        issue_name: Some(details.name),
        initial_name: None,
        initial_description: None,
    }
    .into())
}

pub(crate) async fn edit_file(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let file_id = params.id(FILE_ID)?;
    let file = ctx
        .api
        .load_file(LoadFile::new(issue_id, file_id).with_access(Access::AdminOrOwner))
        .await?;

    Ok(ViewDescriptor::EditFile {
        mode: FormMode::Edit,
        issue_id,
        file_id: Some(file_id),
        issue_name: None,
        initial_name: Some(file.name),
        initial_description: Some(file.description),
    }
    .into())
}

pub(crate) async fn delete_file(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let file_id = params.id(FILE_ID)?;
    let file = ctx
        .api
        .load_file(LoadFile::new(issue_id, file_id).with_access(Access::AdminOrOwner))
        .await?;

    Ok(ViewDescriptor::DeleteFile {
        issue_id,
        file_id,
        name: file.name,
    }
    .into())
}

/// Desktop download dialog; pre-fills the path of an earlier download.
pub(crate) async fn client_download(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let file_id = params.id(FILE_ID)?;
    let file = ctx.api.load_file(LoadFile::new(issue_id, file_id)).await?;

    let initial_path = match (&ctx.attachments, ctx.session.server_uuid.as_deref()) {
        (Some(locator), Some(server_uuid)) => locator.find_attachment(server_uuid, file_id).await?,
        _ => None,
    };

    Ok(ViewDescriptor::ClientDownload {
        issue_id,
        file_id,
        name: file.name,
        total: file.total,
        file_size: file.size,
        initial_path,
    }
    .into())
}
