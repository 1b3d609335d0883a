//! Comment routes.

use crate::i18n::keys;
use crate::outcome::{FormMode, Outcome, ResolveResult, ViewDescriptor};
use crate::routes::params::{COMMENT_ID, ISSUE_ID};
use crate::routes::quote_block;
use crate::routing::{RouteContext, RouteParams};
use crate::session::TextFormat;
use crate::transport::types::{Access, IssueData, LoadComment, LoadIssue};

pub(crate) async fn add_comment(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let IssueData { details, .. } = ctx.api.load_issue(LoadIssue::new(issue_id)).await?;

    Ok(ViewDescriptor::EditComment {
        mode: FormMode::Add,
        issue_id,
        comment_id: None,
        issue_name: Some(details.name),
        initial_comment: None,
        initial_format: ctx.session.settings.default_format,
    }
    .into())
}

/// Loads the issue, then the quoted comment.
pub(crate) async fn reply_comment(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let comment_id = params.id(COMMENT_ID)?;

    let IssueData { details, .. } = ctx.api.load_issue(LoadIssue::new(issue_id)).await?;
    let comment = ctx
        .api
        .load_comment(LoadComment::new(issue_id, comment_id))
        .await?;

    let reference = format!("#{comment_id}");
    let header = ctx.i18n.translate(keys::COMMENT_QUOTE, &[reference.as_str()]);

    Ok(ViewDescriptor::EditComment {
        mode: FormMode::Add,
        issue_id,
        comment_id: None,
        issue_name: Some(details.name),
        initial_comment: Some(quote_block(&header, &comment.text)),
        initial_format: TextFormat::TextWithMarkup,
    }
    .into())
}

pub(crate) async fn edit_comment(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let comment_id = params.id(COMMENT_ID)?;
    let comment = ctx
        .api
        .load_comment(LoadComment::new(issue_id, comment_id).with_access(Access::AdminOrOwner))
        .await?;

    Ok(ViewDescriptor::EditComment {
        mode: FormMode::Edit,
        issue_id,
        comment_id: Some(comment_id),
        issue_name: None,
        initial_comment: Some(comment.text),
        initial_format: comment.format,
    }
    .into())
}

pub(crate) async fn delete_comment(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let comment_id = params.id(COMMENT_ID)?;
    ctx.api
        .load_comment(LoadComment::new(issue_id, comment_id).with_access(Access::AdminOrOwner))
        .await?;

    Ok(ViewDescriptor::DeleteComment {
        issue_id,
        comment_id,
    }
    .into())
}
