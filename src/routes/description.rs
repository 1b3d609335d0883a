//! Description routes.

use crate::i18n::keys;
use crate::outcome::{ErrorCode, FormMode, Outcome, ResolveResult, ViewDescriptor};
use crate::routes::params::ISSUE_ID;
use crate::routes::quote_block;
use crate::routing::{RouteContext, RouteParams};
use crate::session::TextFormat;
use crate::transport::types::{Access, Description, IssueData, LoadIssue};

async fn load_with_description(
    ctx: &RouteContext,
    issue_id: u64,
    access: Option<Access>,
) -> ResolveResult<IssueData> {
    let mut request = LoadIssue::new(issue_id).with_description();
    request.access = access;
    Ok(ctx.api.load_issue(request).await?)
}

fn require_description(description: Option<Description>) -> ResolveResult<Description> {
    description.ok_or_else(|| ErrorCode::UnknownDescription.into())
}

pub(crate) async fn add_description(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let IssueData {
        details,
        description,
        ..
    } = load_with_description(&ctx, issue_id, Some(Access::AdminOrOwner)).await?;

    if description.is_some() {
        return Err(ErrorCode::DescriptionAlreadyExists.into());
    }

    Ok(ViewDescriptor::EditDescription {
        mode: FormMode::Add,
        issue_id,
        issue_name: details.name,
        initial_description: None,
        initial_format: ctx.session.settings.default_format,
    }
    .into())
}

pub(crate) async fn reply_description(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let IssueData {
        details,
        description,
        ..
    } = load_with_description(&ctx, issue_id, None).await?;
    let description = require_description(description)?;

    let header = ctx.i18n.translate(keys::DESCRIPTION_QUOTE, &[]);

    Ok(ViewDescriptor::EditComment {
        mode: FormMode::Add,
        issue_id,
        comment_id: None,
        issue_name: Some(details.name),
        initial_comment: Some(quote_block(&header, &description.text)),
        initial_format: TextFormat::TextWithMarkup,
    }
    .into())
}

pub(crate) async fn edit_description(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let IssueData {
        details,
        description,
        ..
    } = load_with_description(&ctx, issue_id, Some(Access::AdminOrOwner)).await?;
    let description = require_description(description)?;

    Ok(ViewDescriptor::EditDescription {
        mode: FormMode::Edit,
        issue_id,
        issue_name: details.name,
        initial_description: Some(description.text),
        initial_format: description.format,
    }
    .into())
}

pub(crate) async fn delete_description(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let IssueData {
        details,
        description,
        ..
    } = load_with_description(&ctx, issue_id, Some(Access::AdminOrOwner)).await?;
    require_description(description)?;

    Ok(ViewDescriptor::DeleteDescription {
        issue_id,
        issue_name: details.name,
    }
    .into())
}
