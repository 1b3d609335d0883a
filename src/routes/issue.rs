//! Issue routes: details, item lookup and the issue forms.

use crate::outcome::{ErrorCode, IssueFormMode, Outcome, RedirectInstruction, ResolveResult, ViewDescriptor};
use crate::routes::names;
use crate::routes::params::{ISSUE_ID, ITEM_ID, TYPE_ID};
use crate::routing::{RouteContext, RouteParams};
use crate::transport::types::{Access, AttributeValue, IssueData, LoadIssue};

/// Select `issue_id` in the issue store and reload it.
///
/// Re-entering the issue already held skips the reset so its cached state
/// stays visible while reloading.
pub(crate) async fn load_issue_details(ctx: &RouteContext, issue_id: u64) -> ResolveResult<Outcome> {
    if ctx.issue.issue_id() != Some(issue_id) {
        ctx.issue.reset(issue_id);
    }
    ctx.issue.load().await?;
    Ok(ViewDescriptor::IssueDetails.into())
}

pub(crate) async fn issue_details(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    load_issue_details(&ctx, issue_id).await
}

pub(crate) async fn issue_item(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    params.id(ITEM_ID)?;
    load_issue_details(&ctx, issue_id).await
}

pub(crate) async fn go_to_item(_params: RouteParams, _ctx: RouteContext) -> ResolveResult<Outcome> {
    Ok(ViewDescriptor::GoToItem.into())
}

/// Redirect a bare item id to the issue (or the item within its issue).
pub(crate) async fn item(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let item_id = params.id(ITEM_ID)?;
    let issue_id = ctx.api.find_item(item_id).await?;

    let redirect = if issue_id == item_id {
        RedirectInstruction::new(names::ISSUE_DETAILS).param(ISSUE_ID, issue_id)
    } else {
        RedirectInstruction::new(names::ISSUE_ITEM)
            .param(ISSUE_ID, issue_id)
            .param(ITEM_ID, item_id)
    };
    Ok(redirect.into())
}

pub(crate) async fn edit_issue(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let IssueData {
        details,
        attributes,
        ..
    } = ctx
        .api
        .load_issue(LoadIssue::new(issue_id).with_attributes())
        .await?;

    Ok(ViewDescriptor::EditIssue {
        mode: IssueFormMode::Edit,
        issue_id: Some(issue_id),
        type_id: details.type_id,
        initial_project_id: Some(details.project_id),
        initial_folder_id: None,
        initial_name: Some(details.name),
        attributes: attributes.unwrap_or_default(),
        initial_description: None,
        initial_format: None,
    }
    .into())
}

/// New issue form; defaults come from the type schema, not the server.
pub(crate) async fn add_issue(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    // No server call backs this route, so an unusable id is an unknown type.
    let type_id = params.id(TYPE_ID).map_err(|_| ErrorCode::UnknownType)?;
    let issue_type = ctx
        .session
        .find_type(type_id)
        .ok_or(ErrorCode::UnknownType)?;

    let attributes = issue_type
        .attributes
        .iter()
        .map(|attribute| AttributeValue {
            id: attribute.id,
            name: attribute.name.clone(),
            value: ctx
                .parser
                .convert_initial_value(attribute.default.as_deref(), attribute),
        })
        .collect();

    Ok(ViewDescriptor::EditIssue {
        mode: IssueFormMode::Add,
        issue_id: None,
        type_id,
        initial_project_id: ctx.session.project_id(),
        initial_folder_id: ctx.session.folder_id(),
        initial_name: None,
        attributes,
        initial_description: None,
        initial_format: Some(ctx.session.settings.default_format),
    }
    .into())
}

pub(crate) async fn clone_issue(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let IssueData {
        details,
        description,
        attributes,
    } = ctx
        .api
        .load_issue(LoadIssue::new(issue_id).with_description().with_attributes())
        .await?;

    let (initial_description, initial_format) = match description {
        Some(description) => (Some(description.text), description.format),
        None => (None, ctx.session.settings.default_format),
    };

    Ok(ViewDescriptor::EditIssue {
        mode: IssueFormMode::Clone,
        issue_id: Some(issue_id),
        type_id: details.type_id,
        initial_project_id: Some(details.project_id),
        initial_folder_id: Some(details.folder_id),
        initial_name: Some(details.name),
        attributes: attributes.unwrap_or_default(),
        initial_description,
        initial_format: Some(initial_format),
    }
    .into())
}

pub(crate) async fn move_issue(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let IssueData { details, .. } = ctx
        .api
        .load_issue(LoadIssue::new(issue_id).with_access(Access::Admin))
        .await?;

    Ok(ViewDescriptor::MoveIssue {
        issue_id,
        type_id: details.type_id,
        initial_project_id: details.project_id,
        initial_folder_id: details.folder_id,
        name: details.name,
    }
    .into())
}

pub(crate) async fn delete_issue(params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
    let issue_id = params.id(ISSUE_ID)?;
    let IssueData { details, .. } = ctx
        .api
        .load_issue(LoadIssue::new(issue_id).with_access(Access::Admin))
        .await?;

    Ok(ViewDescriptor::DeleteIssue {
        issue_id,
        name: details.name,
    }
    .into())
}
