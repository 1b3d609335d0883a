//! Collaborators handed to route handlers.
//!
//! `Services` lives for the process; `RouteContext` is a per-resolution view
//! of it with the session frozen at the moment resolution started.

use std::sync::Arc;

use crate::desktop::AttachmentLocator;
use crate::i18n::{Catalog, Translator};
use crate::session::{DefaultValueParser, IssueCache, IssueStore, Session, SessionHandle, ValueParser};
use crate::transport::{IssuesApi, Transport};

/// Everything a handler may read or call during one resolution.
#[derive(Clone)]
pub struct RouteContext {
    pub session: Arc<Session>,
    pub api: IssuesApi,
    pub issue: Arc<dyn IssueStore>,
    pub i18n: Arc<dyn Translator>,
    pub parser: Arc<dyn ValueParser>,
    pub attachments: Option<Arc<dyn AttachmentLocator>>,
}

/// Long-lived collaborators shared by all resolutions.
#[derive(Clone)]
pub struct Services {
    session: SessionHandle,
    api: IssuesApi,
    issue: Arc<dyn IssueStore>,
    i18n: Arc<dyn Translator>,
    parser: Arc<dyn ValueParser>,
    attachments: Option<Arc<dyn AttachmentLocator>>,
}

impl Services {
    /// Services with the bundled issue cache, message catalog and value parser.
    pub fn new(session: SessionHandle, transport: Arc<dyn Transport>) -> Self {
        let api = IssuesApi::new(transport);
        Self {
            issue: Arc::new(IssueCache::new(api.clone())),
            i18n: Arc::new(Catalog::default()),
            parser: Arc::new(DefaultValueParser::new(session.clone())),
            attachments: None,
            session,
            api,
        }
    }

    pub fn with_issue_store(mut self, issue: Arc<dyn IssueStore>) -> Self {
        self.issue = issue;
        self
    }

    pub fn with_translator(mut self, i18n: Arc<dyn Translator>) -> Self {
        self.i18n = i18n;
        self
    }

    pub fn with_parser(mut self, parser: Arc<dyn ValueParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_attachments(mut self, attachments: Arc<dyn AttachmentLocator>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub fn issue_store(&self) -> &Arc<dyn IssueStore> {
        &self.issue
    }

    /// Snapshot the session and assemble a handler context.
    pub fn context(&self) -> RouteContext {
        RouteContext {
            session: self.session.snapshot(),
            api: self.api.clone(),
            issue: Arc::clone(&self.issue),
            i18n: Arc::clone(&self.i18n),
            parser: Arc::clone(&self.parser),
            attachments: self.attachments.clone(),
        }
    }
}
