//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the transport from validated configuration
//! - Compile the route table (desktop routes only when configured)
//! - Assemble services and the navigator
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently

use std::sync::Arc;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::desktop::DirectoryLocator;
use crate::i18n::Catalog;
use crate::routes::{self, RouteOptions};
use crate::routing::{Navigator, RouteConfigError, Services};
use crate::session::SessionHandle;
use crate::transport::{HttpTransport, Transport, TransportError};

/// Errors that prevent the resolver from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Route table error: {0}")]
    Routes(#[from] RouteConfigError),

    #[error("Transport setup failed: {0}")]
    Transport(#[from] TransportError),
}

/// Build a navigator talking to the configured server over HTTP.
pub fn build_navigator(config: &ClientConfig, session: SessionHandle) -> Result<Navigator, StartupError> {
    let transport = Arc::new(HttpTransport::new(&config.server)?);
    build_navigator_with(config, session, transport)
}

/// Build a navigator over an arbitrary transport.
pub fn build_navigator_with(
    config: &ClientConfig,
    session: SessionHandle,
    transport: Arc<dyn Transport>,
) -> Result<Navigator, StartupError> {
    let options = RouteOptions {
        client_download: config.desktop.enabled(),
    };
    let router = routes::issue_router(options)?;

    let mut services = Services::new(session, transport)
        .with_translator(Arc::new(Catalog::with_overrides(&config.i18n.messages)));
    if let Some(dir) = &config.desktop.attachments_dir {
        services = services.with_attachments(Arc::new(DirectoryLocator::new(dir)));
    }

    tracing::info!(
        routes = router.len(),
        base_url = %config.server.base_url,
        client_download = options.client_download,
        "Route resolver ready"
    );

    Ok(Navigator::new(Arc::new(router), services).with_max_redirects(config.navigation.max_redirects))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_over_http() {
        let navigator = build_navigator(&ClientConfig::default(), SessionHandle::default()).unwrap();
        assert_eq!(navigator.router().len(), 20);
    }

    #[test]
    fn test_desktop_config_adds_download_route() {
        let mut config = ClientConfig::default();
        config.desktop.attachments_dir = Some(std::env::temp_dir());
        let navigator = build_navigator(&config, SessionHandle::default()).unwrap();
        assert!(navigator.router().get(routes::names::CLIENT_DOWNLOAD).is_some());
    }
}
