//! Navigation driver that follows redirect instructions.

use serde::{Serialize, Serializer};
use std::sync::Arc;

use crate::outcome::{Outcome, ResolveError, ResolveResult, ViewDescriptor};
use crate::routing::context::Services;
use crate::routing::router::{RouteMatch, Router};
use crate::routing::RouteParams;

/// Default bound on redirect chains.
pub const DEFAULT_MAX_REDIRECTS: usize = 4;

/// The route finally rendered after following redirects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved {
    pub route: String,
    pub params: RouteParams,
    #[serde(serialize_with = "serialize_view")]
    pub view: ViewDescriptor,
}

/// Same wire form as [`ViewDescriptor::to_json`], size hint included.
fn serialize_view<S: Serializer>(view: &ViewDescriptor, serializer: S) -> Result<S::Ok, S::Error> {
    view.to_json()
        .map_err(serde::ser::Error::custom)?
        .serialize(serializer)
}

/// Resolves paths against a router using shared services.
#[derive(Clone)]
pub struct Navigator {
    router: Arc<Router>,
    services: Services,
    max_redirects: usize,
}

impl Navigator {
    pub fn new(router: Arc<Router>, services: Services) -> Self {
        Self {
            router,
            services,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Resolve a path once, returning redirects to the caller.
    pub async fn resolve(&self, path: &str) -> ResolveResult<Outcome> {
        self.router.dispatch(path, self.services.context()).await
    }

    /// Resolve a path, following redirects until a view is produced.
    ///
    /// The whole chain sees the same session snapshot.
    pub async fn navigate(&self, path: &str) -> ResolveResult<Resolved> {
        let ctx = self.services.context();

        let Some(RouteMatch { route, params }) = self.router.resolve(path) else {
            return Err(ResolveError::NotFound(path.to_string()));
        };

        let mut name = route.name().to_string();
        let mut params = params;
        let mut outcome = route.run(params.clone(), ctx.clone()).await?;
        let mut hops = 0;

        loop {
            match outcome {
                Outcome::View(view) => {
                    return Ok(Resolved {
                        route: name,
                        params,
                        view,
                    })
                }
                Outcome::Redirect(redirect) => {
                    hops += 1;
                    if hops > self.max_redirects {
                        return Err(ResolveError::TooManyRedirects(self.max_redirects));
                    }
                    tracing::debug!(from = %name, to = %redirect.replace, hops, "Following redirect");

                    name = redirect.replace;
                    params = redirect.params;
                    outcome = self
                        .router
                        .dispatch_named(&name, params.clone(), ctx.clone())
                        .await?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::RedirectInstruction;
    use crate::routing::{Gate, RouteContext};
    use crate::session::SessionHandle;
    use crate::transport::{Endpoint, Transport, TransportError};
    use futures_util::future::BoxFuture;
    use serde_json::Value;

    struct Offline;

    impl Transport for Offline {
        fn post(&self, endpoint: Endpoint, _body: Value) -> BoxFuture<'_, Result<Value, TransportError>> {
            Box::pin(async move {
                Err(TransportError::Request {
                    endpoint,
                    message: "offline".into(),
                })
            })
        }
    }

    async fn bounce(params: RouteParams, _ctx: RouteContext) -> ResolveResult<Outcome> {
        Ok(RedirectInstruction::new("Bounce")
            .param("n", params.id("n")? + 1)
            .into())
    }

    async fn forward(_params: RouteParams, _ctx: RouteContext) -> ResolveResult<Outcome> {
        Ok(RedirectInstruction::new("Target").param("id", 5).into())
    }

    async fn target(_params: RouteParams, _ctx: RouteContext) -> ResolveResult<Outcome> {
        Ok(ViewDescriptor::GoToItem.into())
    }

    fn navigator() -> Navigator {
        let mut builder = Router::builder();
        builder
            .route("Bounce", "/bounce/:n", Gate::Public, bounce)
            .unwrap()
            .route("Forward", "/forward", Gate::Public, forward)
            .unwrap()
            .route("Target", "/target/:id", Gate::Public, target)
            .unwrap();
        let services = Services::new(SessionHandle::default(), Arc::new(Offline));
        Navigator::new(Arc::new(builder.build()), services)
    }

    #[tokio::test]
    async fn test_follows_redirect() {
        let resolved = navigator().navigate("/forward").await.unwrap();
        assert_eq!(resolved.route, "Target");
        assert_eq!(resolved.params.get("id"), Some("5"));
        assert_eq!(resolved.view, ViewDescriptor::GoToItem);
    }

    #[tokio::test]
    async fn test_resolve_does_not_follow() {
        let outcome = navigator().resolve("/forward").await.unwrap();
        assert!(matches!(outcome, Outcome::Redirect(r) if r.replace == "Target"));
    }

    #[tokio::test]
    async fn test_redirect_limit() {
        let err = navigator()
            .with_max_redirects(3)
            .navigate("/bounce/0")
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::TooManyRedirects(3)));
    }

    #[tokio::test]
    async fn test_not_found() {
        let err = navigator().navigate("/nowhere").await.unwrap_err();
        assert!(matches!(err, ResolveError::NotFound(path) if path == "/nowhere"));
    }
}
