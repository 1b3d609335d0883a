//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Look up matching route for a path
//! - Return matched route or explicit no-match
//! - Run the gate, then the handler, inside a per-resolution span
//!
//! # Design Decisions
//! - Immutable after construction (shareable via Arc without locks)
//! - O(n) scan in registration order; first match wins
//! - Explicit NoMatch rather than silent default
//! - Duplicate names and malformed templates fail at registration

use futures_util::future::BoxFuture;
use std::fmt;
use std::future::Future;
use std::time::Instant;
use thiserror::Error;
use tracing::Instrument;
use uuid::Uuid;

use crate::observability::metrics;
use crate::outcome::{Outcome, ResolveError, ResolveResult};
use crate::routing::context::RouteContext;
use crate::routing::gate::Gate;
use crate::routing::pattern::{Pattern, PatternError};
use crate::routing::RouteParams;

/// Boxed future returned by a registered handler.
pub type HandlerFuture = BoxFuture<'static, ResolveResult<Outcome>>;

type Handler = Box<dyn Fn(RouteParams, RouteContext) -> HandlerFuture + Send + Sync>;

/// Errors raised while building the route table.
#[derive(Debug, Error)]
pub enum RouteConfigError {
    #[error("Duplicate route name '{0}'")]
    DuplicateName(String),

    #[error("Invalid pattern for route '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: PatternError,
    },
}

/// A registered route.
pub struct Route {
    name: String,
    pattern: Pattern,
    gate: Gate,
    handler: Handler,
}

impl Route {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn gate(&self) -> Gate {
        self.gate
    }

    pub(crate) async fn run(&self, params: RouteParams, ctx: RouteContext) -> ResolveResult<Outcome> {
        let resolution_id = Uuid::new_v4();
        let span = tracing::info_span!("resolve", route = %self.name, %resolution_id);
        let started = Instant::now();

        let result = async move {
            if let Err(e) = self.gate.check(&ctx.session) {
                tracing::info!(error_code = %e.error_code, "Authorization gate rejected resolution");
                return Err(ResolveError::from(e));
            }
            (self.handler)(params, ctx).await
        }
        .instrument(span.clone())
        .await;

        let label = match &result {
            Ok(outcome) => outcome.label(),
            Err(e) => e.kind(),
        };
        metrics::record_resolution(&self.name, label, started.elapsed());

        span.in_scope(|| match &result {
            Ok(Outcome::View(view)) => {
                tracing::debug!(component = view.component(), "Resolved view")
            }
            Ok(Outcome::Redirect(redirect)) => {
                tracing::debug!(target_route = %redirect.replace, "Resolved redirect")
            }
            Err(e) => tracing::warn!(error = %e, "Resolution failed"),
        });

        result
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("pattern", &self.pattern.template())
            .field("gate", &self.gate)
            .finish()
    }
}

/// A route selected for a path, with its captured parameters.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: RouteParams,
}

/// Accumulates routes in registration order.
#[derive(Debug, Default)]
pub struct RouterBuilder {
    routes: Vec<Route>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `template` under a unique `name`.
    pub fn route<F, Fut>(
        &mut self,
        name: &str,
        template: &str,
        gate: Gate,
        handler: F,
    ) -> Result<&mut Self, RouteConfigError>
    where
        F: Fn(RouteParams, RouteContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ResolveResult<Outcome>> + Send + 'static,
    {
        if self.routes.iter().any(|r| r.name == name) {
            return Err(RouteConfigError::DuplicateName(name.to_string()));
        }

        let pattern = Pattern::parse(template).map_err(|source| RouteConfigError::Pattern {
            name: name.to_string(),
            source,
        })?;

        self.routes.push(Route {
            name: name.to_string(),
            pattern,
            gate,
            handler: Box::new(move |params: RouteParams, ctx: RouteContext| -> HandlerFuture {
                Box::pin(handler(params, ctx))
            }),
        });
        Ok(self)
    }

    pub fn build(self) -> Router {
        tracing::debug!(routes = self.routes.len(), "Route table compiled");
        Router {
            routes: self.routes,
        }
    }
}

/// Immutable route table.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// First route whose pattern matches `path`.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            route
                .pattern
                .matches(path)
                .map(|params| RouteMatch { route, params })
        })
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Route names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Path for a named route.
    pub fn url_for(&self, name: &str, params: &RouteParams) -> Option<String> {
        self.get(name)?.pattern.format(params)
    }

    /// Resolve `path` and run its route.
    pub async fn dispatch(&self, path: &str, ctx: RouteContext) -> ResolveResult<Outcome> {
        let Some(RouteMatch { route, params }) = self.resolve(path) else {
            tracing::debug!(path, "No route matched");
            return Err(ResolveError::NotFound(path.to_string()));
        };
        route.run(params, ctx).await
    }

    /// Run a route by name with caller-supplied parameters.
    pub async fn dispatch_named(
        &self,
        name: &str,
        params: RouteParams,
        ctx: RouteContext,
    ) -> ResolveResult<Outcome> {
        let route = self
            .get(name)
            .ok_or_else(|| ResolveError::UnknownRoute(name.to_string()))?;
        route.run(params, ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::ViewDescriptor;

    async fn details(_params: RouteParams, _ctx: RouteContext) -> ResolveResult<Outcome> {
        Ok(Outcome::View(ViewDescriptor::IssueDetails))
    }

    async fn goto(_params: RouteParams, _ctx: RouteContext) -> ResolveResult<Outcome> {
        Ok(Outcome::View(ViewDescriptor::GoToItem))
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut builder = Router::builder();
        builder.route("A", "/a", Gate::Public, details).unwrap();
        let err = builder.route("A", "/b", Gate::Public, details).unwrap_err();
        assert!(matches!(err, RouteConfigError::DuplicateName(name) if name == "A"));
    }

    #[test]
    fn test_bad_template_rejected() {
        let mut builder = Router::builder();
        let err = builder
            .route("Bad", "/x/:id/y/:id", Gate::Public, details)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid pattern for route 'Bad': parameter 'id' appears more than once in '/x/:id/y/:id'"
        );
    }

    #[test]
    fn test_first_match_wins() {
        let mut builder = Router::builder();
        builder
            .route("GoToItem", "/items/goto", Gate::Public, goto)
            .unwrap()
            .route("Item", "/items/:itemId", Gate::Public, details)
            .unwrap();
        let router = builder.build();

        assert_eq!(router.resolve("/items/goto").unwrap().route.name(), "GoToItem");
        let m = router.resolve("/items/12").unwrap();
        assert_eq!(m.route.name(), "Item");
        assert_eq!(m.params.get("itemId"), Some("12"));
        assert!(router.resolve("/projects/1").is_none());
    }

    #[test]
    fn test_url_for() {
        let mut builder = Router::builder();
        builder
            .route("IssueItem", "/issues/:issueId/items/:itemId", Gate::Public, details)
            .unwrap();
        let router = builder.build();

        let params = RouteParams::new().with("issueId", 1).with("itemId", 2);
        assert_eq!(router.url_for("IssueItem", &params).as_deref(), Some("/issues/1/items/2"));
        assert!(router.url_for("Missing", &params).is_none());
        assert_eq!(router.names().collect::<Vec<_>>(), vec!["IssueItem"]);
    }
}
