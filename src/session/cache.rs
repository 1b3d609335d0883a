//! Currently loaded issue.
//!
//! # State Transitions
//! ```text
//! reset(id):  (old_id, data, gen) → (id, None, gen + 1)   single atomic store
//! load():     fetch issue for the current id, install data only if gen unchanged
//! ```

use arc_swap::ArcSwap;
use futures_util::future::BoxFuture;
use std::sync::Arc;

use crate::transport::api::IssuesApi;
use crate::transport::types::{IssueData, LoadIssue};
use crate::transport::TransportError;

/// Narrow mutable capability over the loaded-issue slot.
pub trait IssueStore: Send + Sync {
    /// Identifier of the issue currently held, if any.
    fn issue_id(&self) -> Option<u64>;

    /// Clear cached state and select `issue_id` in one step.
    fn reset(&self, issue_id: u64);

    /// Reload the selected issue.
    fn load(&self) -> BoxFuture<'_, Result<(), TransportError>>;
}

/// Contents of the slot.
#[derive(Debug, Clone, Default)]
pub struct IssueSlot {
    pub issue_id: Option<u64>,
    pub data: Option<Arc<IssueData>>,
    pub generation: u64,
}

/// [`IssueStore`] that reloads through the issues API.
pub struct IssueCache {
    api: IssuesApi,
    slot: ArcSwap<IssueSlot>,
}

impl IssueCache {
    pub fn new(api: IssuesApi) -> Self {
        Self {
            api,
            slot: ArcSwap::from_pointee(IssueSlot::default()),
        }
    }

    pub fn slot(&self) -> Arc<IssueSlot> {
        self.slot.load_full()
    }

    pub fn data(&self) -> Option<Arc<IssueData>> {
        self.slot.load().data.clone()
    }

    /// Incremented on every reset.
    pub fn generation(&self) -> u64 {
        self.slot.load().generation
    }
}

impl IssueStore for IssueCache {
    fn issue_id(&self) -> Option<u64> {
        self.slot.load().issue_id
    }

    fn reset(&self, issue_id: u64) {
        let previous = self.slot.rcu(|current| IssueSlot {
            issue_id: Some(issue_id),
            data: None,
            generation: current.generation + 1,
        });
        tracing::debug!(
            previous = ?previous.issue_id,
            issue_id,
            "Issue cache reset"
        );
    }

    fn load(&self) -> BoxFuture<'_, Result<(), TransportError>> {
        // Pinned to the selection at call time, not at first poll.
        let requested = self.slot.load_full();
        Box::pin(async move {
            let Some(issue_id) = requested.issue_id else {
                return Ok(());
            };

            let request = LoadIssue::new(issue_id)
                .with_description()
                .with_attributes();
            let data = Arc::new(self.api.load_issue(request).await?);

            let previous = self.slot.rcu(|current| {
                if current.generation == requested.generation {
                    Arc::new(IssueSlot {
                        data: Some(Arc::clone(&data)),
                        ..IssueSlot::clone(current)
                    })
                } else {
                    Arc::clone(current)
                }
            });

            if previous.generation != requested.generation {
                tracing::debug!(issue_id, "Discarding stale issue reload");
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{Endpoint, Transport};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct Scripted {
        calls: Mutex<Vec<Value>>,
    }

    impl Transport for Scripted {
        fn post(&self, _endpoint: Endpoint, body: Value) -> BoxFuture<'_, Result<Value, TransportError>> {
            let issue_id = body["issueId"].as_u64().unwrap_or_default();
            self.calls.lock().unwrap().push(body);
            Box::pin(async move {
                Ok(json!({
                    "details": { "id": issue_id, "name": format!("Issue {issue_id}"), "typeId": 1, "projectId": 1, "folderId": 1 },
                    "description": null,
                    "attributes": []
                }))
            })
        }
    }

    fn cache() -> (IssueCache, Arc<Scripted>) {
        let transport = Arc::new(Scripted { calls: Mutex::new(Vec::new()) });
        (IssueCache::new(IssuesApi::new(transport.clone())), transport)
    }

    #[tokio::test]
    async fn test_reset_then_load() {
        let (cache, transport) = cache();
        assert_eq!(cache.issue_id(), None);

        cache.reset(12);
        assert_eq!(cache.issue_id(), Some(12));
        assert_eq!(cache.generation(), 1);
        assert!(cache.data().is_none());

        cache.load().await.unwrap();
        assert_eq!(cache.data().unwrap().details.name, "Issue 12");

        let calls = transport.calls.lock().unwrap();
        assert_eq!(calls[0], json!({ "issueId": 12, "description": true, "attributes": true }));
    }

    #[tokio::test]
    async fn test_load_without_selection_is_noop() {
        let (cache, transport) = cache();
        cache.load().await.unwrap();
        assert!(transport.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stale_reload_discarded() {
        let (cache, _) = cache();
        cache.reset(1);
        let pending = cache.load();
        cache.reset(2);
        pending.await.unwrap();

        let slot = cache.slot();
        assert_eq!(slot.issue_id, Some(2));
        assert!(slot.data.is_none());
    }
}
