//! Typed wrapper over the issues backend.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::transport::types::{CommentData, FileData, FindItem, IssueData, LoadComment, LoadFile, LoadIssue};
use crate::transport::{Endpoint, Transport, TransportError};

/// Issues API client.
#[derive(Clone)]
pub struct IssuesApi {
    transport: Arc<dyn Transport>,
}

impl IssuesApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Look up the issue that owns an item (issue, comment or file).
    pub async fn find_item(&self, item_id: u64) -> Result<u64, TransportError> {
        self.call(Endpoint::FindItem, &FindItem { item_id }).await
    }

    pub async fn load_issue(&self, request: LoadIssue) -> Result<IssueData, TransportError> {
        self.call(Endpoint::LoadIssue, &request).await
    }

    pub async fn load_comment(&self, request: LoadComment) -> Result<CommentData, TransportError> {
        self.call(Endpoint::LoadComment, &request).await
    }

    pub async fn load_file(&self, request: LoadFile) -> Result<FileData, TransportError> {
        self.call(Endpoint::LoadFile, &request).await
    }

    async fn call<Req, Resp>(&self, endpoint: Endpoint, request: &Req) -> Result<Resp, TransportError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_value(request)
            .map_err(|source| TransportError::Encode { endpoint, source })?;

        tracing::debug!(%endpoint, "Issuing backend request");
        let payload = self.transport.post(endpoint, body).await?;

        serde_json::from_value(payload).map_err(|source| TransportError::Decode { endpoint, source })
    }
}

impl std::fmt::Debug for IssuesApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuesApi").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::BoxFuture;
    use serde_json::{json, Value};

    struct Fixed(Value);

    impl Transport for Fixed {
        fn post(&self, _endpoint: Endpoint, _body: Value) -> BoxFuture<'_, Result<Value, TransportError>> {
            let payload = self.0.clone();
            Box::pin(async move { Ok(payload) })
        }
    }

    #[tokio::test]
    async fn test_find_item_decodes_bare_id() {
        let api = IssuesApi::new(Arc::new(Fixed(json!(31))));
        assert_eq!(api.find_item(35).await.unwrap(), 31);
    }

    #[tokio::test]
    async fn test_decode_error_names_endpoint() {
        let api = IssuesApi::new(Arc::new(Fixed(json!({ "unexpected": true }))));
        let err = api.load_comment(LoadComment::new(1, 2)).await.unwrap_err();
        match err {
            TransportError::Decode { endpoint, .. } => assert_eq!(endpoint, Endpoint::LoadComment),
            other => panic!("unexpected error: {other}"),
        }
    }
}
