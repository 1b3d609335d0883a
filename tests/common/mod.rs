//! Shared utilities for route integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures_util::future::BoxFuture;
use serde_json::{json, Value};

use issue_routes::routes::{self, RouteOptions};
use issue_routes::routing::{Navigator, Router, Services};
use issue_routes::session::{
    AttributeKind, AttributeSchema, IssueStore, IssueType, Location, Session, SessionHandle,
    Settings, TextFormat,
};
use issue_routes::transport::{Endpoint, Transport, TransportError};

/// Backend double returning scripted payloads per endpoint.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<Endpoint, Result<Value, (i64, String)>>>,
    calls: Mutex<Vec<(Endpoint, Value)>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, endpoint: Endpoint, payload: Value) -> &Self {
        self.responses.lock().unwrap().insert(endpoint, Ok(payload));
        self
    }

    /// Fail `endpoint` with a server-side API error.
    pub fn fail(&self, endpoint: Endpoint, code: i64, message: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint, Err((code, message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<(Endpoint, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Body of the only call made to `endpoint`.
    pub fn body_of(&self, endpoint: Endpoint) -> Value {
        let calls: Vec<_> = self
            .calls()
            .into_iter()
            .filter(|(e, _)| *e == endpoint)
            .collect();
        assert_eq!(calls.len(), 1, "expected one call to {endpoint}");
        calls[0].1.clone()
    }
}

impl Transport for MockTransport {
    fn post(&self, endpoint: Endpoint, body: Value) -> BoxFuture<'_, Result<Value, TransportError>> {
        self.calls.lock().unwrap().push((endpoint, body));
        let response = self.responses.lock().unwrap().get(&endpoint).cloned();
        Box::pin(async move {
            match response {
                Some(Ok(payload)) => Ok(payload),
                Some(Err((code, message))) => Err(TransportError::Api { code, message }),
                None => Err(TransportError::Request {
                    endpoint,
                    message: "no scripted response".into(),
                }),
            }
        })
    }
}

/// Issue store double that records every call.
#[derive(Default)]
pub struct RecordingStore {
    current: Mutex<Option<u64>>,
    log: Mutex<Vec<String>>,
}

impl RecordingStore {
    pub fn holding(issue_id: u64) -> Arc<Self> {
        let store = Self::default();
        *store.current.lock().unwrap() = Some(issue_id);
        Arc::new(store)
    }

    pub fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl IssueStore for RecordingStore {
    fn issue_id(&self) -> Option<u64> {
        *self.current.lock().unwrap()
    }

    fn reset(&self, issue_id: u64) {
        *self.current.lock().unwrap() = Some(issue_id);
        self.log.lock().unwrap().push(format!("reset:{issue_id}"));
    }

    fn load(&self) -> BoxFuture<'_, Result<(), TransportError>> {
        self.log.lock().unwrap().push("load".into());
        Box::pin(async { Ok(()) })
    }
}

pub fn bug_type() -> IssueType {
    IssueType {
        id: 1,
        name: "Bugs".into(),
        attributes: vec![
            AttributeSchema {
                id: 10,
                name: "Severity".into(),
                kind: AttributeKind::Enum,
                default: Some("Medium".into()),
                required: true,
            },
            AttributeSchema {
                id: 11,
                name: "Assigned To".into(),
                kind: AttributeKind::User,
                default: Some("[Me]".into()),
                required: false,
            },
            AttributeSchema {
                id: 12,
                name: "Version".into(),
                kind: AttributeKind::Text,
                default: None,
                required: false,
            },
        ],
    }
}

pub fn anonymous_session() -> Session {
    Session {
        types: vec![bug_type()],
        ..Session::default()
    }
}

pub fn authenticated_session() -> Session {
    Session {
        authenticated: true,
        user_name: Some("jdoe".into()),
        server_uuid: Some("0f5e2c1a".into()),
        settings: Settings {
            default_format: TextFormat::PlainText,
        },
        types: vec![bug_type()],
        project: Some(Location {
            id: 3,
            name: "Tracker".into(),
        }),
        folder: Some(Location {
            id: 4,
            name: "Bugs".into(),
        }),
    }
}

pub fn issue_payload(id: u64, name: &str) -> Value {
    json!({
        "details": {
            "id": id,
            "name": name,
            "typeId": 1,
            "projectId": 3,
            "folderId": 4,
        }
    })
}

pub fn full_router() -> Arc<Router> {
    Arc::new(
        routes::issue_router(RouteOptions {
            client_download: true,
        })
        .unwrap(),
    )
}

pub fn services(session: Session, transport: Arc<MockTransport>) -> Services {
    Services::new(SessionHandle::new(session), transport)
}

pub fn navigator(session: Session, transport: Arc<MockTransport>) -> Navigator {
    Navigator::new(full_router(), services(session, transport))
}
