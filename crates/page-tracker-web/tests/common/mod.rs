//! Counter store stubs shared by the route tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;

use page_tracker_core::error::{PageTrackerError, Result};
use page_tracker_web::{app_state::AppState, router, store::CounterStore};

/// Replays a fixed script of replies, one per call.
#[derive(Default)]
pub struct ScriptedStore {
    replies: Mutex<VecDeque<Result<i64>>>,
    keys: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedStore {
    pub fn new(replies: impl IntoIterator<Item = Result<i64>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

#[async_trait]
impl CounterStore for ScriptedStore {
    async fn incr(&self, key: &str) -> Result<i64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.keys.lock().unwrap().push(key.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PageTrackerError::StoreUnavailable("script exhausted".into())))
    }
}

/// In-memory store with INCR semantics: a missing key counts as 0.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, i64>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set(&self, key: &str, value: i64) {
        self.values.lock().unwrap().insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.values.lock().unwrap().get(key).copied()
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn incr(&self, key: &str) -> Result<i64> {
        let mut values = self.values.lock().unwrap();
        let v = values.entry(key.to_string()).or_insert(0);
        *v += 1;
        Ok(*v)
    }
}

pub fn server(store: Arc<dyn CounterStore>) -> TestServer {
    let app = router::build_router(AppState::with_store(store));
    TestServer::new(app).unwrap()
}

pub fn refused() -> PageTrackerError {
    PageTrackerError::StoreUnavailable("connection refused: Connection refused (os error 111)".into())
}
