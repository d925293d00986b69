//! In-process repositories for exercising hooks without a data service.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use payloads::ClientError;
use reqwest::StatusCode;
use tokio::sync::Semaphore;

use crate::repositories::Repository;

pub(crate) fn api_error(status: StatusCode, message: &str) -> ClientError {
    ClientError::APIError(status, message.to_string())
}

type MakeRow<Row, Create> = Box<dyn Fn(&Create, usize) -> Row + Send + Sync>;

/// Serves canned rows, fails on demand and, when gated, holds every call
/// until the test hands out a permit.
pub(crate) struct ScriptedRepo<Row, Create> {
    rows: Mutex<Vec<Row>>,
    failures: Mutex<VecDeque<ClientError>>,
    gate: Option<Arc<Semaphore>>,
    list_calls: AtomicUsize,
    make_row: MakeRow<Row, Create>,
}

impl<Row: 'static, Create: 'static> ScriptedRepo<Row, Create>
where
    Create: Clone + Into<Row>,
{
    pub(crate) fn new(rows: Vec<Row>) -> Self {
        Self::with_factory(rows, |payload: &Create, _| payload.clone().into())
    }
}

impl<Row: 'static, Create: 'static> ScriptedRepo<Row, Create> {
    /// `make_row` receives the payload and the id the new row should get.
    pub(crate) fn with_factory(
        rows: Vec<Row>,
        make_row: impl Fn(&Create, usize) -> Row + Send + Sync + 'static,
    ) -> Self {
        Self {
            rows: Mutex::new(rows),
            failures: Mutex::new(VecDeque::new()),
            gate: None,
            list_calls: AtomicUsize::new(0),
            make_row: Box::new(make_row),
        }
    }

    pub(crate) fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    pub(crate) fn gate(&self) -> Arc<Semaphore> {
        self.gate.clone().expect("repository is not gated")
    }

    /// Make the next call fail with `error`.
    pub(crate) fn fail_next(&self, error: ClientError) {
        self.failures.lock().unwrap().push_back(error);
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    async fn pass_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }
    }

    fn next_failure(&self) -> Option<ClientError> {
        self.failures.lock().unwrap().pop_front()
    }
}

impl<Row, Create> Repository for ScriptedRepo<Row, Create>
where
    Row: Clone + 'static,
    Create: 'static,
{
    type Row = Row;
    type Create = Create;

    async fn list(&self) -> Result<Vec<Row>, ClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.pass_gate().await;
        if let Some(e) = self.next_failure() {
            return Err(e);
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, payload: &Create) -> Result<Row, ClientError> {
        self.pass_gate().await;
        if let Some(e) = self.next_failure() {
            return Err(e);
        }
        let mut rows = self.rows.lock().unwrap();
        let row = (self.make_row)(payload, rows.len() + 1);
        rows.push(row.clone());
        Ok(row)
    }
}
