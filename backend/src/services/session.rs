//! Latest-request-wins holder for one view's display state.
//!
//! Selector changes (a new date, another program) can start a fetch while an
//! older one is still in flight. Each fetch is tagged with a sequence
//! number; an outcome is committed only if no newer fetch has started since,
//! so a slow stale response can never overwrite a newer one.

use parking_lot::RwLock;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use super::error::ServiceResult;
use super::view_state::{ViewData, ViewState};

/// Sequence number handed out when a fetch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

pub struct ViewSession<T> {
    name: &'static str,
    latest: AtomicU64,
    state: RwLock<ViewState<T>>,
}

impl<T> ViewSession<T>
where
    T: ViewData + Clone,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            latest: AtomicU64::new(0),
            state: RwLock::new(ViewState::Empty),
        }
    }

    /// Start a fetch: supersede older ones and show the loading state.
    pub fn begin(&self) -> RequestTicket {
        let mut state = self.state.write();
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        *state = ViewState::Loading;
        RequestTicket(seq)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Store the outcome of `ticket`'s fetch unless a newer fetch started.
    ///
    /// Returns whether the outcome was applied.
    pub fn commit(&self, ticket: RequestTicket, result: ServiceResult<T>) -> bool {
        let mut state = self.state.write();
        if !self.is_current(ticket) {
            debug!(
                view = self.name,
                ticket = ticket.0,
                latest = self.latest.load(Ordering::SeqCst),
                "discarding stale response"
            );
            return false;
        }
        *state = ViewState::from_result(result);
        true
    }

    /// Run one fetch through [`begin`](Self::begin) and [`commit`](Self::commit).
    pub async fn load<F>(&self, fetch: F) -> bool
    where
        F: Future<Output = ServiceResult<T>>,
    {
        let ticket = self.begin();
        let result = fetch.await;
        self.commit(ticket, result)
    }

    pub fn snapshot(&self) -> ViewState<T> {
        self.state.read().clone()
    }
}
