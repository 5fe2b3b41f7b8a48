//! The lookup session: one state container, any number of submissions.
//!
//! Each submission takes a generation number. Only the newest submission
//! may publish its terminal state, so a slow lookup that finishes after a
//! newer one cannot overwrite the newer result.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use pokedex_client::PokeApiClient;
use pokedex_core::{DetailView, LookupResult, LookupState, Query};
use tokio::sync::watch;
use tracing::{debug, info};

/// What happened to a submitted query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing was fetched and the state is unchanged.
    Ignored,
    /// The lookup finished and its state was published.
    Applied,
    /// A newer submission started first; this result was discarded.
    Superseded,
}

/// Lookup session shared by the front ends.
///
/// Cloning is cheap and every clone drives the same state.
#[derive(Debug, Clone)]
pub struct Pokedex {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    client: PokeApiClient,
    state: watch::Sender<LookupState>,
    generation: AtomicU64,
}

impl Pokedex {
    /// Create an idle session around `client`.
    pub fn new(client: PokeApiClient) -> Self {
        let (state, _) = watch::channel(LookupState::Idle);
        Self {
            inner: Arc::new(Inner {
                client,
                state,
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Access the underlying HTTP client directly.
    pub fn client(&self) -> &PokeApiClient {
        &self.inner.client
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LookupState {
        self.inner.state.borrow().clone()
    }

    /// Watch state transitions.
    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.inner.state.subscribe()
    }

    /// Submit a query.
    ///
    /// Blank input is ignored without touching the network or the state.
    /// Otherwise the state moves to `Loading`, then to `Success` or `Error`
    /// unless a newer submission has started in the meantime.
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        let Some(query) = Query::parse(raw) else {
            debug!("ignoring blank query");
            return SubmitOutcome::Ignored;
        };

        let ticket = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.send_replace(LookupState::Loading);
        info!(query = %query, generation = ticket, "looking up");

        let next = match self.inner.client.lookup(&query).await {
            Ok(result) => LookupState::Success(result),
            Err(e) => {
                debug!(query = %query, error = %e, "lookup failed");
                LookupState::Error(e.to_string())
            }
        };

        let applied = self.inner.state.send_if_modified(|state| {
            if self.inner.generation.load(Ordering::SeqCst) == ticket {
                *state = next;
                true
            } else {
                false
            }
        });

        if applied {
            SubmitOutcome::Applied
        } else {
            debug!(query = %query, generation = ticket, "discarding superseded lookup");
            SubmitOutcome::Superseded
        }
    }

    /// Overlay for the displayed result.
    ///
    /// `None` unless the session is in `Success`.
    pub fn open_detail(&self) -> Option<DetailView> {
        self.inner.state.borrow().result().map(LookupResult::detail)
    }
}
