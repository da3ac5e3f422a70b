//! Search-and-Render controller.
//!
//! One submission issues one request and, when its response is still the
//! latest one, renders it into the page. Every submission takes a
//! [`RequestToken`]; a response carrying an older token is dropped so a slow
//! reply can never overwrite a newer search. The page lock is never held
//! across the network await.

use pokedex_common::{render_card, LookupError, LookupResult, PageState};
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::client::{Fetched, LookupApi};

/// Sequence number issued per submission; only the latest may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// What happened to one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank query; nothing was sent and the page is untouched.
    Ignored,
    Rendered(LookupResult),
    Failed(LookupError),
    /// A newer submission was issued while this one was in flight.
    Stale,
}

struct Session {
    page: PageState,
    latest: u64,
}

pub struct SearchController<A> {
    api: A,
    session: Mutex<Session>,
}

impl<A: LookupApi> SearchController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            session: Mutex::new(Session {
                page: PageState::new(),
                latest: 0,
            }),
        }
    }

    /// Handle a submitted query end to end.
    pub async fn handle_submit(&self, raw: &str) -> SubmitOutcome {
        self.submit(raw).await.0
    }

    /// Like [`handle_submit`](Self::handle_submit), also returning the page
    /// as this submission left it, snapshotted under the lock that applied the
    /// response. `None` when the page was not touched.
    pub async fn submit(&self, raw: &str) -> (SubmitOutcome, Option<PageState>) {
        let query = raw.trim();
        if query.is_empty() {
            return (SubmitOutcome::Ignored, None);
        }

        let token = self.begin(query).await;
        let outcome = self.api.lookup(query).await;
        self.apply(token, outcome).await
    }

    /// Issue a token and put the page into its loading state.
    pub async fn begin(&self, query: &str) -> RequestToken {
        let mut session = self.session.lock().await;
        session.latest += 1;
        session.page.searching(query);
        RequestToken(session.latest)
    }

    /// Apply a response to the page unless a newer token has been issued.
    pub async fn complete(
        &self,
        token: RequestToken,
        outcome: Result<Fetched, LookupError>,
    ) -> SubmitOutcome {
        self.apply(token, outcome).await.0
    }

    async fn apply(
        &self,
        token: RequestToken,
        outcome: Result<Fetched, LookupError>,
    ) -> (SubmitOutcome, Option<PageState>) {
        let mut session = self.session.lock().await;
        if token.0 != session.latest {
            debug!(
                "Dropping stale response #{} (latest #{})",
                token.0, session.latest
            );
            return (SubmitOutcome::Stale, None);
        }

        let page = &mut session.page;
        let result = match outcome {
            Ok(fetched) => {
                page.show_card(render_card(&fetched.result));
                page.served(fetched.response_time.as_deref());
                SubmitOutcome::Rendered(fetched.result)
            }
            Err(e) => {
                error!("Lookup for {:?} failed: {}", page.query, e);
                page.set_status(e.status_message(), false);
                SubmitOutcome::Failed(e)
            }
        };
        page.toggle_loading(false);
        (result, Some(page.clone()))
    }

    /// Snapshot of the current page.
    pub async fn page(&self) -> PageState {
        self.session.lock().await.page.clone()
    }
}
