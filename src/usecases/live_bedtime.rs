//! Off-thread bedtime worker. At most one calculation in flight; the latest request wins.
//!
//! Requests go through a watch channel, so bursts of edits coalesce into the newest one.
//! A result is dropped when a newer request arrived while it was being computed.

use crate::domain::{Bedtime, BedtimeRequest, CalculationError};
use crate::usecases::BedtimeCalculator;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, trace};

/// Published result of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct BedtimeUpdate {
    /// Sequence number returned by [`LiveBedtime::submit`].
    pub generation: u64,
    pub request: BedtimeRequest,
    pub outcome: Result<Bedtime, CalculationError>,
    /// What the form shows for `outcome`.
    pub display: String,
}

type Pending = Option<(u64, BedtimeRequest)>;

pub struct LiveBedtime {
    requests: watch::Sender<Pending>,
    updates: watch::Receiver<Option<BedtimeUpdate>>,
    next_generation: AtomicU64,
}

impl LiveBedtime {
    /// Spawn the worker on the current tokio runtime. It stops when this handle is dropped.
    pub fn spawn(calculator: Arc<BedtimeCalculator>) -> Self {
        let (requests, mut pending) = watch::channel::<Pending>(None);
        let (publish, updates) = watch::channel::<Option<BedtimeUpdate>>(None);

        tokio::spawn(async move {
            while pending.changed().await.is_ok() {
                let current = *pending.borrow_and_update();
                let Some((generation, request)) = current else {
                    continue;
                };

                let calc = Arc::clone(&calculator);
                let outcome = match tokio::task::spawn_blocking(move || calc.calculate(&request)).await {
                    Ok(outcome) => outcome,
                    Err(e) => Err(CalculationError::ModelUnavailable(format!(
                        "calculation task failed: {e}"
                    ))),
                };

                if pending.has_changed().unwrap_or(false) {
                    trace!(generation, "discarding stale bedtime");
                    continue;
                }

                let display = calculator.display(&outcome);
                publish.send_replace(Some(BedtimeUpdate {
                    generation,
                    request,
                    outcome,
                    display,
                }));
            }
            debug!("live bedtime worker stopped");
        });

        Self {
            requests,
            updates,
            next_generation: AtomicU64::new(0),
        }
    }

    /// Queue `request`, replacing anything not yet picked up. Returns its generation.
    pub fn submit(&self, request: BedtimeRequest) -> u64 {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.requests.send_replace(Some((generation, request)));
        trace!(generation, "bedtime requested");
        generation
    }

    /// Most recently published update, if any.
    pub fn latest(&self) -> Option<BedtimeUpdate> {
        self.updates.borrow().clone()
    }

    /// Wait until an update at least as new as `generation` is published.
    ///
    /// Returns `None` if the worker is gone.
    pub async fn wait_for(&self, generation: u64) -> Option<BedtimeUpdate> {
        let mut updates = self.updates.clone();
        let result = match updates
            .wait_for(|u| u.as_ref().is_some_and(|u| u.generation >= generation))
            .await
        {
            Ok(update) => (*update).clone(),
            Err(_) => None,
        };
        result
    }
}
