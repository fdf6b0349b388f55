//! Debounced estimate recalculation for wizard sessions.
//!
//! Each input change hands out a `RecalcTicket`. The task spawned for it
//! waits out the debounce window and gives up if the session has moved to a
//! newer revision in the meantime, so a burst of edits costs one evaluation
//! (trailing edge). The result is applied through the ticket, which discards
//! it if yet another edit landed while the evaluation was in flight.

use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::{Evaluator, SessionStore};
use crate::wizard::RecalcTicket;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecalcOutcome {
    /// A newer edit arrived during the debounce window
    Superseded,
    Applied,
    /// Evaluated, but the input changed before the result came back
    Stale,
    Failed,
    /// The session no longer exists
    Gone,
}

#[derive(Clone)]
pub struct Recalculator {
    sessions: SessionStore,
    evaluator: Evaluator,
    debounce: Duration,
}

impl Recalculator {
    pub fn new(sessions: SessionStore, evaluator: Evaluator, debounce: Duration) -> Self {
        Self {
            sessions,
            evaluator,
            debounce,
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn schedule(&self, ticket: RecalcTicket) -> JoinHandle<RecalcOutcome> {
        let this = self.clone();
        tokio::spawn(async move { this.run(ticket).await })
    }

    async fn run(&self, ticket: RecalcTicket) -> RecalcOutcome {
        tokio::time::sleep(self.debounce).await;

        let request = match self.sessions.get(ticket.session_id) {
            None => return RecalcOutcome::Gone,
            Some(session) if !session.is_current(&ticket) => {
                debug!(
                    session_id = %ticket.session_id,
                    revision = ticket.revision,
                    "Recalculation superseded"
                );
                return RecalcOutcome::Superseded;
            }
            Some(session) => session.to_request(),
        };

        // Lets the remote evaluator's logs be matched to a session revision
        let request_id = format!("{}:{}", ticket.session_id, ticket.revision);
        let result = self.evaluator.evaluate(&request, Some(&request_id)).await;

        let outcome = self.sessions.update(ticket.session_id, |session| match &result {
            Ok(estimate) if session.apply_estimate(&ticket, *estimate) => RecalcOutcome::Applied,
            Err(_) if session.fail_estimate(&ticket) => RecalcOutcome::Failed,
            _ => RecalcOutcome::Stale,
        });

        match (&result, outcome) {
            (_, None) => RecalcOutcome::Gone,
            (Err(e), Some(outcome)) => {
                warn!(session_id = %ticket.session_id, error = %e, "Recalculation failed");
                outcome
            }
            (Ok(estimate), Some(outcome)) => {
                debug!(
                    session_id = %ticket.session_id,
                    revision = ticket.revision,
                    low = estimate.low,
                    high = estimate.high,
                    ?outcome,
                    "Recalculation finished"
                );
                outcome
            }
        }
    }
}
