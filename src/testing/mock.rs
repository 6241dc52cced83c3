//! Mock collaborators for isolated flow testing
//!
//! A scripted join transport stands in for the ride service, and recording
//! notifier and navigator capture every effect the flow applies.

use crate::booking::{
    JoinAttemptResult, JoinTransport, NavigationState, Navigator, NotificationKind, Notifier,
};
use crate::error::TransportError;
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::{watch, Semaphore};

/// Join transport that answers every request with the same scripted reply
pub struct ScriptedTransport {
    reply: Result<JoinAttemptResult, TransportError>,
    requests: Mutex<Vec<String>>,
    arrivals: watch::Sender<usize>,
    gate: Option<Semaphore>,
}

impl ScriptedTransport {
    fn with_reply(reply: Result<JoinAttemptResult, TransportError>, gated: bool) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
            arrivals: watch::Sender::new(0),
            gate: gated.then(|| Semaphore::new(0)),
        }
    }

    /// Reply with this status and body
    #[must_use]
    pub fn responding(result: JoinAttemptResult) -> Self {
        Self::with_reply(Ok(result), false)
    }

    /// Fail every request with this transport error
    #[must_use]
    pub fn failing(error: TransportError) -> Self {
        Self::with_reply(Err(error), false)
    }

    /// Like [`responding`](Self::responding), but every request blocks until
    /// [`release`](Self::release) is called
    #[must_use]
    pub fn gated(result: JoinAttemptResult) -> Self {
        Self::with_reply(Ok(result), true)
    }

    /// Let every pending and future request complete
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.close();
        }
    }

    /// Wait until at least one request has arrived
    pub async fn wait_for_request(&self) {
        self.wait_for_requests(1).await;
    }

    /// Wait until at least `count` requests have arrived
    pub async fn wait_for_requests(&self, count: usize) {
        let mut arrivals = self.arrivals.subscribe();
        // The sender lives in `self`, so the channel cannot close while waiting
        let _ = arrivals.wait_for(|seen| *seen >= count).await;
    }

    /// Number of join requests received
    ///
    /// # Panics
    ///
    /// Panics if the request log mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Ride identifiers of all join requests, in arrival order
    ///
    /// # Panics
    ///
    /// Panics if the request log mutex is poisoned.
    #[must_use]
    pub fn requested_rides(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl JoinTransport for ScriptedTransport {
    async fn join(&self, ride_id: &str) -> Result<JoinAttemptResult, TransportError> {
        let arrived = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(ride_id.to_string());
            requests.len()
        };
        self.arrivals.send_replace(arrived);

        if let Some(gate) = &self.gate {
            // Closing the semaphore is the release signal
            let _ = gate.acquire().await;
        }
        self.reply.clone()
    }
}

/// Notifier that records every notification
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<(NotificationKind, String)>>,
}

impl RecordingNotifier {
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn notifications(&self) -> Vec<(NotificationKind, String)> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.notifications
            .lock()
            .unwrap()
            .push((kind, message.to_string()));
    }
}

/// Navigator that records every transition
#[derive(Default)]
pub struct RecordingNavigator {
    navigations: Mutex<Vec<(String, Option<NavigationState>)>>,
}

impl RecordingNavigator {
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn navigations(&self) -> Vec<(String, Option<NavigationState>)> {
        self.navigations.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str, state: Option<&NavigationState>) {
        self.navigations
            .lock()
            .unwrap()
            .push((route.to_string(), state.cloned()));
    }
}
