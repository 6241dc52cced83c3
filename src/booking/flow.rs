//! The join-a-ride flow: guard, execute, classify, dispatch
//!
//! A booking is a gated two-step action. The page opens a
//! [`ConfirmationPrompt`] for a loaded ride and the user confirms it; only the
//! confirmation runs the flow. Every run ends with exactly one notification.

use super::dispatcher::{Effects, Navigator, Notifier};
use super::executor::{resolve_join, JoinTransport};
use super::guard::{check_preconditions, BookingControl, GuardDecision};
use super::Outcome;
use crate::error::BookingError;
use crate::models::{FetchState, RideSummary, UserIdentity};
use crate::settings::{MessageSettings, RidebookSettings, RouteSettings};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const PROMPT_TITLE: &str = "Confirm your booking";
pub const PROMPT_DESCRIPTION: &str = "Are you sure to confirm your ride? This action will finalize your participation in the shared journey.";

/// Result of one confirmed booking attempt
#[derive(Debug, Clone, PartialEq)]
pub struct BookingReport {
    pub outcome: Outcome,
    pub effects: Effects,
}

/// Booking flow wired to its collaborators
pub struct BookingFlow {
    transport: Arc<dyn JoinTransport>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    messages: MessageSettings,
    routes: RouteSettings,
    prevent_duplicate_submissions: bool,
    in_flight: AtomicBool,
}

impl BookingFlow {
    /// Create a flow with default messages and routes
    #[must_use]
    pub fn new(
        transport: Arc<dyn JoinTransport>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            notifier,
            navigator,
            messages: MessageSettings::default(),
            routes: RouteSettings::default(),
            prevent_duplicate_submissions: false,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Create a flow configured from application settings
    #[must_use]
    pub fn from_settings(
        settings: &RidebookSettings,
        transport: Arc<dyn JoinTransport>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::new(transport, notifier, navigator)
            .with_messages(settings.messages.clone())
            .with_routes(settings.routes.clone())
            .with_duplicate_guard(settings.booking.prevent_duplicate_submissions)
    }

    #[must_use]
    pub fn with_messages(mut self, messages: MessageSettings) -> Self {
        self.messages = messages;
        self
    }

    #[must_use]
    pub fn with_routes(mut self, routes: RouteSettings) -> Self {
        self.routes = routes;
        self
    }

    /// Reject confirmations that arrive while another one is in flight
    #[must_use]
    pub fn with_duplicate_guard(mut self, enabled: bool) -> Self {
        self.prevent_duplicate_submissions = enabled;
        self
    }

    /// Open the confirmation prompt for the ride the page has loaded
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::RideNotLoaded`] unless the fetch completed
    /// successfully.
    pub fn open_prompt<'a>(
        &'a self,
        fetch: &'a FetchState,
        user: Option<&'a UserIdentity>,
    ) -> Result<ConfirmationPrompt<'a>, BookingError> {
        let ride = fetch.loaded_ride().ok_or(BookingError::RideNotLoaded)?;
        Ok(ConfirmationPrompt {
            flow: self,
            ride,
            user,
        })
    }

    /// Run guard, join request, classification and dispatch for one confirmation
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::AlreadyInFlight`] when the duplicate guard is
    /// enabled and a previous confirmation has not finished. Nothing is sent
    /// and no effects are applied in that case.
    pub async fn book(
        &self,
        ride: &RideSummary,
        user: Option<&UserIdentity>,
    ) -> Result<BookingReport, BookingError> {
        let _in_flight = self.enter()?;

        let outcome = match check_preconditions(user) {
            GuardDecision::Reject(outcome) => outcome,
            GuardDecision::Proceed(user) => {
                log::debug!("User {} is joining ride {}", user.id, ride.id);
                resolve_join(self.transport.as_ref(), &ride.id).await
            }
        };
        log::info!("Join attempt for ride {} resolved to {outcome}", ride.id);

        let effects = Effects::plan(&outcome, ride, &self.messages, &self.routes);
        effects.apply(self.notifier.as_ref(), self.navigator.as_ref());

        Ok(BookingReport { outcome, effects })
    }

    fn enter(&self) -> Result<Option<InFlight<'_>>, BookingError> {
        if !self.prevent_duplicate_submissions {
            return Ok(None);
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("Ignoring booking confirmation while another is in flight");
            return Err(BookingError::AlreadyInFlight);
        }
        Ok(Some(InFlight(&self.in_flight)))
    }
}

/// Releases the in-flight flag when the run ends, however it ends
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Open confirmation dialog for a loaded ride
pub struct ConfirmationPrompt<'a> {
    flow: &'a BookingFlow,
    ride: &'a RideSummary,
    user: Option<&'a UserIdentity>,
}

impl<'a> ConfirmationPrompt<'a> {
    #[must_use]
    pub fn title(&self) -> &'static str {
        PROMPT_TITLE
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        PROMPT_DESCRIPTION
    }

    #[must_use]
    pub fn ride(&self) -> &'a RideSummary {
        self.ride
    }

    /// State of the booking control for this ride and user
    #[must_use]
    pub fn control(&self) -> BookingControl {
        BookingControl::for_ride(self.user, self.ride.creator_id())
    }

    /// Confirm the booking
    ///
    /// # Errors
    ///
    /// See [`BookingFlow::book`].
    pub async fn confirm(self) -> Result<BookingReport, BookingError> {
        self.flow.book(self.ride, self.user).await
    }

    /// Dismiss the prompt without booking
    pub fn cancel(self) {
        log::debug!("Booking prompt for ride {} dismissed", self.ride.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::JoinAttemptResult;
    use crate::booking::NotificationKind;
    use crate::error::TransportError;
    use crate::testing::fixtures::TestFixtures;
    use crate::testing::mock::{RecordingNavigator, RecordingNotifier, ScriptedTransport};

    struct Harness {
        transport: Arc<ScriptedTransport>,
        notifier: Arc<RecordingNotifier>,
        navigator: Arc<RecordingNavigator>,
        flow: BookingFlow,
    }

    fn harness(transport: ScriptedTransport) -> Harness {
        let transport = Arc::new(transport);
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let flow = BookingFlow::new(transport.clone(), notifier.clone(), navigator.clone());
        Harness {
            transport,
            notifier,
            navigator,
            flow,
        }
    }

    #[tokio::test]
    async fn test_anonymous_user_sends_no_request() {
        let h = harness(ScriptedTransport::responding(JoinAttemptResult::text(200, "{}")));
        let ride = TestFixtures::ride();

        let report = h.flow.book(&ride, None).await.unwrap();

        assert_eq!(report.outcome, Outcome::Unauthenticated);
        assert_eq!(h.transport.calls(), 0);
        assert_eq!(
            h.notifier.notifications(),
            vec![(NotificationKind::Error, "Please log in to join a ride".to_string())]
        );
        assert!(h.navigator.navigations().is_empty());
    }

    #[tokio::test]
    async fn test_full_ride_notifies_without_navigation() {
        let h = harness(ScriptedTransport::responding(JoinAttemptResult::text(
            400,
            "Ride is full!",
        )));
        let ride = TestFixtures::ride();
        let user = TestFixtures::passenger();

        let report = h.flow.book(&ride, Some(&user)).await.unwrap();

        assert_eq!(report.outcome, Outcome::Full);
        assert_eq!(h.transport.calls(), 1);
        assert_eq!(h.transport.requested_rides(), vec![ride.id.clone()]);
        assert_eq!(
            h.notifier.notifications(),
            vec![(NotificationKind::Error, "Sorry, this ride is full".to_string())]
        );
        assert!(h.navigator.navigations().is_empty());
    }

    #[tokio::test]
    async fn test_self_ride_is_still_sent_to_the_service() {
        let h = harness(ScriptedTransport::responding(JoinAttemptResult::text(
            400,
            "You cannot join your own ride!",
        )));
        let ride = TestFixtures::ride();
        let creator = TestFixtures::creator();

        let report = h.flow.book(&ride, Some(&creator)).await.unwrap();

        assert_eq!(report.outcome, Outcome::SelfRide);
        assert_eq!(h.transport.calls(), 1);
        assert!(h.navigator.navigations().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_resolves_to_one_error_notification() {
        let h = harness(ScriptedTransport::failing(TransportError::Network(
            "Network Error".to_string(),
        )));
        let ride = TestFixtures::ride();
        let user = TestFixtures::passenger();

        let report = h.flow.book(&ride, Some(&user)).await.unwrap();

        assert_eq!(report.outcome, Outcome::UnknownError("Network Error".to_string()));
        assert_eq!(
            h.notifier.notifications(),
            vec![(NotificationKind::Error, "Network Error".to_string())]
        );
        assert!(h.navigator.navigations().is_empty());
    }

    #[tokio::test]
    async fn test_prompt_requires_loaded_ride() {
        let h = harness(ScriptedTransport::responding(JoinAttemptResult::text(200, "{}")));
        let user = TestFixtures::passenger();

        let loading = FetchState::loading();
        assert!(matches!(
            h.flow.open_prompt(&loading, Some(&user)),
            Err(BookingError::RideNotLoaded)
        ));
        let failed = FetchState::failed("Ride not found");
        assert!(matches!(
            h.flow.open_prompt(&failed, Some(&user)),
            Err(BookingError::RideNotLoaded)
        ));
        assert_eq!(h.transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_prompt_confirm_runs_flow() {
        let h = harness(ScriptedTransport::responding(JoinAttemptResult::text(200, "{}")));
        let fetch = FetchState::loaded(TestFixtures::ride());
        let creator = TestFixtures::creator();

        let prompt = h.flow.open_prompt(&fetch, Some(&creator)).unwrap();
        assert_eq!(prompt.title(), PROMPT_TITLE);
        assert!(prompt.control().disabled);

        let report = prompt.confirm().await.unwrap();
        assert_eq!(report.outcome, Outcome::Success);
        assert_eq!(h.navigator.navigations().len(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_prompt_sends_nothing() {
        let h = harness(ScriptedTransport::responding(JoinAttemptResult::text(200, "{}")));
        let fetch = FetchState::loaded(TestFixtures::ride());
        let user = TestFixtures::passenger();

        h.flow.open_prompt(&fetch, Some(&user)).unwrap().cancel();

        assert_eq!(h.transport.calls(), 0);
        assert!(h.notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_guard_releases_after_completion() {
        let h = harness(ScriptedTransport::responding(JoinAttemptResult::text(200, "{}")));
        let flow = h.flow.with_duplicate_guard(true);
        let ride = TestFixtures::ride();
        let user = TestFixtures::passenger();

        flow.book(&ride, Some(&user)).await.unwrap();
        flow.book(&ride, Some(&user)).await.unwrap();

        assert_eq!(h.transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_guard_rejects_concurrent_confirmation() {
        let transport = Arc::new(ScriptedTransport::gated(JoinAttemptResult::text(200, "{}")));
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let flow = BookingFlow::new(transport.clone(), notifier.clone(), navigator.clone())
            .with_duplicate_guard(true);
        let ride = TestFixtures::ride();
        let user = TestFixtures::passenger();

        let first = flow.book(&ride, Some(&user));
        let second = async {
            transport.wait_for_request().await;
            let result = flow.book(&ride, Some(&user)).await;
            transport.release();
            result
        };
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first.unwrap().outcome, Outcome::Success);
        assert!(matches!(second, Err(BookingError::AlreadyInFlight)));
        assert_eq!(transport.calls(), 1);
        assert_eq!(notifier.notifications().len(), 1);
    }

    #[tokio::test]
    async fn test_without_guard_concurrent_confirmations_both_send() {
        let transport = Arc::new(ScriptedTransport::gated(JoinAttemptResult::text(200, "{}")));
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let flow = BookingFlow::new(transport.clone(), notifier.clone(), navigator.clone());
        let ride = TestFixtures::ride();
        let user = TestFixtures::passenger();

        let first = flow.book(&ride, Some(&user));
        let second = async {
            transport.wait_for_request().await;
            let result = flow.book(&ride, Some(&user));
            let releaser = async {
                transport.wait_for_requests(2).await;
                transport.release();
            };
            let (result, ()) = tokio::join!(result, releaser);
            result
        };
        let (first, second) = tokio::join!(first, second);

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(transport.calls(), 2);
        assert_eq!(navigator.navigations().len(), 2);
    }
}
