//! Terminal implementations of the notification and navigation collaborators

use crate::booking::{NavigationState, Navigator, NotificationKind, Notifier};

/// Prints notifications to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        let marker = match kind {
            NotificationKind::Error => "✗",
            NotificationKind::Info => "ℹ",
            NotificationKind::Success => "✓",
        };
        println!("{marker} {message}");
    }
}

/// Prints the route the user would be taken to
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: &str, state: Option<&NavigationState>) {
        match state {
            Some(state) => println!("→ {route} (ride {})", state.ride_data.id),
            None => println!("→ {route}"),
        }
    }
}
