//! One-shot query flag handling.

use scene_core::auth::AuthState;
use scene_core::modal::{ModalCoordinator, ModalKey};
use scene_core::navigation::Navigator;
use scene_core::query::{QueryParams, SENT_BUBBLE_FLAG};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntakeOutcome {
    /// The flag was found and stripped from the URL.
    pub flag_consumed: bool,
    /// The onboarding modal was opened.
    pub onboarding_opened: bool,
}

/// Consumes the `sentBubble` flag that the message composer appends after a
/// guest sends a message.
///
/// Safe to evaluate any number of times: the first evaluation strips the
/// flag, so later ones find nothing to do until the flag reappears.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParamIntakeHandler;

impl QueryParamIntakeHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(
        &self,
        query: &mut QueryParams,
        auth: &AuthState,
        navigator: &dyn Navigator,
        modals: &dyn ModalCoordinator,
    ) -> IntakeOutcome {
        if !query.has_sent_bubble_flag() {
            return IntakeOutcome::default();
        }

        query.remove(SENT_BUBBLE_FLAG);
        navigator.replace_query(query);

        let onboarding_opened = !auth.is_authenticated;
        if onboarding_opened {
            modals.open(ModalKey::ShareIntro.as_ref());
        }
        tracing::debug!(onboarding_opened, "sent-message flag consumed");

        IntakeOutcome {
            flag_consumed: true,
            onboarding_opened,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_core::auth::AuthUser;
    use scene_core::modal::ModalRegistry;
    use scene_core::navigation::Route;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        replaced: Mutex<Vec<String>>,
        pushed: Mutex<Vec<Route>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: &Route) {
            self.pushed.lock().unwrap().push(route.clone());
        }

        fn replace_query(&self, query: &QueryParams) {
            self.replaced.lock().unwrap().push(query.to_string());
        }
    }

    #[test]
    fn test_absent_flag_does_nothing() {
        let navigator = RecordingNavigator::default();
        let modals = ModalRegistry::new();
        let mut query = QueryParams::parse("ref=share");

        let outcome = QueryParamIntakeHandler::new().evaluate(
            &mut query,
            &AuthState::anonymous(),
            &navigator,
            &modals,
        );

        assert_eq!(outcome, IntakeOutcome::default());
        assert!(navigator.replaced.lock().unwrap().is_empty());
        assert!(modals.open_modals().is_empty());
    }

    #[test]
    fn test_anonymous_visitor_gets_onboarding_once() {
        let navigator = RecordingNavigator::default();
        let modals = ModalRegistry::new();
        let handler = QueryParamIntakeHandler::new();
        let mut query = QueryParams::parse("sentBubble=true&ref=share");

        let first = handler.evaluate(&mut query, &AuthState::anonymous(), &navigator, &modals);
        assert!(first.flag_consumed && first.onboarding_opened);
        assert!(modals.is_open("shareIntroModal"));
        assert_eq!(*navigator.replaced.lock().unwrap(), vec!["ref=share".to_string()]);
        assert!(navigator.pushed.lock().unwrap().is_empty());

        modals.close("shareIntroModal");
        let second = handler.evaluate(&mut query, &AuthState::anonymous(), &navigator, &modals);
        assert_eq!(second, IntakeOutcome::default());
        assert!(!modals.is_open("shareIntroModal"));
        assert_eq!(navigator.replaced.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_signed_in_visitor_only_strips_flag() {
        let navigator = RecordingNavigator::default();
        let modals = ModalRegistry::new();
        let mut query = QueryParams::parse("sentBubble=true");

        let outcome = QueryParamIntakeHandler::new().evaluate(
            &mut query,
            &AuthState::signed_in(AuthUser::new("u1")),
            &navigator,
            &modals,
        );

        assert!(outcome.flag_consumed);
        assert!(!outcome.onboarding_opened);
        assert!(query.is_empty());
        assert!(modals.open_modals().is_empty());
    }
}
