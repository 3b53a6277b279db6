use super::super::state::{App, BANNER_LIFETIME, SIMULATED_SEND_LATENCY, SubmitStatus};
use crate::validation;
use std::time::Instant;
use tracing::{info, warn};

impl App {
    pub(super) fn handle_contact_name_changed(&mut self, value: String) {
        self.contact.name = value;
        self.clear_rejection();
    }

    pub(super) fn handle_contact_email_changed(&mut self, value: String) {
        self.contact.email = value;
        self.clear_rejection();
    }

    pub(super) fn handle_contact_message_changed(&mut self, value: String) {
        self.contact.message = value;
        self.clear_rejection();
    }

    /// Validate and, when clean, start the simulated send. Repeated submits
    /// while one is in flight are ignored.
    pub(super) fn handle_contact_submitted(&mut self) {
        if matches!(self.contact.status, SubmitStatus::Sending { .. }) {
            return;
        }
        match validation::validate_submission(
            &self.contact.name,
            &self.contact.email,
            &self.contact.message,
        ) {
            Ok(()) => {
                info!("Contact form accepted; simulating send");
                self.contact.status = SubmitStatus::Sending {
                    done_at: Instant::now() + SIMULATED_SEND_LATENCY,
                };
            }
            Err(reason) => {
                warn!(%reason, "Contact form rejected");
                self.contact.status = SubmitStatus::Failed { reason };
            }
        }
    }

    pub(super) fn handle_contact_tick(&mut self, now: Instant) {
        match self.contact.status {
            SubmitStatus::Sending { done_at } if now >= done_at => {
                info!("Simulated contact send finished");
                self.contact.name.clear();
                self.contact.email.clear();
                self.contact.message.clear();
                self.contact.status = SubmitStatus::Succeeded {
                    dismiss_at: now + BANNER_LIFETIME,
                };
            }
            SubmitStatus::Succeeded { dismiss_at } if now >= dismiss_at => {
                self.contact.status = SubmitStatus::Idle;
            }
            _ => {}
        }
    }

    fn clear_rejection(&mut self) {
        if matches!(self.contact.status, SubmitStatus::Failed { .. }) {
            self.contact.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::{App, SubmitStatus};
    use crate::config::AppConfig;
    use std::time::{Duration, Instant};

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default());
        app
    }

    fn fill_form(app: &mut App) {
        app.reduce(Message::ContactNameChanged("Alex".to_string()));
        app.reduce(Message::ContactEmailChanged("alex@rivera.dev".to_string()));
        app.reduce(Message::ContactMessageChanged(
            "I would like to talk about a project.".to_string(),
        ));
    }

    #[test]
    fn invalid_submission_raises_a_rejection_banner() {
        let mut app = build_test_app();
        app.reduce(Message::ContactSubmitted);
        assert!(matches!(
            app.contact.status,
            SubmitStatus::Failed { ref reason } if reason.contains("name")
        ));
    }

    #[test]
    fn editing_a_field_clears_the_rejection() {
        let mut app = build_test_app();
        app.reduce(Message::ContactSubmitted);
        assert!(matches!(app.contact.status, SubmitStatus::Failed { .. }));

        app.reduce(Message::ContactNameChanged("A".to_string()));
        assert_eq!(app.contact.status, SubmitStatus::Idle);
    }

    #[test]
    fn valid_submission_simulates_a_send_and_clears_the_form() {
        let mut app = build_test_app();
        fill_form(&mut app);

        app.reduce(Message::ContactSubmitted);
        assert!(matches!(app.contact.status, SubmitStatus::Sending { .. }));
        assert!(app.contact.is_waiting());

        // Well before the simulated latency: still sending.
        app.reduce(Message::Tick(Instant::now()));
        assert!(matches!(app.contact.status, SubmitStatus::Sending { .. }));

        // Past the latency: success banner, form reset.
        app.reduce(Message::Tick(Instant::now() + Duration::from_secs(2)));
        assert!(matches!(app.contact.status, SubmitStatus::Succeeded { .. }));
        assert!(app.contact.name.is_empty());
        assert!(app.contact.email.is_empty());
        assert!(app.contact.message.is_empty());

        // Past the banner lifetime: back to idle.
        app.reduce(Message::Tick(Instant::now() + Duration::from_secs(10)));
        assert_eq!(app.contact.status, SubmitStatus::Idle);
    }

    #[test]
    fn resubmitting_while_sending_is_ignored() {
        let mut app = build_test_app();
        fill_form(&mut app);
        app.reduce(Message::ContactSubmitted);

        let SubmitStatus::Sending { done_at } = app.contact.status else {
            panic!("expected a pending send");
        };
        app.reduce(Message::ContactSubmitted);
        let SubmitStatus::Sending { done_at: after } = app.contact.status else {
            panic!("still pending");
        };
        assert_eq!(done_at, after, "resubmits must not extend the deadline");
    }
}
