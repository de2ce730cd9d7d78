use tracing::{error, info, instrument, warn};

use crate::api::AccountApi;
use crate::controller::{Outcome, Page};
use crate::model::account::{Credentials, PasswordChange};
use crate::notify::{self, Notifier};

const TRY_AGAIN: &str = "An error occurred. Please try again later.";

/// Login, registration and password change.
pub struct AccountForms<A, N> {
    api: A,
    notifier: N,
}

impl<A, N> AccountForms<A, N>
where
    A: AccountApi,
    N: Notifier,
{
    pub fn new(api: A, notifier: N) -> Self {
        Self { api, notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Outcome {
        let Some(credentials) = self.credentials(username, password) else {
            return Outcome::Stay;
        };

        match self.api.login(&credentials).await {
            Ok(ack) if ack.succeeded() => {
                info!("Logged in");
                Outcome::Redirect(Page::Dashboard)
            }
            Ok(ack) => {
                warn!("Login refused");
                self.notifier
                    .error(notify::ERROR, &ack.message_or("Invalid username or password."));
                Outcome::Stay
            }
            Err(e) => {
                error!(error = %e, "Login failed");
                self.notifier.error(notify::ERROR, TRY_AGAIN);
                Outcome::Stay
            }
        }
    }

    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> Outcome {
        let Some(credentials) = self.credentials(username, password) else {
            return Outcome::Stay;
        };

        match self.api.register(&credentials).await {
            Ok(ack) if ack.succeeded() => {
                info!("Account registered");
                self.notifier
                    .success(notify::SUCCESS, &ack.message_or("Account created."));
                Outcome::Redirect(Page::Login)
            }
            Ok(ack) => {
                warn!("Registration refused");
                self.notifier
                    .error(notify::ERROR, &ack.message_or("Registration failed."));
                Outcome::Stay
            }
            Err(e) => {
                error!(error = %e, "Registration failed");
                self.notifier.error(notify::ERROR, TRY_AGAIN);
                Outcome::Stay
            }
        }
    }

    #[instrument(skip_all)]
    pub async fn change_password(&self, new_password: &str) -> Outcome {
        if new_password.is_empty() {
            self.notifier.warn(notify::ATTENTION, "Please enter the new password.");
            return Outcome::Stay;
        }

        let change = PasswordChange {
            nova_senha: new_password.to_string(),
        };
        match self.api.change_password(&change).await {
            Ok(ack) if ack.succeeded() => {
                info!("Password changed");
                self.notifier
                    .success(notify::SUCCESS, &ack.message_or("Password changed."));
            }
            Ok(ack) => {
                warn!("Password change refused");
                self.notifier
                    .error(notify::ERROR, &ack.message_or("Could not change the password."));
            }
            Err(e) => {
                error!(error = %e, "Password change failed");
                self.notifier.error(notify::ERROR, &e.to_string());
            }
        }
        Outcome::Stay
    }

    fn credentials(&self, username: &str, password: &str) -> Option<Credentials> {
        let credentials = Credentials::new(username, password);
        if credentials.is_none() {
            self.notifier
                .warn(notify::ATTENTION, "Please enter your username and password.");
        }
        credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClientError, ClientResult};
    use crate::model::Ack;
    use crate::notify::Level;
    use crate::notify::testing::RecordingNotifier;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeAccounts {
        sent: RefCell<Vec<String>>,
        reply: Option<ClientResult<Ack>>,
    }

    impl FakeAccounts {
        fn answering(success: bool, message: &str) -> Self {
            Self {
                reply: Some(Ok(Ack {
                    success: Some(success),
                    message: Some(message.into()),
                })),
                ..Self::default()
            }
        }

        fn answer(&self, sent: String) -> ClientResult<Ack> {
            self.sent.borrow_mut().push(sent);
            self.reply.clone().unwrap_or_else(|| Ok(Ack::default()))
        }
    }

    #[async_trait(?Send)]
    impl AccountApi for FakeAccounts {
        async fn login(&self, credentials: &Credentials) -> ClientResult<Ack> {
            self.answer(format!("login {}", credentials.usuario))
        }

        async fn register(&self, credentials: &Credentials) -> ClientResult<Ack> {
            self.answer(format!("register {}", credentials.usuario))
        }

        async fn change_password(&self, change: &PasswordChange) -> ClientResult<Ack> {
            self.answer(format!("password {}", change.nova_senha))
        }
    }

    fn forms(api: FakeAccounts) -> AccountForms<FakeAccounts, RecordingNotifier> {
        AccountForms::new(api, RecordingNotifier::default())
    }

    #[test]
    fn blank_fields_are_rejected_locally() {
        let forms = forms(FakeAccounts::default());
        assert_eq!(block_on(forms.login(" ", "secret")), Outcome::Stay);
        assert_eq!(block_on(forms.register("ana", "")), Outcome::Stay);
        assert_eq!(block_on(forms.change_password("")), Outcome::Stay);
        assert!(forms.api.sent.borrow().is_empty());
        assert_eq!(forms.notifier().notices(Level::Warning).len(), 3);
    }

    #[test]
    fn successful_login_goes_to_the_dashboard() {
        let forms = forms(FakeAccounts::answering(true, "Login successful"));
        assert_eq!(
            block_on(forms.login(" ana ", "secret")),
            Outcome::Redirect(Page::Dashboard)
        );
        assert_eq!(*forms.api.sent.borrow(), vec!["login ana"]);
    }

    #[test]
    fn refused_login_shows_the_server_message() {
        let forms = forms(FakeAccounts::answering(false, "Invalid credentials"));
        assert_eq!(block_on(forms.login("ana", "nope")), Outcome::Stay);
        assert_eq!(forms.notifier().notices(Level::Error), vec!["Invalid credentials"]);
    }

    #[test]
    fn login_transport_failure_shows_a_generic_message() {
        let forms = forms(FakeAccounts {
            reply: Some(Err(ClientError::Transport("connection refused".into()))),
            ..FakeAccounts::default()
        });
        block_on(forms.login("ana", "secret"));
        assert_eq!(forms.notifier().notices(Level::Error), vec![TRY_AGAIN]);
    }

    #[test]
    fn registration_redirects_to_login() {
        let forms = forms(FakeAccounts::answering(true, "User registered"));
        assert_eq!(
            block_on(forms.register("ana", "secret")),
            Outcome::Redirect(Page::Login)
        );
        assert_eq!(forms.notifier().notices(Level::Success), vec!["User registered"]);
    }

    #[test]
    fn password_change_reports_the_server_message() {
        let forms = forms(FakeAccounts::answering(true, "Password updated"));
        assert_eq!(block_on(forms.change_password("n3w")), Outcome::Stay);
        assert_eq!(*forms.api.sent.borrow(), vec!["password n3w"]);
        assert_eq!(forms.notifier().notices(Level::Success), vec!["Password updated"]);
    }
}
