//! Session State
//!
//! Holds the hosted-auth session token (persisted in local storage) and the
//! `authenticated` flag the pages gate on.

use leptos::*;

use crate::api;

const TOKEN_KEY: &str = "tfdn_auth_token";

/// Password flow selected on the sign-in form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInFlow {
    SignIn,
    SignUp,
}

impl SignInFlow {
    /// Value sent to the provider
    pub fn as_str(&self) -> &'static str {
        match self {
            SignInFlow::SignIn => "signIn",
            SignInFlow::SignUp => "signUp",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SignInFlow::SignIn => SignInFlow::SignUp,
            SignInFlow::SignUp => SignInFlow::SignIn,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignInFlow::SignIn => "Sign In",
            SignInFlow::SignUp => "Sign Up",
        }
    }

    /// Toast shown when the provider rejects the attempt
    pub fn failure_message(&self, provider_error: &str) -> &'static str {
        if provider_error.contains("Invalid password") {
            return "Invalid password. Please try again.";
        }
        match self {
            SignInFlow::SignIn => "Could not sign in, did you mean to sign up?",
            SignInFlow::SignUp => "Could not sign up, did you mean to sign in?",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AuthState {
    pub token: RwSignal<Option<String>>,
    pub authenticated: RwSignal<bool>,
    /// True until the first session check settles
    pub checking: RwSignal<bool>,
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn load_token() -> Option<String> {
    storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

fn store_token(token: Option<&str>) {
    if let Some(storage) = storage() {
        let _ = match token {
            Some(token) => storage.set_item(TOKEN_KEY, token),
            None => storage.remove_item(TOKEN_KEY),
        };
    }
}

/// Provide session state and run the initial session check
pub fn provide_auth_state() {
    let token = load_token();
    let state = AuthState {
        checking: create_rw_signal(token.is_some()),
        token: create_rw_signal(token),
        authenticated: create_rw_signal(false),
    };

    provide_context(state);

    if state.checking.get_untracked() {
        spawn_local(async move {
            state.refresh().await;
        });
    }
}

impl AuthState {
    /// Re-check the stored token with the server. Failures count as signed out.
    pub async fn refresh(&self) {
        let token = self.token.get_untracked();
        let authenticated = match api::check_session(token.as_deref()).await {
            Ok(status) => status.authenticated,
            Err(e) => {
                web_sys::console::warn_1(&format!("Session check failed: {}", e).into());
                false
            }
        };

        self.authenticated.set(authenticated);
        self.checking.set(false);
    }

    fn signed_in(&self, token: String) {
        store_token(Some(&token));
        self.token.set(Some(token));
        self.authenticated.set(true);
    }

    /// Password sign-in or sign-up. The error is the toast to show.
    pub async fn sign_in(
        &self,
        flow: SignInFlow,
        email: &str,
        password: &str,
    ) -> Result<(), &'static str> {
        match api::provider_sign_in(Some((flow.as_str(), email, password))).await {
            Ok(token) => {
                self.signed_in(token);
                Ok(())
            }
            Err(e) => Err(flow.failure_message(&e)),
        }
    }

    pub async fn sign_in_anonymous(&self) -> Result<(), String> {
        let token = api::provider_sign_in(None).await?;
        self.signed_in(token);
        Ok(())
    }

    /// Drops the local session even when the provider call fails
    pub async fn sign_out(&self) {
        if let Some(token) = self.token.get_untracked() {
            if let Err(e) = api::provider_sign_out(&token).await {
                web_sys::console::warn_1(&format!("Sign-out failed: {}", e).into());
            }
        }

        store_token(None);
        self.token.set(None);
        self.authenticated.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_toggle() {
        assert_eq!(SignInFlow::SignIn.toggled(), SignInFlow::SignUp);
        assert_eq!(SignInFlow::SignUp.toggled(), SignInFlow::SignIn);
        assert_eq!(SignInFlow::SignUp.as_str(), "signUp");
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            SignInFlow::SignIn.failure_message("Invalid password"),
            "Invalid password. Please try again."
        );
        assert_eq!(
            SignInFlow::SignUp.failure_message("Invalid password for account"),
            "Invalid password. Please try again."
        );
        assert_eq!(
            SignInFlow::SignIn.failure_message("Account not found"),
            "Could not sign in, did you mean to sign up?"
        );
        assert_eq!(
            SignInFlow::SignUp.failure_message("Account exists"),
            "Could not sign up, did you mean to sign in?"
        );
    }
}
