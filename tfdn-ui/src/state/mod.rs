//! State Management
//!
//! Global application state and the signed-in session.

pub mod auth;
pub mod global;

pub use auth::{provide_auth_state, AuthState, SignInFlow};
pub use global::{log_load_error, provide_global_state, GlobalState};
