//! API Routes
//!
//! Route handlers organized by functionality.

pub mod career;
pub mod content;
pub mod forms;
pub mod health;
pub mod session;
