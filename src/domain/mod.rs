//! Domain layer for the HirePoint plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: Signed-in user, role and session state
//! - [`job`]: Job posting summaries
//! - [`route`]: Navigable views and their paths

pub mod error;
pub mod job;
pub mod route;
pub mod user;

pub use error::{HirepointError, Result};
pub use job::{Company, JobSummary};
pub use route::Route;
pub use user::{Profile, Role, SessionState, User};
