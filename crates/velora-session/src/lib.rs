//! # velora-session
//!
//! The rate-settings edit session: an explicit state machine over an
//! earner's draft rates, plus the display derivations the settings screen
//! renders from them.
//!
//! ## Modules
//!
//! - [`session`] — edit/validate/save lifecycle
//! - [`display`] — rate card derivation

pub mod display;
pub mod session;

use velora_pricing::PricingError;

/// Error types for session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The draft failed save-time validation.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// A save is already being validated or persisted.
    #[error("a save is already in flight")]
    SaveInFlight,
}

/// Convenience result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
