//! Shared client-side state.
//!
//! The session is the only app-wide state with real invariants; it gets a
//! single owning controller provided via context at the app root.

pub mod session;
