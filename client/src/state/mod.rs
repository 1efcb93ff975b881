//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the plain session model and its transitions; `store`
//! wraps it in a context-provided signal for components.

pub mod session;
pub mod store;
