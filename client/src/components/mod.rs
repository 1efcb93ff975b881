//! Reusable UI components shared by pages.
//!
//! ARCHITECTURE
//! ============
//! `role_guard` gates protected routes; the layouts and bars only read the
//! session store and trigger logout.

pub mod admin_sidebar;
pub mod navbar;
pub mod public_layout;
pub mod role_guard;
