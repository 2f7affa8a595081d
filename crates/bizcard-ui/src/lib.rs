//! Digital Business Card UI Components
//!
//! Dioxus building blocks for the card page. Components here are stateless:
//! they render what they are given and report user input through event
//! handlers. Overlay and toast state lives in `bizcard-core`.
//!
//! ## Accessibility
//!
//! - Every icon-only control carries an `aria-label`
//! - Toasts render as `status` (or `alert` for errors) regions
//! - The [`LiveRegion`] is visually hidden and announces politely

pub mod components;

pub use components::*;
