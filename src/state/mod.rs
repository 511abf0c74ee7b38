//! Client-side state.
//!
//! DESIGN
//! ======
//! `bootstrap` tracks which view is showing; `session` holds everything the
//! chat view owns once a name is accepted. Both are plain structs wrapped in
//! `RwSignal`s and provided via context, so their logic is testable without
//! a browser.

pub mod bootstrap;
pub mod session;
