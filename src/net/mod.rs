//! Networking: endpoint derivation, the chat socket, and the user-list call.

pub mod api;
pub mod endpoint;
pub mod socket;
