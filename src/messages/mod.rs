//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines the messages that flow between the UI and App layers.

pub mod actions;
pub mod render;

pub use actions::{key_to_action, key_to_input, Action};
pub use render::RenderState;
