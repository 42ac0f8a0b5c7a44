//! App layer - the shell store and its actions
//!
//! The App actor receives UI actions, updates the store, runs the
//! resulting side effects, persists, and emits render state.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::AppStore;
pub use actor::AppActor;
pub use commands::Effect;
