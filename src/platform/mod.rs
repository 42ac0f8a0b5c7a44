//! Platform layer - collaborators the store's side effects land in
//!
//! The app actor owns one of each and calls them after the matching actions.

pub mod fullscreen;
pub mod title;

pub use fullscreen::{Fullscreen, TerminalFullscreen};
pub use title::{compose_title, TerminalTitle, TitleSync};
