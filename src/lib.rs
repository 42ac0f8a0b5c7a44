//! # AppShell
//!
//! Persisted state for an application's UI shell, with a terminal preview.
//!
//! ## Features
//! - Sidebar collapse, nav bar and tab bar visibility
//! - Screen-out mode (hides navigation chrome)
//! - Theme, component size, route animation, locale
//! - Dynamic window title
//! - Fullscreen toggle
//! - Idle screen lock
//! - Mobile detection from terminal width
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (store + actions, persisted on every mutation)
//! - Platform Layer (window title, fullscreen)

pub mod constants;
pub mod models;
pub mod storage;
pub mod lock;
pub mod messages;
pub mod app;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use models::{AppSettings, DarkMode, Device, SideBar, Size, ThemeMode};
pub use storage::Storage;
pub use messages::{Action, RenderState};
pub use app::{AppActor, AppStore, Effect};
pub use platform::{Fullscreen, TitleSync};
