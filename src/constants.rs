//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Application name, used as the window title base
pub const APP_NAME: &str = "AppShell";

/// Directory under the user's home holding persisted state
pub const CONFIG_DIR_NAME: &str = ".appshell";

/// Store id; the persisted file is `<id>.json`
pub const STORE_KEY: &str = "app";

/// Default locale
pub const DEFAULT_LANG: &str = "zh-CN";

/// Locales the preview cycles through
pub const SUPPORTED_LANGS: &[&str] = &["zh-CN", "en-US"];

/// Default route transition name
pub const DEFAULT_ANIMATION: &str = "fade-transform";

/// Transitions the preview cycles through
pub const ANIMATIONS: &[&str] = &["fade", "fade-slide", "fade-transform", "zoom-fade"];

/// 5 minutes of inactivity before the screen locks
pub const DEFAULT_LOCKED_TIME_MS: u64 = 5 * 60 * 1000;

/// Terminals narrower than this many columns count as mobile
pub const MOBILE_BREAKPOINT: u16 = 80;
