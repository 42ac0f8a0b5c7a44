//! Store actions - every mutation of the shell state goes through here

use crate::app::AppStore;
use crate::models::{DarkMode, Size, ThemeMode};

/// Side effect an action asks the actor to carry out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Recompute the window title from the current settings
    SyncTitle,
    /// Bring the fullscreen primitive to `target`
    SetFullscreen { target: bool },
}

impl AppStore {
    // ========================
    // Layout
    // ========================

    /// Flip the sidebar, or force it collapsed with `Some(true)`.
    pub fn toggle_side_bar(&mut self, force: Option<bool>) {
        self.side_bar.is_collapse = force == Some(true) || !self.side_bar.is_collapse;
    }

    pub fn set_side_bar(&mut self, collapsed: bool) {
        self.side_bar.is_collapse = collapsed;
    }

    pub fn set_is_mobile(&mut self, is_mobile: bool) {
        self.device.is_mobile = is_mobile;
    }

    pub fn set_nav_bar(&mut self, visible: bool) {
        self.app.nav_bar = visible;
    }

    pub fn set_tab_bar(&mut self, visible: bool) {
        self.app.tab_bar = visible;
    }

    /// Screen-out hides the nav bar and collapses the sidebar; leaving it restores both.
    pub fn toggle_screen_out(&mut self) {
        self.app.is_screen_out = !self.app.is_screen_out;
        self.set_side_bar(self.app.is_screen_out);
        self.set_nav_bar(!self.app.is_screen_out);
    }

    pub fn toggle_full_screen(&mut self) -> Effect {
        self.app.is_fullscreen = !self.app.is_fullscreen;
        Effect::SetFullscreen {
            target: self.app.is_fullscreen,
        }
    }

    pub fn set_app_setting_drawer(&mut self, open: bool) {
        self.app.open_setting_drawer = open;
    }

    // ========================
    // Appearance
    // ========================

    pub fn set_theme_color(&mut self, theme: ThemeMode) {
        self.app.is_dark = Some(DarkMode::from(theme == ThemeMode::Dark));
        self.app.theme = theme;
    }

    pub fn set_app_size(&mut self, size: Size) {
        self.app.size = size;
    }

    pub fn set_animation(&mut self, animation: impl Into<String>) {
        self.app.animation = animation.into();
    }

    // ========================
    // Title & locale
    // ========================

    pub fn set_app_title(&mut self, title: impl Into<String>, i18n_key: impl Into<String>) -> Effect {
        self.app.title = title.into();
        self.app.title_i18n = Some(i18n_key.into());
        Effect::SyncTitle
    }

    pub fn set_dynamic_title(&mut self, enabled: bool) {
        self.app.dynamic_title = enabled;
    }

    pub fn set_lang(&mut self, lang: impl Into<String>) {
        self.app.lang = lang.into();
    }

    // ========================
    // Screen lock
    // ========================

    pub fn set_is_locked(&mut self, locked: bool) {
        self.app.is_locked = locked;
    }

    pub fn set_locked_time(&mut self, millis: u64) {
        self.app.locked_time = millis;
    }

    /// Back to the literal defaults
    pub fn reset(&mut self) {
        *self = AppStore::default();
    }
}
