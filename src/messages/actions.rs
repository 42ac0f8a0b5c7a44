//! Actions - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::constants::{ANIMATIONS, SUPPORTED_LANGS};
use crate::messages::RenderState;
use crate::models::{Size, ThemeMode};

/// Step used by the lock-time keys
const LOCKED_TIME_STEP_MS: u64 = 60 * 1000;

/// Pages the preview can navigate to: (title, translation key)
pub const PAGES: &[(&str, &str)] = &[
    ("Dashboard", "menu.dashboard"),
    ("Users", "menu.system.user"),
    ("Settings", "menu.settings"),
];

/// Named store mutations plus the few events the actor handles itself
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Layout
    ToggleSideBar(Option<bool>),
    SetSideBar(bool),
    SetIsMobile(bool),
    SetNavBar(bool),
    SetTabBar(bool),
    ToggleScreenOut,
    ToggleFullScreen,
    SetAppSettingDrawer(bool),

    // Appearance
    SetThemeColor(ThemeMode),
    SetAppSize(Size),
    SetAnimation(String),

    // Title & locale
    SetAppTitle { title: String, i18n: String },
    SetDynamicTitle(bool),
    SetLang(String),

    // Screen lock
    SetIsLocked(bool),
    SetLockedTime(u64),

    // Terminal resized, drives mobile detection
    Resize { width: u16, height: u16 },

    // Clear storage and go back to defaults
    ResetStore,

    // Any key press; resets the idle lock without touching the store
    Activity,

    // System
    Quit,
}

impl Action {
    /// Whether this counts as user activity for the idle lock
    pub fn is_activity(&self) -> bool {
        !matches!(self, Action::Resize { .. } | Action::SetIsLocked(true))
    }
}

/// Convert a key event into an action, given the current render state
pub fn key_to_action(key: KeyEvent, state: &RenderState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let app = &state.store.app;

    if app.is_locked {
        return match key.code {
            KeyCode::Char('u') | KeyCode::Enter => Some(Action::SetIsLocked(false)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc if app.open_setting_drawer => Some(Action::SetAppSettingDrawer(false)),
        KeyCode::Char('g') => Some(Action::SetAppSettingDrawer(!app.open_setting_drawer)),
        KeyCode::Char('b') => Some(Action::ToggleSideBar(None)),
        KeyCode::Char('n') => Some(Action::SetNavBar(!app.nav_bar)),
        KeyCode::Char('t') => Some(Action::SetTabBar(!app.tab_bar)),
        KeyCode::Char('o') => Some(Action::ToggleScreenOut),
        KeyCode::Char('f') => Some(Action::ToggleFullScreen),
        KeyCode::Char('d') => Some(Action::SetThemeColor(app.theme.next())),
        KeyCode::Char('s') => Some(Action::SetAppSize(app.size.next())),
        KeyCode::Char('a') => Some(Action::SetAnimation(cycle(ANIMATIONS, &app.animation))),
        KeyCode::Char('l') => Some(Action::SetLang(cycle(SUPPORTED_LANGS, &app.lang))),
        KeyCode::Char('y') => Some(Action::SetDynamicTitle(!app.dynamic_title)),
        KeyCode::Char('k') => Some(Action::SetIsLocked(true)),
        KeyCode::Char('+') => Some(Action::SetLockedTime(
            app.locked_time.saturating_add(LOCKED_TIME_STEP_MS),
        )),
        KeyCode::Char('-') => Some(Action::SetLockedTime(
            app.locked_time.saturating_sub(LOCKED_TIME_STEP_MS),
        )),
        KeyCode::Char('R') => Some(Action::ResetStore),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            PAGES.get(index).map(|(title, i18n)| Action::SetAppTitle {
                title: title.to_string(),
                i18n: i18n.to_string(),
            })
        }
        _ => None,
    }
}

/// Action for a key press; keys with no binding still count as activity
pub fn key_to_input(key: KeyEvent, state: &RenderState) -> Action {
    key_to_action(key, state).unwrap_or(Action::Activity)
}

/// Value after `current` in `options`, wrapping; the first option if `current` is unknown
fn cycle(options: &[&str], current: &str) -> String {
    let next = options
        .iter()
        .position(|option| *option == current)
        .map_or(0, |i| (i + 1) % options.len());
    options.get(next).copied().unwrap_or(current).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_toggle_keys_follow_state() {
        let mut state = RenderState::default();
        assert_eq!(
            key_to_action(press(KeyCode::Char('n')), &state),
            Some(Action::SetNavBar(false))
        );
        state.store.set_nav_bar(false);
        assert_eq!(
            key_to_action(press(KeyCode::Char('n')), &state),
            Some(Action::SetNavBar(true))
        );
        assert_eq!(
            key_to_action(press(KeyCode::Char('d')), &state),
            Some(Action::SetThemeColor(ThemeMode::Light))
        );
    }

    #[test]
    fn test_cycle_lang() {
        let state = RenderState::default();
        assert_eq!(
            key_to_action(press(KeyCode::Char('l')), &state),
            Some(Action::SetLang(String::from("en-US")))
        );
        assert_eq!(cycle(SUPPORTED_LANGS, "en-US"), "zh-CN");
        assert_eq!(cycle(SUPPORTED_LANGS, "fr-FR"), "zh-CN");
    }

    #[test]
    fn test_page_keys() {
        let state = RenderState::default();
        assert_eq!(
            key_to_action(press(KeyCode::Char('2')), &state),
            Some(Action::SetAppTitle {
                title: String::from("Users"),
                i18n: String::from("menu.system.user"),
            })
        );
        assert_eq!(key_to_action(press(KeyCode::Char('9')), &state), None);
    }

    #[test]
    fn test_locked_screen_only_unlocks() {
        let mut state = RenderState::default();
        state.store.set_is_locked(true);
        assert_eq!(key_to_action(press(KeyCode::Char('b')), &state), None);
        assert_eq!(
            key_to_action(press(KeyCode::Enter), &state),
            Some(Action::SetIsLocked(false))
        );
        assert_eq!(key_to_action(press(KeyCode::Char('q')), &state), Some(Action::Quit));
    }

    #[test]
    fn test_unbound_keys_are_activity() {
        let mut state = RenderState::default();
        assert_eq!(key_to_input(press(KeyCode::Char('x')), &state), Action::Activity);
        assert_eq!(key_to_input(press(KeyCode::Down), &state), Action::Activity);
        assert_eq!(
            key_to_input(press(KeyCode::Char('b')), &state),
            Action::ToggleSideBar(None)
        );

        state.store.set_is_locked(true);
        assert_eq!(key_to_input(press(KeyCode::Char('b')), &state), Action::Activity);
        assert!(Action::Activity.is_activity());
    }

    #[test]
    fn test_locked_time_never_negative() {
        let mut state = RenderState::default();
        state.store.set_locked_time(30_000);
        assert_eq!(
            key_to_action(press(KeyCode::Char('-')), &state),
            Some(Action::SetLockedTime(0))
        );
    }
}
