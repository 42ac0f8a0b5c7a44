//! Dynamic window title

use std::io;

use anyhow::Result;
use crossterm::{execute, terminal::SetTitle};
use tracing::debug;

use crate::constants::APP_NAME;
use crate::models::AppSettings;

/// Receives the settings whenever the window title may have changed
pub trait TitleSync: Send {
    fn set_dynamic_title(&mut self, app: &AppSettings) -> Result<()>;
}

/// Writes the title to the hosting terminal
#[derive(Debug, Default)]
pub struct TerminalTitle;

impl TitleSync for TerminalTitle {
    fn set_dynamic_title(&mut self, app: &AppSettings) -> Result<()> {
        let title = compose_title(app);
        debug!(%title, "setting window title");
        execute!(io::stdout(), SetTitle(&title))?;
        Ok(())
    }
}

// (lang, key, text)
const MESSAGES: &[(&str, &str, &str)] = &[
    ("zh-CN", "menu.dashboard", "仪表盘"),
    ("en-US", "menu.dashboard", "Dashboard"),
    ("zh-CN", "menu.system.user", "用户管理"),
    ("en-US", "menu.system.user", "Users"),
    ("zh-CN", "menu.settings", "系统设置"),
    ("en-US", "menu.settings", "Settings"),
];

/// Look up a translation key in the built-in catalog
pub fn translate(lang: &str, key: &str) -> Option<&'static str> {
    MESSAGES
        .iter()
        .find(|(l, k, _)| *l == lang && *k == key)
        .map(|(_, _, text)| *text)
}

/// Title for the current page, e.g. `"Users - AppShell"`
pub fn compose_title(app: &AppSettings) -> String {
    if !app.dynamic_title {
        return APP_NAME.to_string();
    }

    let page: Option<&str> = app
        .title_i18n
        .as_deref()
        .and_then(|key| translate(&app.lang, key))
        .or_else(|| (!app.title.is_empty()).then_some(app.title.as_str()));

    match page {
        Some(page) => format!("{page} - {APP_NAME}"),
        None => APP_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translated_title() {
        let mut app = AppSettings::default();
        app.title = String::from("Users");
        app.title_i18n = Some(String::from("menu.system.user"));
        assert_eq!(compose_title(&app), "用户管理 - AppShell");

        app.lang = String::from("en-US");
        assert_eq!(compose_title(&app), "Users - AppShell");
    }

    #[test]
    fn test_falls_back_to_raw_title() {
        let mut app = AppSettings::default();
        app.title = String::from("Reports");
        app.title_i18n = Some(String::from("menu.reports"));
        assert_eq!(compose_title(&app), "Reports - AppShell");
    }

    #[test]
    fn test_static_title() {
        let mut app = AppSettings::default();
        assert_eq!(compose_title(&app), "AppShell");

        app.title = String::from("Users");
        app.dynamic_title = false;
        assert_eq!(compose_title(&app), "AppShell");
    }
}
