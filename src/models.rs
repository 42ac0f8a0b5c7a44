use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

use crate::constants::{DEFAULT_ANIMATION, DEFAULT_LANG, DEFAULT_LOCKED_TIME_MS};

/// Component size used across the shell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Mini,
    #[default]
    Small,
    Medium,
    Large,
}

impl Size {
    pub fn as_str(&self) -> &str {
        match self {
            Size::Mini => "mini",
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    pub fn next(&self) -> Size {
        match self {
            Size::Mini => Size::Small,
            Size::Small => Size::Medium,
            Size::Medium => Size::Large,
            Size::Large => Size::Mini,
        }
    }
}

/// Theme selected by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    pub fn next(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

/// Dark-mode flag. Persisted as `true`, `false` or `"auto"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DarkMode {
    Light,
    Dark,
    Auto,
}

impl From<bool> for DarkMode {
    fn from(dark: bool) -> Self {
        if dark {
            DarkMode::Dark
        } else {
            DarkMode::Light
        }
    }
}

impl Serialize for DarkMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DarkMode::Light => serializer.serialize_bool(false),
            DarkMode::Dark => serializer.serialize_bool(true),
            DarkMode::Auto => serializer.serialize_str("auto"),
        }
    }
}

impl<'de> Deserialize<'de> for DarkMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Word(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(dark) => Ok(DarkMode::from(dark)),
            Repr::Word(word) if word == "auto" => Ok(DarkMode::Auto),
            Repr::Word(word) => Err(de::Error::invalid_value(
                Unexpected::Str(&word),
                &"true, false or \"auto\"",
            )),
        }
    }
}

/// Sidebar group
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SideBar {
    pub is_collapse: bool,
}

/// Device group
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub is_mobile: bool,
}

/// Application settings group
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub title: String,
    pub animation: String,
    /// Translation key for `title`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_i18n: Option<String>,
    pub size: Size,
    pub dynamic_title: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_dark: Option<DarkMode>,
    pub theme: ThemeMode,
    pub lang: String,
    pub nav_bar: bool,
    pub tab_bar: bool,
    pub is_screen_out: bool,
    pub is_fullscreen: bool,
    pub open_setting_drawer: bool,
    pub is_locked: bool,
    /// Inactivity before auto-lock, in milliseconds. 0 disables it.
    #[serde(rename = "LockedTime")]
    pub locked_time: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            title: String::new(),
            animation: String::from(DEFAULT_ANIMATION),
            title_i18n: None,
            size: Size::Small,
            dynamic_title: true,
            is_dark: None,
            theme: ThemeMode::System,
            lang: String::from(DEFAULT_LANG),
            nav_bar: true,
            tab_bar: true,
            is_screen_out: false,
            is_fullscreen: false,
            open_setting_drawer: false,
            is_locked: false,
            locked_time: DEFAULT_LOCKED_TIME_MS,
        }
    }
}

impl AppSettings {
    pub fn locked_duration(&self) -> Duration {
        Duration::from_millis(self.locked_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_wire_names() {
        let value = serde_json::to_value(AppSettings::default()).unwrap();
        assert_eq!(value["LockedTime"], 300_000);
        assert_eq!(value["theme"], "system");
        assert_eq!(value["size"], "small");
        assert_eq!(value["openSettingDrawer"], false);
        assert!(value.get("isDark").is_none());
        assert!(value.get("titleI18n").is_none());
    }

    #[test]
    fn test_dark_mode_accepts_bool_and_auto() {
        let dark: DarkMode = serde_json::from_str("true").unwrap();
        let auto: DarkMode = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(dark, DarkMode::Dark);
        assert_eq!(auto, DarkMode::Auto);
        assert_eq!(serde_json::to_string(&DarkMode::Light).unwrap(), "false");
        assert!(serde_json::from_str::<DarkMode>("\"dim\"").is_err());
    }
}
