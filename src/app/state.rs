//! App store - pure data structure with no I/O logic

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::messages::RenderState;
use crate::models::{AppSettings, Device, SideBar};
use crate::platform::title::compose_title;

/// UI shell state. All three groups are persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppStore {
    pub side_bar: SideBar,
    pub device: Device,
    pub app: AppSettings,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert store to RenderState for UI
    pub fn to_render_state(&self, lock_deadline: Option<Instant>) -> RenderState {
        RenderState {
            store: self.clone(),
            window_title: compose_title(&self.app),
            lock_deadline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Size, ThemeMode};

    #[test]
    fn test_defaults() {
        let store = AppStore::new();
        assert!(!store.side_bar.is_collapse);
        assert!(!store.device.is_mobile);

        let app = &store.app;
        assert_eq!(app.title, "");
        assert_eq!(app.animation, "fade-transform");
        assert_eq!(app.title_i18n, None);
        assert_eq!(app.size, Size::Small);
        assert!(app.dynamic_title);
        assert_eq!(app.is_dark, None);
        assert_eq!(app.theme, ThemeMode::System);
        assert_eq!(app.lang, "zh-CN");
        assert!(app.nav_bar);
        assert!(app.tab_bar);
        assert!(!app.is_screen_out);
        assert!(!app.is_fullscreen);
        assert!(!app.open_setting_drawer);
        assert!(!app.is_locked);
        assert_eq!(app.locked_time, 300_000);
    }

    #[test]
    fn test_persisted_groups() {
        let value = serde_json::to_value(AppStore::new()).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(value["sideBar"]["isCollapse"], false);
        assert_eq!(value["device"]["isMobile"], false);
        assert_eq!(value["app"]["lang"], "zh-CN");
    }
}
