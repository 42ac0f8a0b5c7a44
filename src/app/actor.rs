//! App actor - message loop applying actions to the store

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::app::commands::Effect;
use crate::app::state::AppStore;
use crate::constants::MOBILE_BREAKPOINT;
use crate::lock::IdleLock;
use crate::messages::{Action, RenderState};
use crate::platform::{Fullscreen, TitleSync};
use crate::storage::Storage;

/// App actor that owns the store and its collaborators
pub struct AppActor {
    store: AppStore,
    storage: Storage,
    title: Box<dyn TitleSync>,
    fullscreen: Box<dyn Fullscreen>,
    idle: IdleLock,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    /// Rehydrates the store from `storage`
    pub fn new(
        storage: Storage,
        title: Box<dyn TitleSync>,
        fullscreen: Box<dyn Fullscreen>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        let store = storage.load();
        info!(path = %storage.path().display(), "store loaded");
        AppActor {
            store,
            storage,
            title,
            fullscreen,
            idle: IdleLock::new(Instant::now()),
            render_tx,
        }
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut action_rx: mpsc::UnboundedReceiver<Action>) {
        self.sync_collaborators();
        self.send_render();

        loop {
            let deadline = self.lock_deadline();
            tokio::select! {
                action = action_rx.recv() => match action {
                    Some(action) => {
                        if self.handle_action(action) {
                            break;
                        }
                        self.send_render();
                    }
                    None => break,
                },
                _ = wait_until(deadline) => {
                    if self.idle.is_expired(self.store.app.locked_duration(), Instant::now()) {
                        info!("idle timeout reached, locking screen");
                        self.store.set_is_locked(true);
                        self.persist();
                        self.send_render();
                    }
                }
            }
        }

        debug!("app actor stopped");
    }

    /// Bring the collaborators in line with a freshly loaded store
    fn sync_collaborators(&mut self) {
        self.run_effect(Effect::SyncTitle);
        if self.store.app.is_fullscreen {
            self.run_effect(Effect::SetFullscreen { target: true });
        }
    }

    fn lock_deadline(&self) -> Option<Instant> {
        if self.store.app.is_locked {
            return None;
        }
        self.idle.deadline(self.store.app.locked_duration())
    }

    fn send_render(&self) {
        let _ = self
            .render_tx
            .send(self.store.to_render_state(self.lock_deadline()));
    }

    /// Apply an action, returns true if quit was requested
    fn handle_action(&mut self, action: Action) -> bool {
        debug!(?action, "handling action");
        if action.is_activity() {
            self.idle.touch(Instant::now());
        }

        let effect = match action {
            // Layout
            Action::ToggleSideBar(force) => {
                self.store.toggle_side_bar(force);
                None
            }
            Action::SetSideBar(collapsed) => {
                self.store.set_side_bar(collapsed);
                None
            }
            Action::SetIsMobile(is_mobile) => {
                self.store.set_is_mobile(is_mobile);
                None
            }
            Action::SetNavBar(visible) => {
                self.store.set_nav_bar(visible);
                None
            }
            Action::SetTabBar(visible) => {
                self.store.set_tab_bar(visible);
                None
            }
            Action::ToggleScreenOut => {
                self.store.toggle_screen_out();
                None
            }
            Action::ToggleFullScreen => Some(self.store.toggle_full_screen()),
            Action::SetAppSettingDrawer(open) => {
                self.store.set_app_setting_drawer(open);
                None
            }

            // Appearance
            Action::SetThemeColor(theme) => {
                self.store.set_theme_color(theme);
                None
            }
            Action::SetAppSize(size) => {
                self.store.set_app_size(size);
                None
            }
            Action::SetAnimation(animation) => {
                self.store.set_animation(animation);
                None
            }

            // Title & locale; the window title depends on all three
            Action::SetAppTitle { title, i18n } => Some(self.store.set_app_title(title, i18n)),
            Action::SetDynamicTitle(enabled) => {
                self.store.set_dynamic_title(enabled);
                Some(Effect::SyncTitle)
            }
            Action::SetLang(lang) => {
                self.store.set_lang(lang);
                Some(Effect::SyncTitle)
            }

            // Screen lock
            Action::SetIsLocked(locked) => {
                self.store.set_is_locked(locked);
                None
            }
            Action::SetLockedTime(millis) => {
                self.store.set_locked_time(millis);
                None
            }

            Action::Resize { width, height } => {
                debug!(width, height, "terminal resized");
                if !self.apply_device_width(width) {
                    return false;
                }
                None
            }

            Action::ResetStore => {
                if let Err(e) = self.storage.clear() {
                    warn!(error = %e, "failed to clear persisted store");
                }
                let was_fullscreen = self.store.app.is_fullscreen;
                self.store.reset();
                self.run_effect(Effect::SyncTitle);
                if was_fullscreen {
                    self.run_effect(Effect::SetFullscreen { target: false });
                }
                info!("store reset to defaults");
                return false;
            }

            Action::Activity => return false,

            Action::Quit => return true,
        };

        if let Some(effect) = effect {
            self.run_effect(effect);
        }
        self.persist();
        false
    }

    /// Update mobile detection; returns true if the store changed
    fn apply_device_width(&mut self, width: u16) -> bool {
        let is_mobile = width < MOBILE_BREAKPOINT;
        if is_mobile == self.store.device.is_mobile {
            return false;
        }
        self.store.set_is_mobile(is_mobile);
        if is_mobile {
            self.store.toggle_side_bar(Some(true));
        }
        true
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::SyncTitle => {
                if let Err(e) = self.title.set_dynamic_title(&self.store.app) {
                    warn!(error = %e, "failed to update window title");
                }
            }
            Effect::SetFullscreen { target } => {
                if self.fullscreen.is_fullscreen() != target {
                    if let Err(e) = self.fullscreen.toggle() {
                        warn!(error = %e, target, "failed to toggle fullscreen");
                    }
                }
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.store) {
            warn!(error = %e, "failed to persist store");
        }
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
