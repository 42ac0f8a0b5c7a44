//! Render state - data structure sent from App layer to UI for rendering

use tokio::time::Instant;

use crate::app::AppStore;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub store: AppStore,

    /// Title pushed to the window, shown in the nav bar too
    pub window_title: String,

    /// When the idle lock fires; `None` while locked or with auto-lock off
    pub lock_deadline: Option<Instant>,
}
