use super::model::{EntryId, LauncherModel};

/// Launcher feature state: the model plus view-only interaction state.
#[derive(Debug)]
pub(crate) struct LauncherState {
    pub(crate) model: LauncherModel,
    pub(crate) hovered: Option<EntryId>,
}

impl LauncherState {
    pub(crate) fn new() -> Self {
        Self {
            model: LauncherModel::new(),
            hovered: None,
        }
    }
}

impl Default for LauncherState {
    fn default() -> Self {
        Self::new()
    }
}
