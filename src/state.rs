use crate::features::launcher::LauncherState;
use crate::features::workspace::WorkspaceState;

/// Top-level mutable application state, mutated only by feature reducers.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) launcher: LauncherState,
    pub(crate) workspace: WorkspaceState,
}
