use iced::Task;

use super::model::DocumentKind;
use crate::app::Event as AppEvent;
use crate::state::State;

/// Events for the workspace document list.
#[derive(Debug, Clone)]
pub(crate) enum WorkspaceEvent {
    OpenRequested { kind: DocumentKind, title: String },
    CloseRequested { id: u64 },
}

pub(crate) fn workspace_reducer(
    state: &mut State,
    event: WorkspaceEvent,
) -> Task<AppEvent> {
    match event {
        WorkspaceEvent::OpenRequested { kind, title } => {
            let id = state.workspace.open(kind, title);
            log::debug!("workspace opened {kind} document {id}");
            Task::none()
        },
        WorkspaceEvent::CloseRequested { id } => {
            state.workspace.close(id);
            Task::none()
        },
    }
}
