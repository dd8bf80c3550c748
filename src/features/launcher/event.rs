use iced::Task;

use super::model::EntryId;
use crate::app::Event as AppEvent;
use crate::features::workspace::WorkspaceEvent;
use crate::services::ServiceRegistry;
use crate::services::commands::CommandOutcome;
use crate::state::State;

/// Events emitted by the launcher panel.
#[derive(Debug, Clone)]
pub(crate) enum LauncherEvent {
    EntryActivated { id: EntryId },
    EntryHovered { id: Option<EntryId> },
}

pub(crate) fn launcher_reducer(
    state: &mut State,
    services: &ServiceRegistry,
    event: LauncherEvent,
) -> Task<AppEvent> {
    match event {
        LauncherEvent::EntryHovered { id } => {
            state.launcher.hovered = id;
            Task::none()
        },
        LauncherEvent::EntryActivated { id } => {
            activate_entry(state, services, id)
        },
    }
}

/// Execute the command captured by an entry, fire-and-forget. Failures
/// are logged and produce no other observable effect here.
fn activate_entry(
    state: &State,
    services: &ServiceRegistry,
    id: EntryId,
) -> Task<AppEvent> {
    let Some(entry) = state.launcher.model.entry(id) else {
        return Task::none();
    };

    match services.commands().execute(&entry.command, entry.args.as_ref()) {
        Ok(outcome) => outcome_task(outcome),
        Err(err) => {
            log::warn!("launcher command \"{}\" failed: {err}", entry.command);
            Task::none()
        },
    }
}

fn outcome_task(outcome: CommandOutcome) -> Task<AppEvent> {
    match outcome {
        CommandOutcome::OpenDocument { kind, title } => Task::done(
            AppEvent::Workspace(WorkspaceEvent::OpenRequested { kind, title }),
        ),
        CommandOutcome::Nothing => Task::none(),
    }
}
