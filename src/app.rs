use iced::widget::{container, row};
use iced::{Element, Length, Task, Theme};
use serde_json::Value;

use crate::features::launcher::{
    EntrySpec, Launcher, LauncherEvent, launcher_reducer,
};
use crate::features::workspace::{
    DocumentKind, WorkspaceEvent, workspace_reducer,
};
use crate::services::ServiceRegistry;
use crate::services::commands::{CommandOutcome, CommandService};
use crate::state::State;
use crate::theme::Palette;
use crate::ui::widgets;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;
const SIDEBAR_WIDTH: f32 = 240.0;

/// Top-level application events.
#[derive(Debug, Clone)]
pub(crate) enum Event {
    Launcher(LauncherEvent),
    Workspace(WorkspaceEvent),
}

pub(crate) struct App {
    state: State,
    services: ServiceRegistry,
    palette: Palette,
}

impl App {
    pub(crate) fn new() -> (Self, Task<Event>) {
        let mut services = ServiceRegistry::new();
        register_builtin_commands(services.commands_mut());

        let mut state = State::default();
        register_builtin_entries(&mut state.launcher.model);
        state.launcher.model.on_change(Box::new(|| {
            log::trace!("launcher model changed");
        }));

        let app = App {
            state,
            services,
            palette: Palette::dark(),
        };

        (app, Task::none())
    }

    pub(crate) fn title(&self) -> String {
        String::from("Quire")
    }

    pub(crate) fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub(crate) fn update(&mut self, event: Event) -> Task<Event> {
        match event {
            Event::Launcher(event) => {
                launcher_reducer(&mut self.state, &self.services, event)
            },
            Event::Workspace(event) => {
                workspace_reducer(&mut self.state, event)
            },
        }
    }

    pub(crate) fn view(&self) -> Element<'_, Event, Theme, iced::Renderer> {
        let sidebar = container(
            widgets::launcher::view(widgets::launcher::Props {
                state: &self.state.launcher,
                palette: self.palette,
            })
            .map(Event::Launcher),
        )
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill);

        let content = container(
            widgets::workspace::view(widgets::workspace::Props {
                state: &self.state.workspace,
                palette: self.palette,
            })
            .map(Event::Workspace),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        row![sidebar, content]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Commands the default launcher entries dispatch. A `cwd` argument, when
/// present, is reflected in the opened document title.
fn register_builtin_commands(commands: &mut dyn CommandService) {
    commands.register(
        "notebook:create-new",
        Box::new(|args| {
            Ok(CommandOutcome::OpenDocument {
                kind: DocumentKind::Notebook,
                title: titled("Untitled.ipynb", args),
            })
        }),
    );
    commands.register(
        "terminal:create",
        Box::new(|args| {
            Ok(CommandOutcome::OpenDocument {
                kind: DocumentKind::Terminal,
                title: titled("Terminal", args),
            })
        }),
    );
    commands.register(
        "console:create",
        Box::new(|args| {
            Ok(CommandOutcome::OpenDocument {
                kind: DocumentKind::Console,
                title: titled("Console", args),
            })
        }),
    );
}

fn titled(base: &str, args: Option<&Value>) -> String {
    let cwd = args
        .and_then(|value| value.get("cwd"))
        .and_then(|value| value.as_str())
        .filter(|value| !value.is_empty());

    match cwd {
        Some(cwd) => format!("{base} ({cwd})"),
        None => String::from(base),
    }
}

/// Register the default launch actions through the capability trait, so
/// this wiring never depends on the concrete model.
fn register_builtin_entries(launcher: &mut dyn Launcher) {
    launcher.add(EntrySpec {
        display_name: String::from("New Notebook"),
        command: String::from("notebook:create-new"),
        ..EntrySpec::default()
    });
    launcher.add(EntrySpec {
        display_name: String::from("New Terminal"),
        command: String::from("terminal:create"),
        ..EntrySpec::default()
    });
    launcher.add(EntrySpec {
        display_name: String::from("New Console"),
        command: String::from("console:create"),
        ..EntrySpec::default()
    });
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        App, Event, register_builtin_commands, register_builtin_entries,
        titled,
    };
    use crate::features::launcher::{
        EntryHandle, EntryId, EntrySpec, Launcher, LauncherEvent,
    };
    use crate::features::workspace::{DocumentKind, WorkspaceEvent};
    use crate::services::ServiceRegistry;
    use crate::services::commands::CommandOutcome;

    #[test]
    fn builtin_entries_are_registered_in_order() {
        let (app, _task) = App::new();

        let names: Vec<&str> = app
            .state
            .launcher
            .model
            .entries()
            .iter()
            .map(|entry| entry.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["New Notebook", "New Terminal", "New Console"]);
    }

    #[test]
    fn builtin_commands_open_documents_of_the_matching_kind() {
        let mut services = ServiceRegistry::new();
        register_builtin_commands(services.commands_mut());

        let outcome = services
            .commands()
            .execute("terminal:create", Some(&json!({ "cwd": "notes" })))
            .expect("builtin command must execute");

        assert_eq!(
            outcome,
            CommandOutcome::OpenDocument {
                kind: DocumentKind::Terminal,
                title: String::from("Terminal (notes)"),
            }
        );
    }

    #[test]
    fn titles_ignore_empty_cwd_arguments() {
        assert_eq!(titled("Console", Some(&json!({ "cwd": "" }))), "Console");
        assert_eq!(titled("Console", None), "Console");
    }

    #[test]
    fn entry_registration_only_needs_the_capability_trait() {
        struct RecordingLauncher {
            specs: Vec<EntrySpec>,
        }

        impl Launcher for RecordingLauncher {
            fn add(&mut self, spec: EntrySpec) -> EntryHandle {
                let handle =
                    EntryHandle::new(EntryId::new(self.specs.len() as u64));
                self.specs.push(spec);
                handle
            }
        }

        let mut recorder = RecordingLauncher { specs: Vec::new() };
        register_builtin_entries(&mut recorder);

        assert_eq!(recorder.specs.len(), 3);
        assert_eq!(recorder.specs[0].command, "notebook:create-new");
    }

    #[test]
    fn workspace_events_open_and_close_documents_through_update() {
        let (mut app, _task) = App::new();

        let _ = app.update(Event::Workspace(WorkspaceEvent::OpenRequested {
            kind: DocumentKind::Notebook,
            title: String::from("Untitled.ipynb"),
        }));
        assert_eq!(app.state.workspace.documents.len(), 1);

        let id = app.state.workspace.documents[0].id;
        let _ = app
            .update(Event::Workspace(WorkspaceEvent::CloseRequested { id }));
        assert!(app.state.workspace.documents.is_empty());
    }

    #[test]
    fn hovering_an_entry_through_update_tracks_interaction_state() {
        let (mut app, _task) = App::new();
        let id = app.state.launcher.model.entries()[0].id();

        let _ = app.update(Event::Launcher(LauncherEvent::EntryHovered {
            id: Some(id),
        }));

        assert_eq!(app.state.launcher.hovered, Some(id));
    }
}
