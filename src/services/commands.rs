use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::features::workspace::DocumentKind;

/// Errors surfaced when a named command cannot run. The launcher treats
/// execution as fire-and-forget and only logs these.
#[derive(Debug, Error)]
pub(crate) enum CommandError {
    #[error("unknown command: {name}")]
    UnknownCommand { name: String },
    #[error("command rejected: {message}")]
    Rejected { message: String },
}

/// Effect produced by a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandOutcome {
    OpenDocument { kind: DocumentKind, title: String },
    Nothing,
}

pub(crate) type CommandHandler =
    Box<dyn Fn(Option<&Value>) -> Result<CommandOutcome, CommandError>>;

/// Named-command execution capability consumed by the launcher. Callers
/// never inspect results beyond mapping the outcome to a task.
pub(crate) trait CommandService {
    fn register(&mut self, name: &str, handler: CommandHandler);

    fn execute(
        &self,
        name: &str,
        args: Option<&Value>,
    ) -> Result<CommandOutcome, CommandError>;
}

/// In-process command table.
pub(crate) struct CommandRegistry {
    handlers: HashMap<String, CommandHandler>,
}

impl CommandRegistry {
    pub(crate) fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl CommandService for CommandRegistry {
    fn register(&mut self, name: &str, handler: CommandHandler) {
        if self.handlers.insert(String::from(name), handler).is_some() {
            log::debug!("command \"{name}\" re-registered");
        }
    }

    fn execute(
        &self,
        name: &str,
        args: Option<&Value>,
    ) -> Result<CommandOutcome, CommandError> {
        let Some(handler) = self.handlers.get(name) else {
            return Err(CommandError::UnknownCommand {
                name: String::from(name),
            });
        };

        handler(args)
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        CommandError, CommandOutcome, CommandRegistry, CommandService,
    };
    use crate::features::workspace::DocumentKind;

    #[test]
    fn given_registered_command_when_executed_then_handler_outcome_returns() {
        let mut registry = CommandRegistry::new();
        registry.register(
            "notebook:create-new",
            Box::new(|_args| {
                Ok(CommandOutcome::OpenDocument {
                    kind: DocumentKind::Notebook,
                    title: String::from("Untitled.ipynb"),
                })
            }),
        );

        let outcome = registry
            .execute("notebook:create-new", None)
            .expect("command must execute");

        assert_eq!(
            outcome,
            CommandOutcome::OpenDocument {
                kind: DocumentKind::Notebook,
                title: String::from("Untitled.ipynb"),
            }
        );
    }

    #[test]
    fn given_unknown_command_when_executed_then_error_names_it() {
        let registry = CommandRegistry::new();

        let error = registry
            .execute("missing:command", None)
            .expect_err("unknown command must fail");

        assert!(
            matches!(error, CommandError::UnknownCommand { name } if name == "missing:command")
        );
    }

    #[test]
    fn handlers_receive_the_arguments_passed_to_execute() {
        let mut registry = CommandRegistry::new();
        registry.register(
            "terminal:create",
            Box::new(|args| {
                let cwd = args
                    .and_then(|value| value.get("cwd"))
                    .and_then(|value| value.as_str())
                    .unwrap_or("");
                Ok(CommandOutcome::OpenDocument {
                    kind: DocumentKind::Terminal,
                    title: format!("Terminal ({cwd})"),
                })
            }),
        );

        let outcome = registry
            .execute("terminal:create", Some(&json!({ "cwd": "notes" })))
            .expect("command must execute");

        assert_eq!(
            outcome,
            CommandOutcome::OpenDocument {
                kind: DocumentKind::Terminal,
                title: String::from("Terminal (notes)"),
            }
        );
    }

    #[test]
    fn re_registering_replaces_the_previous_handler() {
        let mut registry = CommandRegistry::new();
        registry.register(
            "console:create",
            Box::new(|_args| Ok(CommandOutcome::Nothing)),
        );
        registry.register(
            "console:create",
            Box::new(|_args| {
                Err(CommandError::Rejected {
                    message: String::from("disabled"),
                })
            }),
        );

        let error = registry
            .execute("console:create", None)
            .expect_err("replacement handler must run");

        assert!(matches!(error, CommandError::Rejected { .. }));
    }
}
