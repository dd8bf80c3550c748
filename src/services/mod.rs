#[rustfmt::skip]
pub(crate) mod commands;

use crate::services::commands::{CommandRegistry, CommandService};

/// App-owned registry of long-lived services.
pub(crate) struct ServiceRegistry {
    commands: Box<dyn CommandService>,
}

impl ServiceRegistry {
    pub(crate) fn new() -> Self {
        Self {
            commands: Box::new(CommandRegistry::new()),
        }
    }

    pub(crate) fn commands(&self) -> &dyn CommandService {
        self.commands.as_ref()
    }

    pub(crate) fn commands_mut(&mut self) -> &mut dyn CommandService {
        self.commands.as_mut()
    }
}
