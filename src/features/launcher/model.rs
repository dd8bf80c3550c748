use serde_json::Value;

use crate::signal::{ObserverId, Signal};

/// Fixed marker prepended to icon classes derived from display names.
pub(crate) const ICON_CLASS_PREFIX: &str = "quire-icon-";

/// Identity of a registered launcher entry. Entries are distinguished by
/// id, never by display name, so duplicate names are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EntryId(u64);

impl EntryId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Capability returned by [`Launcher::add`]; its only operation is undoing
/// that registration through [`LauncherModel::dispose`].
#[derive(Debug, Clone)]
pub(crate) struct EntryHandle {
    id: EntryId,
}

impl EntryHandle {
    pub(crate) fn new(id: EntryId) -> Self {
        Self { id }
    }
}

/// Request payload for registering a launcher entry.
#[derive(Debug, Clone, Default)]
pub(crate) struct EntrySpec {
    pub(crate) display_name: String,
    pub(crate) command: String,
    pub(crate) args: Option<Value>,
    pub(crate) icon_class: Option<String>,
}

/// One registered launchable action. The command name and arguments are
/// captured verbatim at registration time.
#[derive(Debug, Clone)]
pub(crate) struct LauncherEntry {
    id: EntryId,
    pub(crate) display_name: String,
    pub(crate) command: String,
    pub(crate) args: Option<Value>,
    pub(crate) icon_class: String,
}

impl LauncherEntry {
    pub(crate) fn id(&self) -> EntryId {
        self.id
    }
}

/// Registration surface other shell parts receive instead of the concrete
/// model, so alternative implementations can stand in.
pub(crate) trait Launcher {
    fn add(&mut self, spec: EntrySpec) -> EntryHandle;
}

/// Single source of truth for launcher contents and the current path.
///
/// Every mutation fires the change signal synchronously before the call
/// returns; there is no batching and no deferred notification.
#[derive(Debug)]
pub(crate) struct LauncherModel {
    entries: Vec<LauncherEntry>,
    current_path: String,
    next_entry_id: u64,
    changed: Signal,
}

impl LauncherModel {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            current_path: String::new(),
            next_entry_id: 0,
            changed: Signal::new(),
        }
    }

    /// Entries in insertion order; the order defines render order.
    pub(crate) fn entries(&self) -> &[LauncherEntry] {
        &self.entries
    }

    pub(crate) fn entry(&self, id: EntryId) -> Option<&LauncherEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Remove the entry a handle refers to, scanning from index 0.
    /// Disposing an already-absent entry is a no-op and fires nothing.
    pub(crate) fn dispose(&mut self, handle: &EntryHandle) {
        let Some(index) =
            self.entries.iter().position(|entry| entry.id == handle.id)
        else {
            return;
        };

        self.entries.remove(index);
        self.changed.emit();
    }

    /// Stored path, returned verbatim.
    pub(crate) fn current_path(&self) -> &str {
        &self.current_path
    }

    pub(crate) fn set_current_path(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
        self.changed.emit();
    }

    pub(crate) fn on_change(
        &mut self,
        observer: Box<dyn FnMut()>,
    ) -> ObserverId {
        self.changed.subscribe(observer)
    }

    /// Number of change notifications fired so far.
    pub(crate) fn change_emissions(&self) -> u64 {
        self.changed.emission_count()
    }
}

impl Default for LauncherModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher for LauncherModel {
    fn add(&mut self, spec: EntrySpec) -> EntryHandle {
        let id = EntryId::new(self.next_entry_id);
        self.next_entry_id = self.next_entry_id.wrapping_add(1);

        let icon_class = spec
            .icon_class
            .unwrap_or_else(|| derived_icon_class(&spec.display_name));

        self.entries.push(LauncherEntry {
            id,
            display_name: spec.display_name,
            command: spec.command,
            args: spec.args,
            icon_class,
        });
        self.changed.emit();

        EntryHandle::new(id)
    }
}

/// Icon class derived from a display name: all space characters removed,
/// prefixed with the fixed marker. Same-name-minus-spaces collisions are
/// accepted behavior.
fn derived_icon_class(display_name: &str) -> String {
    let compact: String =
        display_name.chars().filter(|ch| *ch != ' ').collect();
    format!("{ICON_CLASS_PREFIX}{compact}")
}
