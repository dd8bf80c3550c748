#[rustfmt::skip]
mod event;
#[rustfmt::skip]
mod model;
#[rustfmt::skip]
mod state;

pub(crate) use event::{LauncherEvent, launcher_reducer};
pub(crate) use model::{
    EntryHandle, EntryId, EntrySpec, ICON_CLASS_PREFIX, Launcher,
    LauncherEntry, LauncherModel,
};
pub(crate) use state::LauncherState;
