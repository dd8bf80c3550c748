#[rustfmt::skip]
mod event;
#[rustfmt::skip]
mod model;
#[rustfmt::skip]
mod state;

pub(crate) use event::{WorkspaceEvent, workspace_reducer};
pub(crate) use model::{Document, DocumentKind};
pub(crate) use state::WorkspaceState;
