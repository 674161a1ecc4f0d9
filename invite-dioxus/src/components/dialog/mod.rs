//! Dialog shell component.
//!
//! A controlled open/close container; the content decides what to render.

mod shell;

pub use shell::DialogShell;
pub(crate) use shell::notify_open_change;
