//! Panel generation for Panelsmith.
//!
//! A [`JobDispatcher`] opens one generation stream per job and hands it to a
//! [`Demultiplexer`], which narrates text to the operator and writes image
//! payloads to disk as chunks arrive. Jobs come from a [`PanelBook`].

mod book;
mod demux;
mod dispatch;
mod narration;
mod storage;

pub use book::{PanelBook, PanelEntry};
pub use demux::{DemuxSummary, Demultiplexer};
pub use dispatch::{DispatchMode, JobDispatcher, JobReport};
pub use narration::ConsoleNarrator;
pub use storage::FsImageStore;
