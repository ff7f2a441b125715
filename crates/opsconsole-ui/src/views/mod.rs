//! Panel view factories
//!
//! Each view synthesizes its own markup fragment and exposes the root
//! through an accessor. Attachment to a visible tree is the caller's job.

pub mod help_panel;

pub use help_panel::HelpPanel;
