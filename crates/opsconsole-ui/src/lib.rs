//! Opsconsole UI Library
//!
//! Panel view factories for the server-administration console. Each view
//! builds a detached markup fragment from `opsconsole-core` elements and
//! hands the root back to the caller; the enclosing application decides
//! where (and whether) to attach it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      opsconsole-ui                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  views/        - Panel factories (help panel, ...)          │
//! │  config.rs     - Configuration record shared by factories   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod views;

// Re-exports
pub use config::PanelConfig;
pub use views::HelpPanel;
