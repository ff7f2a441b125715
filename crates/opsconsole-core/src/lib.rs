//! Opsconsole Core Library
//!
//! This crate provides the non-visual services the opsconsole UI is built
//! on, including:
//! - Markup tree construction and query
//! - Process-unique identifier sequencing
//! - Publish/subscribe message bus shared by panels
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     opsconsole-core                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  markup/       - Element tree, builder, HTML rendering      │
//! │  sequence.rs   - Monotonic element id generator             │
//! │  bus.rs        - Topic-keyed publish/subscribe channel      │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod bus;
pub mod error;
pub mod markup;
pub mod sequence;

// Re-export commonly used types
pub use bus::{BusMessage, Channel};
pub use error::{BusError, Error, Result};
pub use markup::Element;
pub use sequence::{ElementId, Sequence};
