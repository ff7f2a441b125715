//! Markup tree construction and query
//!
//! Panels build their fragments as owned [`Element`] trees instead of
//! concatenating markup strings and re-parsing them. The builder keeps
//! containment a structural invariant and the renderer escapes attribute
//! values, so an id or class name can never break the emitted markup.

mod element;

pub use element::Element;
