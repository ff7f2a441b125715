//! Help panel view
//!
//! Builds the scaffold for the console help area: a fluid outer container
//! wrapping one empty fluid body row. The body is tagged with a generated
//! id so content can be appended into it later; this factory itself puts
//! nothing inside.

use opsconsole_core::{Element, ElementId, Sequence};
use tracing::debug;

use crate::config::PanelConfig;

/// Handle to a constructed help panel fragment
///
/// Each construction produces an independent, detached fragment exclusively
/// owned by this handle. The factory keeps no state between constructions
/// beyond the id generator's counter.
pub struct HelpPanel {
    config: PanelConfig,
    root: Element,
    body_id: ElementId,
}

impl HelpPanel {
    /// Build a help panel using the process-wide id generator
    pub fn new(config: PanelConfig) -> Self {
        Self::with_sequence(config, Sequence::global())
    }

    /// Build a help panel drawing the body id from an injected generator
    pub fn with_sequence(config: PanelConfig, sequence: &Sequence) -> Self {
        let body_id = sequence.next();
        let root = Element::div().class("container-fluid").child(
            Element::div()
                .id(body_id.to_string())
                .class("row-fluid"),
        );
        debug!(%body_id, "built help panel fragment");

        Self {
            config,
            root,
            body_id,
        }
    }

    /// Root of the fragment, body included
    ///
    /// The node is detached; attaching it to a visible tree is the caller's
    /// responsibility.
    pub fn element(&self) -> &Element {
        &self.root
    }

    /// The body row
    ///
    /// The root wraps exactly one child, so this is always the node the
    /// builder put there — even after a caller rewrote it through
    /// [`HelpPanel::body_mut`].
    pub fn body(&self) -> &Element {
        &self.root.children()[0]
    }

    /// Mutable access to the body row, for callers filling in content
    ///
    /// The body can be edited or replaced wholesale, but it cannot be
    /// detached from the root.
    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.root.children_mut()[0]
    }

    /// Id assigned to the body row at construction
    pub fn body_id(&self) -> ElementId {
        self.body_id
    }

    /// The configuration this panel was built with
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }
}
