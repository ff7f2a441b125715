//! Configuration record shared by panel factories

use opsconsole_core::Channel;

/// Configuration handed to every panel factory
///
/// All factories take the same record so callers can wire panels uniformly.
/// Fields a given panel does not use are simply ignored by it.
#[derive(Debug, Clone, Default)]
pub struct PanelConfig {
    /// Handle to the console message bus
    ///
    /// Panels that coordinate with siblings publish and subscribe through
    /// it. `None` is valid for panels that never touch the bus.
    pub channel: Option<Channel>,
}

impl PanelConfig {
    /// Configuration with no bus handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration carrying a bus handle
    pub fn with_channel(channel: Channel) -> Self {
        Self {
            channel: Some(channel),
        }
    }
}
