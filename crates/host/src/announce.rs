use crate::scene::{EntityHandle, ZoneTag};

/// High is reserved for user-explicit navigation; it bypasses any
/// duplicate-suppression the announcer applies. Normal is for passive
/// restatement and boundary notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Normal,
    High,
}

/// Speech-output collaborator. The engine only hands it plain strings.
pub trait Announcer {
    fn announce(&mut self, text: &str, priority: Priority);

    /// Cut off whatever is currently being spoken.
    fn interrupt(&mut self);
}

/// Detail-inspection collaborator: notified which entity has focus so a
/// separate zoomed-detail browsing mode is available next. Fire-and-forget;
/// the engine never waits on it.
pub trait DetailInspector {
    fn prepare_for_entity(&mut self, handle: EntityHandle, zone: ZoneTag);
}
