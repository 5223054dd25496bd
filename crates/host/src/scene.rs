use thiserror::Error;

/// Opaque reference to a live object in the externally-owned scene graph.
///
/// The host may destroy the underlying object between any two polls, so a
/// handle is only a name: revalidate with [`SceneHost::is_alive`] before
/// trusting anything previously derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerSide {
    Local,
    Opponent,
}

/// Zone a focused entity was found in, passed to the detail-inspection
/// collaborator so it knows which browsing mode to prepare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneTag {
    Battlefield,
    Stack,
}

/// Attributes pulled out of one scene object by the host boundary.
///
/// Every field the host may fail to resolve is either an `Option` or has a
/// documented zero/false default; lookups across this boundary never fail
/// loudly. Consumers apply the fallback policy, they never introspect the
/// host object themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAttributes {
    /// Host-assigned instance id. 0 means invalid/unassigned.
    pub instance_id: u32,
    /// Primary ownership attribute, when the host can resolve it.
    pub owner: Option<OwnerSide>,
    /// Ownership tag derived from the object's ancestry, the first fallback.
    pub ancestry_owner: Option<OwnerSide>,
    pub is_creature: Option<bool>,
    pub is_land: Option<bool>,
    pub is_tapped: bool,
    pub is_attacking: bool,
    pub is_blocking: bool,
    /// Host highlight indicating the object awaits a confirm/selection step.
    pub has_pending_selection: bool,
    /// Instance id of the object this one is attached to. 0 means none.
    pub attached_to_id: u32,
    pub target_ids: Vec<u32>,
    pub targeted_by_ids: Vec<u32>,
    pub screen_x: f32,
    /// Vertical viewport position, 0.0 = top edge, 1.0 = bottom edge.
    pub screen_y_norm: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClickError {
    #[error("entity handle {0} no longer refers to a live object")]
    StaleHandle(u64),
}

/// Boundary to the external scene. Implementations wrap whatever
/// introspection mechanism the host process offers; nothing behind this
/// trait is allowed to panic across the boundary.
pub trait SceneHost {
    /// All live descendants of the named container, or `None` when the
    /// container itself is absent (e.g. the battlefield is not on screen).
    fn list_entities_under(&self, container: &str) -> Option<Vec<EntityHandle>>;

    fn is_alive(&self, handle: EntityHandle) -> bool;

    /// Whether the object passes the host's card-detection heuristic.
    fn is_card_like(&self, handle: EntityHandle) -> bool;

    fn is_ancestor_of(&self, outer: EntityHandle, inner: EntityHandle) -> bool;

    /// Total: unresolvable fields come back as the documented defaults.
    fn attributes_of(&self, handle: EntityHandle) -> RawAttributes;

    fn display_name_of(&self, handle: EntityHandle) -> Option<String>;

    /// Simulated primary-action click on the object.
    fn click(&mut self, handle: EntityHandle) -> Result<(), ClickError>;
}
