use std::collections::HashMap;

use tracing::debug;

use crate::scene::{EntityHandle, RawAttributes, SceneHost};

pub const UNKNOWN_CARD_NAME: &str = "unknown card";

/// Explicitly scoped gateway for attribute and name lookups.
///
/// The engine never introspects host objects itself; everything goes through
/// one provider instance with a defined lifecycle. The name cache is valid
/// for a single scene: instance ids can be reassigned when the host tears a
/// scene down, so callers must invoke [`AttributeProvider::reset_for_new_scene`]
/// at every scene boundary.
#[derive(Debug, Clone, Default)]
pub struct AttributeProvider {
    name_cache: HashMap<u32, String>,
}

impl AttributeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_for_new_scene(&mut self) {
        self.name_cache.clear();
    }

    pub fn attributes_of(&self, scene: &dyn SceneHost, handle: EntityHandle) -> RawAttributes {
        scene.attributes_of(handle)
    }

    /// Display name for an entity, cached by instance id within the scene.
    /// Falls back to a generic name rather than failing.
    pub fn name_of(
        &mut self,
        scene: &dyn SceneHost,
        handle: EntityHandle,
        instance_id: u32,
    ) -> String {
        if instance_id != 0 {
            if let Some(cached) = self.name_cache.get(&instance_id) {
                return cached.clone();
            }
        }
        let Some(name) = scene.display_name_of(handle) else {
            debug!(instance_id, "display_name_unresolved");
            return UNKNOWN_CARD_NAME.to_string();
        };
        if instance_id != 0 {
            self.name_cache.insert(instance_id, name.clone());
        }
        name
    }

    /// Resolve an instance id to a name by scanning the named zone. Used as
    /// the secondary lookup when a related id is not among the discovered
    /// battlefield entities. Returns `None` when the zone is absent or no
    /// live entity carries the id.
    pub fn name_in_zone(
        &mut self,
        scene: &dyn SceneHost,
        container: &str,
        instance_id: u32,
    ) -> Option<String> {
        if instance_id == 0 {
            return None;
        }
        let handles = scene.list_entities_under(container)?;
        for handle in handles {
            if !scene.is_alive(handle) {
                continue;
            }
            if scene.attributes_of(handle).instance_id == instance_id {
                return Some(self.name_of(scene, handle, instance_id));
            }
        }
        None
    }
}
