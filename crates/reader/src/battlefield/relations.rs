/// Attachment/targeting links reconstructed from the flat entity scan by
/// matching foreign instance-id fields against an id -> entity index.
///
/// Built per query over the current table and discarded with it: instance
/// ids can be reassigned by the host between frames, so nothing here is ever
/// cached across a rebuild. Traversal is lookup-by-id with explicit
/// not-found and self guards, never pointer-chasing.
pub(crate) struct RelationshipResolver<'a> {
    table: &'a RowTable,
    by_id: HashMap<u32, &'a CardEntity>,
}

impl<'a> RelationshipResolver<'a> {
    pub(crate) fn new(table: &'a RowTable) -> Self {
        let mut by_id = HashMap::new();
        for entity in table.iter_all() {
            if entity.instance_id != 0 {
                by_id.entry(entity.instance_id).or_insert(entity);
            }
        }
        Self { table, by_id }
    }

    /// Entities whose `attached_to_id` points at this one, in row order.
    /// An entity claiming to be attached to itself is host-side data
    /// corruption and is excluded.
    pub(crate) fn attachments_of(&self, of: &CardEntity) -> Vec<(u32, String)> {
        let mut found = Vec::new();
        if of.instance_id == 0 {
            return found;
        }
        for entity in self.table.iter_all() {
            if entity.instance_id == of.instance_id {
                continue;
            }
            if entity.attached_to_id == of.instance_id {
                found.push((entity.instance_id, entity.name.clone()));
            }
        }
        found
    }

    /// The entity this one is attached to, if that relation resolves to a
    /// name. Self-references are discarded.
    pub(crate) fn attached_target_of(
        &self,
        of: &CardEntity,
        scene: &dyn SceneHost,
        provider: &mut AttributeProvider,
        stack_container: &str,
    ) -> Option<(u32, String)> {
        if of.attached_to_id == 0 || of.attached_to_id == of.instance_id {
            return None;
        }
        self.resolve_name(of.attached_to_id, scene, provider, stack_container)
            .map(|name| (of.attached_to_id, name))
    }

    pub(crate) fn targets_of(
        &self,
        of: &CardEntity,
        scene: &dyn SceneHost,
        provider: &mut AttributeProvider,
        stack_container: &str,
    ) -> Vec<(u32, String)> {
        self.resolve_ids(&of.target_ids, of.instance_id, scene, provider, stack_container)
    }

    pub(crate) fn targeted_by_of(
        &self,
        of: &CardEntity,
        scene: &dyn SceneHost,
        provider: &mut AttributeProvider,
        stack_container: &str,
    ) -> Vec<(u32, String)> {
        self.resolve_ids(
            &of.targeted_by_ids,
            of.instance_id,
            scene,
            provider,
            stack_container,
        )
    }

    /// Resolve a sequence of related ids to `(id, name)` pairs, preserving
    /// order. Ids that resolve nowhere are omitted: a missing relation
    /// degrades to silence, never to an error.
    pub(crate) fn resolve_ids(
        &self,
        ids: &[u32],
        self_id: u32,
        scene: &dyn SceneHost,
        provider: &mut AttributeProvider,
        stack_container: &str,
    ) -> Vec<(u32, String)> {
        ids.iter()
            .filter(|id| **id != 0 && **id != self_id)
            .filter_map(|id| {
                self.resolve_name(*id, scene, provider, stack_container)
                    .map(|name| (*id, name))
            })
            .collect()
    }

    /// Primary lookup against the battlefield index, then a secondary scan
    /// of the stack zone before giving up.
    fn resolve_name(
        &self,
        instance_id: u32,
        scene: &dyn SceneHost,
        provider: &mut AttributeProvider,
        stack_container: &str,
    ) -> Option<String> {
        if let Some(entity) = self.by_id.get(&instance_id) {
            return Some(entity.name.clone());
        }
        provider.name_in_zone(scene, stack_container, instance_id)
    }
}
