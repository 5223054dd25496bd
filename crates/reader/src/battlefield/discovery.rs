/// Full rebuild of the row table from a fresh scene poll. There is no
/// incremental update path: entity identity across frames is not stable
/// enough to diff safely, so every pass starts from scratch.
///
/// A missing battlefield container is recoverable (the screen may simply not
/// be showing a battlefield yet): logged, all rows returned empty.
pub(crate) fn rediscover(
    scene: &dyn SceneHost,
    provider: &mut AttributeProvider,
    battlefield_container: &str,
    enemy_screen_fraction: f32,
) -> RowTable {
    let mut table = RowTable::default();
    let Some(handles) = scene.list_entities_under(battlefield_container) else {
        debug!(
            container = battlefield_container,
            "battlefield_container_missing"
        );
        return table;
    };

    let qualified: Vec<EntityHandle> = handles
        .into_iter()
        .filter(|handle| scene.is_alive(*handle) && scene.is_card_like(*handle))
        .collect();
    let qualified = dedup_nested_cards(scene, qualified);

    for handle in qualified {
        let attrs = provider.attributes_of(scene, handle);
        let row = classify_attributes(&attrs, enemy_screen_fraction);
        let name = provider.name_of(scene, handle, attrs.instance_id);
        table.row_mut(row).push(CardEntity {
            handle,
            name,
            instance_id: attrs.instance_id,
            owner: resolve_owner(&attrs, enemy_screen_fraction),
            is_land: attrs.is_land.unwrap_or(false),
            is_creature: attrs.is_creature.unwrap_or(false),
            is_tapped: attrs.is_tapped,
            is_attacking: attrs.is_attacking,
            is_blocking: attrs.is_blocking,
            has_pending_selection: attrs.has_pending_selection,
            attached_to_id: attrs.attached_to_id,
            target_ids: attrs.target_ids,
            targeted_by_ids: attrs.targeted_by_ids,
            screen_x: attrs.screen_x,
        });
    }

    for row in ROW_ORDER {
        // stable sort: equal screen positions keep encounter order
        table
            .row_mut(row)
            .sort_by(|a, b| a.screen_x.total_cmp(&b.screen_x));
    }
    debug!(total = table.total_count(), "battlefield_rediscovered");
    table
}

/// Drop any card-like object that sits under another qualifying object, so
/// visual sub-components are not counted twice. Siblings where neither is an
/// ancestor of the other both stay in.
fn dedup_nested_cards(scene: &dyn SceneHost, handles: Vec<EntityHandle>) -> Vec<EntityHandle> {
    let mut kept = Vec::with_capacity(handles.len());
    'candidates: for (index, candidate) in handles.iter().enumerate() {
        for (other_index, other) in handles.iter().enumerate() {
            if index != other_index && scene.is_ancestor_of(*other, *candidate) {
                continue 'candidates;
            }
        }
        kept.push(*candidate);
    }
    kept
}
