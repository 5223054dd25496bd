/// The observable-state fields the watcher and announcer both read, borrowed
/// from either a cached `CardEntity` or a fresh `RawAttributes` poll.
struct CombatFacts<'a> {
    instance_id: u32,
    is_tapped: bool,
    is_attacking: bool,
    is_blocking: bool,
    has_pending_selection: bool,
    target_ids: &'a [u32],
    targeted_by_ids: &'a [u32],
}

impl<'a> CombatFacts<'a> {
    fn of_entity(entity: &'a CardEntity) -> Self {
        Self {
            instance_id: entity.instance_id,
            is_tapped: entity.is_tapped,
            is_attacking: entity.is_attacking,
            is_blocking: entity.is_blocking,
            has_pending_selection: entity.has_pending_selection,
            target_ids: &entity.target_ids,
            targeted_by_ids: &entity.targeted_by_ids,
        }
    }

    fn of_attributes(attrs: &'a RawAttributes) -> Self {
        Self {
            instance_id: attrs.instance_id,
            is_tapped: attrs.is_tapped,
            is_attacking: attrs.is_attacking,
            is_blocking: attrs.is_blocking,
            has_pending_selection: attrs.has_pending_selection,
            target_ids: &attrs.target_ids,
            targeted_by_ids: &attrs.targeted_by_ids,
        }
    }
}

/// Combat text for an entity: attacker status with its blockers, blocker
/// status with its block targets, tapped last.
fn combat_state_text(
    facts: &CombatFacts<'_>,
    resolver: &RelationshipResolver<'_>,
    scene: &dyn SceneHost,
    provider: &mut AttributeProvider,
    stack_container: &str,
) -> String {
    let mut parts: Vec<String> = Vec::new();
    if facts.is_attacking {
        parts.push("attacking".to_string());
        let blockers = resolver.resolve_ids(
            facts.targeted_by_ids,
            facts.instance_id,
            scene,
            provider,
            stack_container,
        );
        if !blockers.is_empty() {
            let names: Vec<String> = blockers.into_iter().map(|(_, name)| name).collect();
            parts.push(format!("blocked by {}", join_names(&names)));
        }
    }
    if facts.is_blocking {
        let targets = resolver.resolve_ids(
            facts.target_ids,
            facts.instance_id,
            scene,
            provider,
            stack_container,
        );
        if targets.is_empty() {
            parts.push("blocking".to_string());
        } else {
            let names: Vec<String> = targets.into_iter().map(|(_, name)| name).collect();
            parts.push(format!("blocking {}", join_names(&names)));
        }
    }
    if facts.is_tapped {
        parts.push("tapped".to_string());
    }
    parts.join(", ")
}

/// Watch-session snapshot: combat text wins over the generic selection
/// indicator because combat text already subsumes selection semantics.
fn state_snapshot_text(
    facts: &CombatFacts<'_>,
    resolver: &RelationshipResolver<'_>,
    scene: &dyn SceneHost,
    provider: &mut AttributeProvider,
    stack_container: &str,
) -> String {
    let combat = combat_state_text(facts, resolver, scene, provider, stack_container);
    if !combat.is_empty() {
        return combat;
    }
    if facts.has_pending_selection {
        return SELECTION_PENDING_TEXT.to_string();
    }
    String::new()
}

fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [single] => single.clone(),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}

fn format_card_count(count: usize) -> String {
    if count == 1 {
        "1 card".to_string()
    } else {
        format!("{count} cards")
    }
}

/// Byte length of the longest common prefix, aligned to char boundaries.
fn common_prefix_len(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (char_a, char_b) in a.chars().zip(b.chars()) {
        if char_a != char_b {
            break;
        }
        len += char_a.len_utf8();
    }
    len
}
