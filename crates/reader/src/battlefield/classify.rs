/// Pure, total row classification. Land outranks creature when a card is
/// somehow both; lands that are also a listed creature type are never
/// observed in practice, but land wins the tie.
pub(crate) fn classify(owner: OwnerSide, is_land: bool, is_creature: bool) -> Row {
    match (owner, is_land, is_creature) {
        (OwnerSide::Opponent, true, _) => Row::EnemyLands,
        (OwnerSide::Opponent, false, true) => Row::EnemyCreatures,
        (OwnerSide::Opponent, false, false) => Row::EnemyOther,
        (OwnerSide::Local, true, _) => Row::PlayerLands,
        (OwnerSide::Local, false, true) => Row::PlayerCreatures,
        (OwnerSide::Local, false, false) => Row::PlayerOther,
    }
}

/// Ownership fallback chain: primary attribute, then the ancestry-derived
/// tag, then the screen-position heuristic — an entity with no resolvable
/// owner is the opponent's iff it sits in the top `enemy_screen_fraction`
/// of the viewport. This is the dominant correctness mechanism when the
/// host cannot resolve ownership.
pub(crate) fn resolve_owner(attrs: &RawAttributes, enemy_screen_fraction: f32) -> OwnerSide {
    if let Some(owner) = attrs.owner {
        return owner;
    }
    if let Some(owner) = attrs.ancestry_owner {
        return owner;
    }
    if attrs.screen_y_norm < enemy_screen_fraction {
        OwnerSide::Opponent
    } else {
        OwnerSide::Local
    }
}

/// Unresolvable type flags default to false: an unclassifiable entity shows
/// up under the player's rows rather than being hidden.
fn classify_attributes(attrs: &RawAttributes, enemy_screen_fraction: f32) -> Row {
    classify(
        resolve_owner(attrs, enemy_screen_fraction),
        attrs.is_land.unwrap_or(false),
        attrs.is_creature.unwrap_or(false),
    )
}
