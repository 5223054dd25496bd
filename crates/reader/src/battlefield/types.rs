/// The six battlefield lanes, ordered top-to-bottom as laid out on screen:
/// the opponent's lands are farthest away, the player's lands nearest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    EnemyLands,
    EnemyOther,
    EnemyCreatures,
    PlayerCreatures,
    PlayerOther,
    PlayerLands,
}

pub(crate) const ROW_ORDER: [Row; ROW_COUNT] = [
    Row::EnemyLands,
    Row::EnemyOther,
    Row::EnemyCreatures,
    Row::PlayerCreatures,
    Row::PlayerOther,
    Row::PlayerLands,
];

impl Row {
    const fn index(self) -> usize {
        match self {
            Row::EnemyLands => 0,
            Row::EnemyOther => 1,
            Row::EnemyCreatures => 2,
            Row::PlayerCreatures => 3,
            Row::PlayerOther => 4,
            Row::PlayerLands => 5,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Row::EnemyLands => "Opponent lands",
            Row::EnemyOther => "Opponent other permanents",
            Row::EnemyCreatures => "Opponent creatures",
            Row::PlayerCreatures => "Your creatures",
            Row::PlayerOther => "Your other permanents",
            Row::PlayerLands => "Your lands",
        }
    }
}

/// One discovered card-like object with the attributes captured at discovery
/// time. The handle is borrowed from the host scene and can go stale between
/// ticks; everything else is a cached copy valid for this table rebuild only.
#[derive(Debug, Clone, PartialEq)]
pub struct CardEntity {
    pub handle: EntityHandle,
    pub name: String,
    pub instance_id: u32,
    pub owner: OwnerSide,
    pub is_land: bool,
    pub is_creature: bool,
    pub is_tapped: bool,
    pub is_attacking: bool,
    pub is_blocking: bool,
    pub has_pending_selection: bool,
    pub attached_to_id: u32,
    pub target_ids: Vec<u32>,
    pub targeted_by_ids: Vec<u32>,
    pub screen_x: f32,
}

/// Row -> ordered entities, rebuilt wholesale on every discovery pass.
/// Invariant after a rebuild: each row is in non-decreasing `screen_x` order
/// and no entity appears in more than one row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowTable {
    rows: [Vec<CardEntity>; ROW_COUNT],
}

impl RowTable {
    pub fn row(&self, row: Row) -> &[CardEntity] {
        &self.rows[row.index()]
    }

    fn row_mut(&mut self, row: Row) -> &mut Vec<CardEntity> {
        &mut self.rows[row.index()]
    }

    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
    }

    pub fn total_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// All entities in fixed row order, rows already top-to-bottom.
    fn iter_all(&self) -> impl Iterator<Item = &CardEntity> {
        self.rows.iter().flatten()
    }
}

/// Single-threaded latch saying "the entity set may have changed". Any
/// collaborator holding a clone may mark it at any time; the navigator
/// consumes it lazily, once, before the next position-mutating operation.
#[derive(Debug, Clone, Default)]
pub struct DirtyFlag(Rc<Cell<bool>>);

impl DirtyFlag {
    pub fn mark(&self) {
        self.0.set(true);
    }

    pub fn is_set(&self) -> bool {
        self.0.get()
    }

    fn consume(&self) -> bool {
        self.0.replace(false)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct WatchSession {
    handle: EntityHandle,
    instance_id: u32,
    snapshot_before: String,
    elapsed_seconds: f32,
}
