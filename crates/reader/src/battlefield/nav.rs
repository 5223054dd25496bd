/// The battlefield navigation state machine: inactive, or active at
/// (row, index). All operations are synchronous and single-threaded; the
/// row table is exclusively owned here and rebuilt, never mutated in place.
pub struct BattlefieldNavigator {
    settings: ReaderSettings,
    provider: AttributeProvider,
    table: RowTable,
    dirty: DirtyFlag,
    watcher: PostActionStateWatcher,
    active: bool,
    row: Row,
    index: usize,
}

impl BattlefieldNavigator {
    pub fn new(settings: ReaderSettings) -> Self {
        let watcher = PostActionStateWatcher::new(settings.watch_timeout_seconds);
        Self {
            settings,
            provider: AttributeProvider::new(),
            table: RowTable::default(),
            dirty: DirtyFlag::default(),
            watcher,
            active: false,
            row: Row::PlayerCreatures,
            index: 0,
        }
    }

    /// Clone of the invalidation latch for external event sources (zone
    /// change notifications and the like).
    pub fn dirty_flag(&self) -> DirtyFlag {
        self.dirty.clone()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn position(&self) -> Option<(Row, usize)> {
        self.active.then_some((self.row, self.index))
    }

    pub fn row_table(&self) -> &RowTable {
        &self.table
    }

    /// One input-handling tick. Runs the watch session poll first, then
    /// consumes this tick's key edges.
    pub fn update(
        &mut self,
        dt_seconds: f32,
        input: &InputSnapshot,
        scene: &mut dyn SceneHost,
        announcer: &mut dyn Announcer,
        inspector: &mut dyn DetailInspector,
    ) {
        self.tick_watcher(dt_seconds, scene, announcer);

        if !self.active {
            if input.pressed(NavAction::Activate) && !input.modifier_down() {
                self.activate(scene, announcer, inspector);
            }
            return;
        }

        if input.pressed(NavAction::Activate) {
            if input.modifier_down() {
                self.deactivate(announcer);
                return;
            }
            self.activate_current(scene, announcer);
        }
        if input.pressed(NavAction::CardLeft) {
            self.move_card(-1, scene, announcer, inspector);
        }
        if input.pressed(NavAction::CardRight) {
            self.move_card(1, scene, announcer, inspector);
        }
        if input.pressed(NavAction::CardFirst) {
            self.jump_first(scene, announcer, inspector);
        }
        if input.pressed(NavAction::CardLast) {
            self.jump_last(scene, announcer, inspector);
        }
        if input.pressed(NavAction::RowUp) {
            self.switch_row(-1, scene, announcer, inspector);
        }
        if input.pressed(NavAction::RowDown) {
            self.switch_row(1, scene, announcer, inspector);
        }
        let shortcuts = [
            (NavAction::SelectLands, Row::PlayerLands, Row::EnemyLands),
            (
                NavAction::SelectCreatures,
                Row::PlayerCreatures,
                Row::EnemyCreatures,
            ),
            (NavAction::SelectOther, Row::PlayerOther, Row::EnemyOther),
        ];
        for (action, local_row, enemy_row) in shortcuts {
            if input.pressed(action) {
                let row = if input.modifier_down() {
                    enemy_row
                } else {
                    local_row
                };
                self.select_row(row, scene, announcer, inspector);
            }
        }
    }

    pub fn activate(
        &mut self,
        scene: &dyn SceneHost,
        announcer: &mut dyn Announcer,
        inspector: &mut dyn DetailInspector,
    ) {
        self.active = true;
        // names may have changed while the navigator was away
        self.provider.reset_for_new_scene();
        self.rebuild_table(scene);
        self.row = Row::PlayerCreatures;
        self.index = 0;
        info!(
            total = self.table.total_count(),
            "battlefield_navigation_activated"
        );
        if self.table.row(self.row).is_empty() {
            announcer.announce(
                &format!("{}, empty", self.row.display_name()),
                Priority::High,
            );
            return;
        }
        announcer.interrupt();
        self.announce_current(true, Priority::High, scene, announcer, inspector);
    }

    pub fn deactivate(&mut self, announcer: &mut dyn Announcer) {
        self.active = false;
        // frees every borrowed entity reference
        self.table.clear();
        self.provider.reset_for_new_scene();
        info!("battlefield_navigation_deactivated");
        announcer.announce("battlefield browsing off", Priority::Normal);
    }

    /// Move within the current row. Clamped: at a boundary the index stays
    /// put and a non-interrupting notice is emitted, every time.
    pub fn move_card(
        &mut self,
        delta: i32,
        scene: &dyn SceneHost,
        announcer: &mut dyn Announcer,
        inspector: &mut dyn DetailInspector,
    ) {
        if !self.active {
            return;
        }
        self.resync_if_dirty(scene);
        let len = self.table.row(self.row).len();
        if len == 0 {
            announcer.announce(ROW_EMPTY_NOTICE, Priority::Normal);
            return;
        }
        let at_boundary = if delta < 0 {
            self.index == 0
        } else {
            self.index + 1 >= len
        };
        if at_boundary {
            let notice = if delta < 0 {
                ROW_BEGIN_NOTICE
            } else {
                ROW_END_NOTICE
            };
            announcer.announce(notice, Priority::Normal);
            return;
        }
        if delta < 0 {
            self.index -= 1;
        } else {
            self.index += 1;
        }
        announcer.interrupt();
        self.announce_current(false, Priority::High, scene, announcer, inspector);
    }

    pub fn jump_first(
        &mut self,
        scene: &dyn SceneHost,
        announcer: &mut dyn Announcer,
        inspector: &mut dyn DetailInspector,
    ) {
        self.jump_to_extreme(true, scene, announcer, inspector);
    }

    pub fn jump_last(
        &mut self,
        scene: &dyn SceneHost,
        announcer: &mut dyn Announcer,
        inspector: &mut dyn DetailInspector,
    ) {
        self.jump_to_extreme(false, scene, announcer, inspector);
    }

    fn jump_to_extreme(
        &mut self,
        first: bool,
        scene: &dyn SceneHost,
        announcer: &mut dyn Announcer,
        inspector: &mut dyn DetailInspector,
    ) {
        if !self.active {
            return;
        }
        self.resync_if_dirty(scene);
        let len = self.table.row(self.row).len();
        if len == 0 {
            announcer.announce(ROW_EMPTY_NOTICE, Priority::Normal);
            return;
        }
        let target = if first { 0 } else { len - 1 };
        if self.index == target {
            let notice = if first { ROW_BEGIN_NOTICE } else { ROW_END_NOTICE };
            announcer.announce(notice, Priority::Normal);
            return;
        }
        self.index = target;
        announcer.interrupt();
        self.announce_current(false, Priority::High, scene, announcer, inspector);
    }

    /// Walk the fixed row order in `direction`, skipping empty rows. Hitting
    /// either end of the order leaves the position unchanged.
    pub fn switch_row(
        &mut self,
        direction: i32,
        scene: &dyn SceneHost,
        announcer: &mut dyn Announcer,
        inspector: &mut dyn DetailInspector,
    ) {
        if !self.active || direction == 0 {
            return;
        }
        self.resync_if_dirty(scene);
        let step = direction.signum();
        let mut position = self.row.index() as i32;
        loop {
            position += step;
            if position < 0 {
                announcer.announce(BATTLEFIELD_BEGIN_NOTICE, Priority::Normal);
                return;
            }
            if position >= ROW_COUNT as i32 {
                announcer.announce(BATTLEFIELD_END_NOTICE, Priority::Normal);
                return;
            }
            let candidate = ROW_ORDER[position as usize];
            if self.table.row(candidate).is_empty() {
                continue;
            }
            self.row = candidate;
            self.index = 0;
            announcer.interrupt();
            self.announce_current(true, Priority::High, scene, announcer, inspector);
            return;
        }
    }

    /// Direct row jump (shortcut keys). An empty target row still becomes
    /// the active row, so a subsequent switch_row has the right anchor.
    pub fn select_row(
        &mut self,
        row: Row,
        scene: &dyn SceneHost,
        announcer: &mut dyn Announcer,
        inspector: &mut dyn DetailInspector,
    ) {
        if !self.active {
            return;
        }
        self.resync_if_dirty(scene);
        self.row = row;
        self.index = 0;
        if self.table.row(row).is_empty() {
            announcer.announce(&format!("{}, empty", row.display_name()), Priority::High);
            return;
        }
        announcer.interrupt();
        self.announce_current(true, Priority::High, scene, announcer, inspector);
    }

    /// Follow an externally-moved focus (e.g. the host's targeting cursor)
    /// to an entity. Returns false when the entity is no longer present in
    /// any row; callers treat that as a no-op, not an error.
    pub fn navigate_to_entity(
        &mut self,
        handle: EntityHandle,
        scene: &dyn SceneHost,
        announcer: &mut dyn Announcer,
        inspector: &mut dyn DetailInspector,
    ) -> bool {
        if !self.active {
            return false;
        }
        self.rebuild_table(scene);
        for row in ROW_ORDER {
            let Some(found) = self
                .table
                .row(row)
                .iter()
                .position(|entity| entity.handle == handle)
            else {
                continue;
            };
            self.row = row;
            self.index = found;
            self.announce_current(false, Priority::Normal, scene, announcer, inspector);
            return true;
        }
        debug!(handle = handle.0, "navigate_target_not_found");
        self.clamp_index_to_row();
        false
    }

    /// Simulated click on the focused entity, then arm the post-action
    /// watcher with its state snapshot. The click side-effect is finalized
    /// before the new session is armed; arming discards any prior session.
    fn activate_current(&mut self, scene: &mut dyn SceneHost, announcer: &mut dyn Announcer) {
        self.resync_if_dirty(scene);
        let Some(entity) = self.table.row(self.row).get(self.index) else {
            announcer.announce(ROW_EMPTY_NOTICE, Priority::Normal);
            return;
        };
        let handle = entity.handle;
        let instance_id = entity.instance_id;
        let facts = CombatFacts::of_entity(entity);
        let resolver = RelationshipResolver::new(&self.table);
        let snapshot_before = state_snapshot_text(
            &facts,
            &resolver,
            scene,
            &mut self.provider,
            &self.settings.stack_container,
        );
        match scene.click(handle) {
            Ok(()) => {
                debug!(instance_id, "entity_activated");
                self.watcher.arm(handle, instance_id, snapshot_before);
            }
            Err(error) => {
                warn!(error = %error, "activation_click_failed");
                announcer.announce(STALE_ACTIVATION_NOTICE, Priority::Normal);
                self.dirty.mark();
            }
        }
    }

    fn tick_watcher(
        &mut self,
        dt_seconds: f32,
        scene: &dyn SceneHost,
        announcer: &mut dyn Announcer,
    ) {
        let Some(handle) = self.watcher.watched_handle() else {
            return;
        };
        let snapshot_now = if scene.is_alive(handle) {
            let attrs = self.provider.attributes_of(scene, handle);
            let facts = CombatFacts::of_attributes(&attrs);
            let resolver = RelationshipResolver::new(&self.table);
            Some(state_snapshot_text(
                &facts,
                &resolver,
                scene,
                &mut self.provider,
                &self.settings.stack_container,
            ))
        } else {
            None
        };
        self.watcher.tick(dt_seconds, snapshot_now, announcer);
    }

    /// Consume the dirty latch, once, before a position-mutating operation.
    /// Row membership can change, so the whole table is rebuilt and the
    /// index clamped to the new row length.
    fn resync_if_dirty(&mut self, scene: &dyn SceneHost) {
        if !self.dirty.consume() {
            return;
        }
        self.table = rediscover(
            scene,
            &mut self.provider,
            &self.settings.battlefield_container,
            self.settings.enemy_screen_fraction,
        );
        self.clamp_index_to_row();
        debug!(
            row = self.row.display_name(),
            index = self.index,
            "row_table_resynced"
        );
    }

    fn rebuild_table(&mut self, scene: &dyn SceneHost) {
        self.table = rediscover(
            scene,
            &mut self.provider,
            &self.settings.battlefield_container,
            self.settings.enemy_screen_fraction,
        );
        self.dirty.consume();
    }

    fn clamp_index_to_row(&mut self) {
        let len = self.table.row(self.row).len();
        if len == 0 {
            self.index = 0;
        } else if self.index >= len {
            self.index = len - 1;
        }
    }

    /// Announce the focused entity (optionally prefixed with its row name
    /// and count) and hand it to the detail-inspection collaborator.
    fn announce_current(
        &mut self,
        include_row_name: bool,
        priority: Priority,
        scene: &dyn SceneHost,
        announcer: &mut dyn Announcer,
        inspector: &mut dyn DetailInspector,
    ) {
        let row_entities = self.table.row(self.row);
        let len = row_entities.len();
        let Some(entity) = row_entities.get(self.index) else {
            return;
        };
        let resolver = RelationshipResolver::new(&self.table);

        let mut text = String::new();
        if include_row_name {
            text.push_str(&format!(
                "{}, {}. ",
                self.row.display_name(),
                format_card_count(len)
            ));
        }
        text.push_str(&entity.name);

        let facts = CombatFacts::of_entity(entity);
        let combat = combat_state_text(
            &facts,
            &resolver,
            scene,
            &mut self.provider,
            &self.settings.stack_container,
        );
        if !combat.is_empty() {
            text.push_str(", ");
            text.push_str(&combat);
        }

        let attachments = resolver.attachments_of(entity);
        if !attachments.is_empty() {
            let names: Vec<String> = attachments.into_iter().map(|(_, name)| name).collect();
            text.push_str(&format!(", with {} attached", join_names(&names)));
        }
        if let Some((_, host_name)) = resolver.attached_target_of(
            entity,
            scene,
            &mut self.provider,
            &self.settings.stack_container,
        ) {
            text.push_str(&format!(", attached to {host_name}"));
        }
        // block links arrive through the same target fields; combat text
        // already covers them for attackers and blockers
        if !entity.is_blocking {
            let targets = resolver.targets_of(
                entity,
                scene,
                &mut self.provider,
                &self.settings.stack_container,
            );
            if !targets.is_empty() {
                let names: Vec<String> = targets.into_iter().map(|(_, name)| name).collect();
                text.push_str(&format!(", targeting {}", join_names(&names)));
            }
        }
        if !entity.is_attacking {
            let targeted_by = resolver.targeted_by_of(
                entity,
                scene,
                &mut self.provider,
                &self.settings.stack_container,
            );
            if !targeted_by.is_empty() {
                let names: Vec<String> = targeted_by.into_iter().map(|(_, name)| name).collect();
                text.push_str(&format!(", targeted by {}", join_names(&names)));
            }
        }

        text.push_str(&format!(", {} of {}", self.index + 1, len));

        let handle = entity.handle;
        announcer.announce(&text, priority);
        inspector.prepare_for_entity(handle, ZoneTag::Battlefield);
    }
}
