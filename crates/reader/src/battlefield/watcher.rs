#[derive(Debug, Clone, Default, PartialEq)]
enum WatchState {
    #[default]
    Idle,
    Watching(WatchSession),
}

/// Bounded cooperative polling window armed after a user activation:
/// captures the entity's observable state and announces only the delta once
/// it diverges. Spans ticks by storing state between calls, never by
/// blocking. At most one session is live; arming a new one silently
/// discards the old.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PostActionStateWatcher {
    state: WatchState,
    timeout_seconds: f32,
}

impl PostActionStateWatcher {
    pub(crate) fn new(timeout_seconds: f32) -> Self {
        Self {
            state: WatchState::Idle,
            timeout_seconds,
        }
    }

    pub(crate) fn arm(&mut self, handle: EntityHandle, instance_id: u32, snapshot_before: String) {
        self.state = WatchState::Watching(WatchSession {
            handle,
            instance_id,
            snapshot_before,
            elapsed_seconds: 0.0,
        });
    }

    pub(crate) fn is_watching(&self) -> bool {
        matches!(self.state, WatchState::Watching(_))
    }

    pub(crate) fn watched_handle(&self) -> Option<EntityHandle> {
        match &self.state {
            WatchState::Watching(session) => Some(session.handle),
            WatchState::Idle => None,
        }
    }

    /// One poll. `snapshot_now` is `None` when the watched handle went
    /// stale; that drops the session silently, as does the timeout.
    pub(crate) fn tick(
        &mut self,
        dt_seconds: f32,
        snapshot_now: Option<String>,
        announcer: &mut dyn Announcer,
    ) {
        let WatchState::Watching(session) = &mut self.state else {
            return;
        };
        session.elapsed_seconds += dt_seconds;
        if session.elapsed_seconds >= self.timeout_seconds {
            debug!(
                instance_id = session.instance_id,
                "watch_session_timed_out"
            );
            self.state = WatchState::Idle;
            return;
        }
        let Some(now) = snapshot_now else {
            debug!(
                instance_id = session.instance_id,
                "watched_entity_went_stale"
            );
            self.state = WatchState::Idle;
            return;
        };
        let Some(delta) = divergence_suffix(&session.snapshot_before, &now) else {
            return;
        };
        announcer.announce(&delta, Priority::Normal);
        self.state = WatchState::Idle;
    }
}

/// The part of `now` that was not already said: everything after the longest
/// common prefix, with separator residue trimmed. If before="attacking" and
/// now="attacking, blocked by X", only "blocked by X" is worth announcing.
/// Returns `None` while the snapshots still agree or the state emptied out.
fn divergence_suffix(before: &str, now: &str) -> Option<String> {
    if before == now {
        return None;
    }
    if now.is_empty() {
        return None;
    }
    let common = common_prefix_len(before, now);
    let suffix = now[common..].trim_start_matches([',', ' ']);
    if suffix.is_empty() {
        Some(now.to_string())
    } else {
        Some(suffix.to_string())
    }
}
