#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    CardLeft,
    CardRight,
    CardFirst,
    CardLast,
    RowUp,
    RowDown,
    SelectLands,
    SelectCreatures,
    SelectOther,
    Activate,
}

const ACTION_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ActionStates {
    pressed: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: NavAction, pressed: bool) {
        self.pressed[action.index()] = pressed;
    }

    pub(crate) fn pressed(&self, action: NavAction) -> bool {
        self.pressed[action.index()]
    }
}

impl NavAction {
    const fn index(self) -> usize {
        match self {
            NavAction::CardLeft => 0,
            NavAction::CardRight => 1,
            NavAction::CardFirst => 2,
            NavAction::CardLast => 3,
            NavAction::RowUp => 4,
            NavAction::RowDown => 5,
            NavAction::SelectLands => 6,
            NavAction::SelectCreatures => 7,
            NavAction::SelectOther => 8,
            NavAction::Activate => 9,
        }
    }
}

/// Already-debounced "key went down this tick" edges plus the modifier
/// (secondary) flag, captured once per input-handling tick. This is not raw
/// hold state; each edge fires exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    actions: ActionStates,
    modifier_down: bool,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_action_pressed(mut self, action: NavAction, pressed: bool) -> Self {
        self.actions.set(action, pressed);
        self
    }

    pub fn with_modifier_down(mut self, modifier_down: bool) -> Self {
        self.modifier_down = modifier_down;
        self
    }

    pub fn pressed(&self, action: NavAction) -> bool {
        self.actions.pressed(action)
    }

    pub fn modifier_down(&self) -> bool {
        self.modifier_down
    }
}
