pub mod announce;
pub mod attributes;
pub mod input;
pub mod scene;

pub use announce::{Announcer, DetailInspector, Priority};
pub use attributes::{AttributeProvider, UNKNOWN_CARD_NAME};
pub use input::{InputSnapshot, NavAction};
pub use scene::{ClickError, EntityHandle, OwnerSide, RawAttributes, SceneHost, ZoneTag};
