use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use host::{
    Announcer, AttributeProvider, DetailInspector, EntityHandle, InputSnapshot, NavAction,
    OwnerSide, Priority, RawAttributes, SceneHost, ZoneTag,
};
use tracing::{debug, info, warn};

use crate::settings::ReaderSettings;

const ROW_COUNT: usize = 6;
const SELECTION_PENDING_TEXT: &str = "selection pending";
const ROW_EMPTY_NOTICE: &str = "row is empty";
const ROW_BEGIN_NOTICE: &str = "beginning of row";
const ROW_END_NOTICE: &str = "end of row";
const BATTLEFIELD_BEGIN_NOTICE: &str = "beginning of battlefield";
const BATTLEFIELD_END_NOTICE: &str = "end of battlefield";
const STALE_ACTIVATION_NOTICE: &str = "card is no longer there";

include!("types.rs");
include!("classify.rs");
include!("discovery.rs");
include!("relations.rs");
include!("watcher.rs");
include!("nav.rs");
include!("util.rs");

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
