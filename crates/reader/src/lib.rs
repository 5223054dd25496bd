pub mod battlefield;
pub mod settings;

pub use battlefield::{BattlefieldNavigator, CardEntity, DirtyFlag, Row, RowTable};
pub use settings::ReaderSettings;

use tracing_subscriber::EnvFilter;

/// Install an env-filtered compact subscriber. For embedders whose host
/// process has no logger of its own; calling it twice is an error in
/// tracing-subscriber, so hosts that already log should skip it.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
