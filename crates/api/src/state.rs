//! Application state shared across handlers.

use std::sync::Arc;

use brain_core::Brain;
use database::{Database, MonotonicIds};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Preference extraction, scoring, agreements and mediation.
    pub brain: Arc<dyn Brain>,
    /// Room id source, shared by every request in the process.
    pub room_ids: Arc<MonotonicIds>,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, brain: Arc<dyn Brain>) -> Self {
        Self::with_room_ids(db, brain, MonotonicIds::new())
    }

    /// Create application state with a pre-seeded room id generator.
    pub fn with_room_ids(db: Database, brain: Arc<dyn Brain>, room_ids: MonotonicIds) -> Self {
        Self {
            db,
            brain,
            room_ids: Arc::new(room_ids),
        }
    }
}
