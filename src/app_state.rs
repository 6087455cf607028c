use std::sync::Arc;

use crate::scout::Scout;

#[derive(Clone)]
pub struct AppState {
    pub scout: Arc<Scout>,
}

impl AppState {
    pub fn new(scout: Scout) -> Self {
        Self {
            scout: Arc::new(scout),
        }
    }
}
