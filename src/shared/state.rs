use crate::shared::utils::DbPool;
use crate::tasks::TaskEngine;

#[derive(Clone)]
pub struct AppState {
    pub task_engine: TaskEngine,
}

impl AppState {
    pub fn new(conn: DbPool) -> Self {
        Self {
            task_engine: TaskEngine::new(conn),
        }
    }
}
