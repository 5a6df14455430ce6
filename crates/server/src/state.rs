use std::sync::Arc;

use storage::Db;
use workflow::CommentService;

#[derive(Clone)]
pub struct AppState {
    pub comments: Arc<CommentService<Db>>,
}

impl AppState {
    pub fn new(db: Db) -> Self {
        Self {
            comments: Arc::new(CommentService::new(db)),
        }
    }
}
