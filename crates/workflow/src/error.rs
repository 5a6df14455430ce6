use domain::PostId;

#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    #[error("Post not found with id {0}")]
    PostNotFound(PostId),

    #[error("Comment content is too long ({actual} characters, max {max})")]
    ContentTooLong { max: usize, actual: usize },

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}
