mod models;

pub use models::{Comment, CommentDraft, CommentId, CommentView, NewComment, Post, PostId, MAX_CONTENT_CHARS};
