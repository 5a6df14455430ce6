use std::sync::Arc;

use domain::{CommentDraft, CommentId, CommentView, NewComment, Post, PostId, MAX_CONTENT_CHARS};
use tracing::{info, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::CommentError;
use crate::store::{CommentStore, PostLookup};

/// Creates and lists comments, only ever for posts that exist.
pub struct CommentService<S> {
    store: S,
    clock: Arc<dyn Clock>,
}

impl<S> CommentService<S>
where
    S: PostLookup + CommentStore,
{
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: S, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Comments of `post_id`, most recent first. Comments sharing a timestamp
    /// keep their insertion order.
    pub async fn list_comments_for_post(
        &self,
        post_id: PostId,
    ) -> Result<Vec<CommentView>, CommentError> {
        let Some((_, mut comments)) = self.store.find_post_with_comments(post_id).await? else {
            return Err(not_found(post_id));
        };

        comments.sort_by(|a, b| b.creation_date.cmp(&a.creation_date));

        Ok(comments.into_iter().map(CommentView::from).collect())
    }

    pub async fn add_comment(
        &self,
        post_id: PostId,
        new_comment: NewComment,
    ) -> Result<CommentId, CommentError> {
        let post = self.require_post(post_id).await?;

        let actual = new_comment.content_chars();
        if actual > MAX_CONTENT_CHARS {
            return Err(CommentError::ContentTooLong {
                max: MAX_CONTENT_CHARS,
                actual,
            });
        }

        let draft = CommentDraft {
            post_id: post.id,
            content: new_comment.content,
            author: new_comment.author,
            creation_date: self.clock.now(),
        };
        let comment = self.store.save_comment(draft).await?;

        info!("Comment {} added to post {} by {}", comment.id, post.id, comment.author);
        Ok(comment.id)
    }

    async fn require_post(&self, post_id: PostId) -> Result<Post, CommentError> {
        match self.store.find_post_by_id(post_id).await? {
            Some(post) => Ok(post),
            None => Err(not_found(post_id)),
        }
    }
}

fn not_found(post_id: PostId) -> CommentError {
    warn!("Post {} not found", post_id);
    CommentError::PostNotFound(post_id)
}
