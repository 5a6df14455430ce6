use async_trait::async_trait;
use domain::{Comment, CommentDraft, CommentId, Post, PostId};
use storage::Db;

/// Read access to posts and the comments attached to them.
#[async_trait]
pub trait PostLookup: Send + Sync {
    async fn find_post_by_id(&self, id: PostId) -> anyhow::Result<Option<Post>>;

    /// The post together with its comments in insertion order, read as one unit.
    async fn find_post_with_comments(
        &self,
        id: PostId,
    ) -> anyhow::Result<Option<(Post, Vec<Comment>)>>;
}

#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn save_comment(&self, draft: CommentDraft) -> anyhow::Result<Comment>;

    async fn find_comment_by_id(&self, id: CommentId) -> anyhow::Result<Option<Comment>>;

    async fn comment_exists(&self, id: CommentId) -> anyhow::Result<bool>;
}

#[async_trait]
impl PostLookup for Db {
    async fn find_post_by_id(&self, id: PostId) -> anyhow::Result<Option<Post>> {
        self.find_post(id).await
    }

    async fn find_post_with_comments(
        &self,
        id: PostId,
    ) -> anyhow::Result<Option<(Post, Vec<Comment>)>> {
        Db::find_post_with_comments(self, id).await
    }
}

#[async_trait]
impl CommentStore for Db {
    async fn save_comment(&self, draft: CommentDraft) -> anyhow::Result<Comment> {
        self.insert_comment(draft).await
    }

    async fn find_comment_by_id(&self, id: CommentId) -> anyhow::Result<Option<Comment>> {
        self.get_comment(id).await
    }

    async fn comment_exists(&self, id: CommentId) -> anyhow::Result<bool> {
        Db::comment_exists(self, id).await
    }
}
