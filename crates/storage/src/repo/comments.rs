use crate::{models::SqlComment, Db};
use domain::{Comment, CommentDraft, CommentId, PostId};

impl Db {
    // posts(id) 外键保证帖子在提交时仍然存在
    pub async fn insert_comment(&self, draft: CommentDraft) -> anyhow::Result<Comment> {
        let result = sqlx::query(
            r#"
            INSERT INTO comments (post_id, content, author, creation_date)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(draft.post_id.0)
        .bind(&draft.content)
        .bind(&draft.author)
        .bind(draft.creation_date)
        .execute(&self.pool)
        .await?;

        Ok(Comment {
            id: CommentId(result.last_insert_rowid()),
            post_id: draft.post_id,
            content: draft.content,
            author: draft.author,
            creation_date: draft.creation_date,
        })
    }

    pub async fn get_comment(&self, id: CommentId) -> anyhow::Result<Option<Comment>> {
        let row = sqlx::query_as::<_, SqlComment>(
            r#"
            SELECT id, post_id, content, author, creation_date
            FROM comments
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    pub async fn comment_exists(&self, id: CommentId) -> anyhow::Result<bool> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM comments WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}
