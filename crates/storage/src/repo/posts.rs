use crate::{
    models::{SqlComment, SqlPost},
    Db,
};
use domain::{Comment, Post, PostId};

impl Db {
    pub async fn find_post(&self, id: PostId) -> anyhow::Result<Option<Post>> {
        let row = sqlx::query_as::<_, SqlPost>("SELECT id, title, content FROM posts WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// The post and its comments in insertion order, read from one snapshot.
    pub async fn find_post_with_comments(
        &self,
        id: PostId,
    ) -> anyhow::Result<Option<(Post, Vec<Comment>)>> {
        let mut tx = self.pool.begin().await?;

        let post = sqlx::query_as::<_, SqlPost>("SELECT id, title, content FROM posts WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(post) = post else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, SqlComment>(
            r#"
            SELECT id, post_id, content, author, creation_date
            FROM comments
            WHERE post_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(id.0)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let comments = rows.into_iter().map(Into::into).collect();
        Ok(Some((post.into(), comments)))
    }

    // 帖子由其他子系统管理；这里只用于初始化数据和测试
    pub async fn create_post(&self, title: &str, content: &str) -> anyhow::Result<PostId> {
        let result = sqlx::query("INSERT INTO posts (title, content) VALUES (?, ?)")
            .bind(title)
            .bind(content)
            .execute(&self.pool)
            .await?;

        Ok(PostId(result.last_insert_rowid()))
    }
}
