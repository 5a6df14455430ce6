use chrono::NaiveDateTime;
use domain::{Comment, CommentId, Post, PostId};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct SqlPost {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<SqlPost> for Post {
    fn from(sql: SqlPost) -> Self {
        Post {
            id: PostId(sql.id),
            title: sql.title,
            content: sql.content,
        }
    }
}

#[derive(FromRow)]
pub struct SqlComment {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub author: String,
    pub creation_date: NaiveDateTime,
}

impl From<SqlComment> for Comment {
    fn from(sql: SqlComment) -> Self {
        Comment {
            id: CommentId(sql.id),
            post_id: PostId(sql.post_id),
            content: sql.content,
            author: sql.author,
            creation_date: sql.creation_date,
        }
    }
}
