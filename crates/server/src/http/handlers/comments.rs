use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::{CommentId, CommentView, NewComment, PostId};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
    pub author: String,
}

impl From<CreateCommentRequest> for NewComment {
    fn from(req: CreateCommentRequest) -> Self {
        NewComment::new(req.content, req.author)
    }
}

pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<Vec<CommentView>>, ApiError> {
    let comments = state
        .comments
        .list_comments_for_post(PostId(post_id))
        .await?;

    Ok(Json(comments))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentId>), ApiError> {
    let id = state
        .comments
        .add_comment(PostId(post_id), payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(id)))
}
