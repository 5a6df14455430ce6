use serde::Serialize;

use domain::{CommentId, CommentView};

const BASE_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_POST_ID: i64 = 1;

#[derive(Serialize)]
struct CreateCommentRequest {
    content: String,
    author: String,
}

/// Usage: client [post_id]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let post_id = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<i64>()?,
        None => DEFAULT_POST_ID,
    };
    let client = reqwest::Client::new();
    let url = format!("{}/posts/{}/comments", BASE_URL, post_id);
    println!("Starting blog comments test client for post {}...", post_id);

    println!("\n[1/2] Submitting comment...");
    let payload = CreateCommentRequest {
        content: "This is a message from the test client!".to_string(),
        author: "Ferris".to_string(),
    };
    let resp = client.post(&url).json(&payload).send().await?;

    if resp.status().is_success() {
        let id: CommentId = resp.json().await?;
        println!("   -> Created comment {}", id);
    } else {
        println!("   -> Failed ({}): {}", resp.status(), resp.text().await?);
        return Ok(());
    }

    println!("\n[2/2] Fetching comments, newest first...");
    let comments: Vec<CommentView> = client.get(&url).send().await?.json().await?;

    println!("   -> Retrieved {} comment(s):", comments.len());
    for c in comments {
        println!("      - [{}] {}: {}", c.creation_date, c.author, c.content);
    }

    Ok(())
}
