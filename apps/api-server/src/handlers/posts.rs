//! Post handlers - posts, likes and comments. Every route requires a caller.

use actix_web::{HttpResponse, web};

use devconnect_core::domain::{NewComment, NewPost};
use devconnect_core::error::{EntityKind, parse_id};
use devconnect_shared::MessageResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<NewPost>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .create_post(identity.user_id, body.into_inner())
        .await?;

    tracing::info!(post_id = %post.id, user_id = %identity.user_id, "Post created");
    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>, _identity: Identity) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = parse_id(&path, EntityKind::Post)?;
    let post = state.posts.get_post(post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = parse_id(&path, EntityKind::Post)?;
    state.posts.delete_post(identity.user_id, post_id).await?;

    tracing::info!(%post_id, user_id = %identity.user_id, "Post removed");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post removed")))
}

/// PUT /api/posts/like/{id}
pub async fn like_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = parse_id(&path, EntityKind::Post)?;
    let likes = state.posts.like_post(identity.user_id, post_id).await?;
    Ok(HttpResponse::Ok().json(likes))
}

/// PUT /api/posts/unlike/{id}
pub async fn unlike_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post_id = parse_id(&path, EntityKind::Post)?;
    let likes = state.posts.unlike_post(identity.user_id, post_id).await?;
    Ok(HttpResponse::Ok().json(likes))
}

/// POST /api/posts/comment/{id}
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<NewComment>,
) -> AppResult<HttpResponse> {
    let post_id = parse_id(&path, EntityKind::Post)?;
    let comments = state
        .posts
        .add_comment(identity.user_id, post_id, body.into_inner())
        .await?;

    tracing::info!(%post_id, user_id = %identity.user_id, "Comment added");
    Ok(HttpResponse::Ok().json(comments))
}

/// DELETE /api/posts/comment/{id}/{comment_id}
pub async fn remove_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let post_id = parse_id(&post_id, EntityKind::Post)?;
    let comment_id = parse_id(&comment_id, EntityKind::Comment)?;

    let comments = state
        .posts
        .remove_comment(identity.user_id, post_id, comment_id)
        .await?;

    tracing::info!(%post_id, %comment_id, "Comment removed");
    Ok(HttpResponse::Ok().json(comments))
}
