//! HTTP contract for /api/posts.

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};
use uuid::Uuid;

use common::TestContext;

#[actix_rt::test]
async fn test_create_post_copies_author_fields() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let (user, bearer) = ctx.signed_in("Ada").await;

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", bearer))
        .set_json(json!({ "text": "hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["text"], "hello");
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["avatar"], user.avatar);
    assert_eq!(body["user"], user.id.to_string());
    assert_eq!(body["likes"], json!([]));
    assert_eq!(body["comments"], json!([]));
}

#[actix_rt::test]
async fn test_create_post_without_token_is_rejected() {
    let ctx = TestContext::new();
    let app = app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "text": "hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "msg": "No token, authorization denied" }));
}

#[actix_rt::test]
async fn test_garbage_token_is_not_valid() {
    let ctx = TestContext::new();
    let app = app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/posts")
        .insert_header(("Authorization", "Bearer not.a.jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "msg": "Token is not valid" }));
}

#[actix_rt::test]
async fn test_empty_text_is_a_validation_error() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let (_, bearer) = ctx.signed_in("Ada").await;

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", bearer))
        .set_json(json!({ "text": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "errors": [{ "param": "text", "msg": "Text is required" }] })
    );
}

#[actix_rt::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let (_, bearer) = ctx.signed_in("Ada").await;

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", bearer))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["msg"].is_string());
}

#[actix_rt::test]
async fn test_double_like_is_rejected_and_count_unchanged() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let (user, bearer) = ctx.signed_in("Ada").await;

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", bearer.clone()))
        .set_json(json!({ "text": "hello" }))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    let like_uri = format!("/api/posts/like/{}", post["id"].as_str().unwrap());

    let first = test::TestRequest::put()
        .uri(&like_uri)
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, first).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let likes: Value = test::read_body_json(resp).await;
    assert_eq!(likes, json!([{ "user": user.id.to_string() }]));

    let second = test::TestRequest::put()
        .uri(&like_uri)
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, second).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "msg": "Post already liked!" }));

    let get = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", post["id"].as_str().unwrap()))
        .insert_header(("Authorization", bearer))
        .to_request();
    let stored: Value = test::call_and_read_body_json(&app, get).await;
    assert_eq!(stored["likes"].as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn test_unlike_without_like_is_rejected() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let (_, bearer) = ctx.signed_in("Ada").await;

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", bearer.clone()))
        .set_json(json!({ "text": "hello" }))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/unlike/{}", post["id"].as_str().unwrap()))
        .insert_header(("Authorization", bearer))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "msg": "Post has not yet been liked" }));
}

#[actix_rt::test]
async fn test_like_missing_post_is_not_found() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let (_, bearer) = ctx.signed_in("Ada").await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/like/{}", Uuid::new_v4()))
        .insert_header(("Authorization", bearer))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "msg": "Post not found" }));
}

#[actix_rt::test]
async fn test_non_owner_cannot_delete_post() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let (_, owner) = ctx.signed_in("Ada").await;
    let (_, stranger) = ctx.signed_in("Grace").await;

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", owner.clone()))
        .set_json(json!({ "text": "mine" }))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    let post_uri = format!("/api/posts/{}", post["id"].as_str().unwrap());

    let req = test::TestRequest::delete()
        .uri(&post_uri)
        .insert_header(("Authorization", stranger))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "msg": "User is not Authorized!" }));

    let req = test::TestRequest::get()
        .uri(&post_uri)
        .insert_header(("Authorization", owner.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&post_uri)
        .insert_header(("Authorization", owner))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "msg": "Post removed" }));
}

#[actix_rt::test]
async fn test_malformed_post_id_is_bad_request() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let (_, bearer) = ctx.signed_in("Ada").await;

    let req = test::TestRequest::get()
        .uri("/api/posts/not-an-id")
        .insert_header(("Authorization", bearer))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "msg": "Post Not Found!!" }));
}

#[actix_rt::test]
async fn test_posts_are_listed_newest_first() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let (_, bearer) = ctx.signed_in("Ada").await;

    for text in ["first", "second"] {
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("Authorization", bearer.clone()))
            .set_json(json!({ "text": text }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/api/posts")
        .insert_header(("Authorization", bearer))
        .to_request();
    let posts: Value = test::call_and_read_body_json(&app, req).await;

    let texts: Vec<&str> = posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["second", "first"]);
}

#[actix_rt::test]
async fn test_comment_author_only_can_remove_it() {
    let ctx = TestContext::new();
    let app = app!(ctx);
    let (_, ada) = ctx.signed_in("Ada").await;
    let (grace_user, grace) = ctx.signed_in("Grace").await;

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", ada.clone()))
        .set_json(json!({ "text": "hello" }))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    let post_id = post["id"].as_str().unwrap().to_string();

    let mut comment_ids = Vec::new();
    for text in ["one", "two"] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/comment/{post_id}"))
            .insert_header(("Authorization", grace.clone()))
            .set_json(json!({ "text": text }))
            .to_request();
        let comments: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(comments[0]["text"], text);
        assert_eq!(comments[0]["user"], grace_user.id.to_string());
        comment_ids.push(comments[0]["id"].as_str().unwrap().to_string());
    }

    let older = &comment_ids[0];
    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/comment/{post_id}/{older}"))
        .insert_header(("Authorization", ada))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/comment/{post_id}/{older}"))
        .insert_header(("Authorization", grace.clone()))
        .to_request();
    let comments: Value = test::call_and_read_body_json(&app, req).await;
    let remaining: Vec<&str> = comments
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["text"].as_str().unwrap())
        .collect();
    assert_eq!(remaining, vec!["two"]);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/comment/{post_id}/{}", Uuid::new_v4()))
        .insert_header(("Authorization", grace))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "msg": "Comment does not exist" }));
}
