//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod profile;

use actix_web::{error::JsonPayloadError, web};

use crate::middleware::error::AppError;

/// Malformed or mistyped JSON bodies become `400 {msg}`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::BadRequest(err.to_string()).into()
    })
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Accounts
            .route("/users", web::post().to(auth::register))
            .service(
                web::resource("/auth")
                    .route(web::post().to(auth::login))
                    .route(web::get().to(auth::me)),
            )
            // Posts
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create_post))
                    .route("", web::get().to(posts::list_posts))
                    .route("/like/{id}", web::put().to(posts::like_post))
                    .route("/unlike/{id}", web::put().to(posts::unlike_post))
                    .route("/comment/{id}", web::post().to(posts::add_comment))
                    .route(
                        "/comment/{id}/{comment_id}",
                        web::delete().to(posts::remove_comment),
                    )
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            )
            // Profiles
            .service(
                web::scope("/profile")
                    .route("", web::post().to(profile::upsert_profile))
                    .route("", web::get().to(profile::list_profiles))
                    .route("", web::delete().to(profile::delete_profile))
                    .route("/me", web::get().to(profile::own_profile))
                    .route("/user/{user_id}", web::get().to(profile::profile_by_user))
                    .route("/experience", web::put().to(profile::add_experience))
                    .route(
                        "/experience/{exp_id}",
                        web::delete().to(profile::remove_experience),
                    )
                    .route("/education", web::put().to(profile::add_education))
                    .route(
                        "/education/{edu_id}",
                        web::delete().to(profile::remove_education),
                    )
                    .route("/github/{username}", web::get().to(profile::github_repos)),
            ),
    );
}
