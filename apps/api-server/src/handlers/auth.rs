//! Account handlers - registration, login and the current user.

use actix_web::{HttpResponse, web};

use devconnect_core::domain::{Credentials, Registration};
use devconnect_core::services::IssuedToken;
use devconnect_shared::dto::{AuthResponse, LoginRequest, RegisterUserRequest, UserResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn token_response(issued: IssuedToken) -> AuthResponse {
    AuthResponse {
        access_token: issued.token,
        token_type: "Bearer".to_string(),
        expires_in: issued.expires_in.max(0) as u64,
    }
}

/// POST /api/users
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let issued = state
        .accounts
        .register(Registration {
            name: req.name,
            email: req.email,
            password: req.password,
            avatar: req.avatar,
        })
        .await?;

    tracing::info!("Registered new user");
    Ok(HttpResponse::Ok().json(token_response(issued)))
}

/// POST /api/auth
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let issued = state
        .accounts
        .login(Credentials {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(HttpResponse::Ok().json(token_response(issued)))
}

/// GET /api/auth - Protected route
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state.accounts.current_user(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse {
        id: user.id.to_string(),
        name: user.name,
        email: user.email,
        avatar: user.avatar,
        date: user.created_at.to_rfc3339(),
    }))
}
