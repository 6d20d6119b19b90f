//! Profile handlers - the caller's profile, public listings and GitHub repos.

use actix_web::{HttpResponse, web};

use devconnect_core::domain::{EducationInput, ExperienceInput, ProfileInput};
use devconnect_core::error::{DomainError, EntityKind, parse_id};
use devconnect_shared::MessageResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/profile/me
pub async fn own_profile(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let profile = state
        .profiles
        .get_own_profile(identity.user_id)
        .await
        .map_err(|e| match e {
            DomainError::NotFound {
                entity: EntityKind::Profile,
                ..
            } => AppError::BadRequest("There is no profile for user".to_string()),
            other => other.into(),
        })?;
    Ok(HttpResponse::Ok().json(profile))
}

/// POST /api/profile
pub async fn upsert_profile(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<ProfileInput>,
) -> AppResult<HttpResponse> {
    let fields = state
        .profiles
        .upsert_profile(identity.user_id, body.into_inner())
        .await?;

    tracing::info!(user_id = %identity.user_id, "Profile saved");
    Ok(HttpResponse::Ok().json(fields))
}

/// GET /api/profile
pub async fn list_profiles(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let profiles = state.profiles.list_profiles().await?;
    Ok(HttpResponse::Ok().json(profiles))
}

/// GET /api/profile/user/{user_id}
pub async fn profile_by_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user_id = parse_id(&path, EntityKind::Profile)?;
    let profile = state.profiles.get_profile_by_user(user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// DELETE /api/profile - removes the profile and the account.
pub async fn delete_profile(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    state.profiles.delete_own_profile(identity.user_id).await?;

    tracing::info!(user_id = %identity.user_id, "User deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted!")))
}

/// PUT /api/profile/experience
pub async fn add_experience(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<ExperienceInput>,
) -> AppResult<HttpResponse> {
    let profile = state
        .profiles
        .add_experience(identity.user_id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// DELETE /api/profile/experience/{exp_id}
pub async fn remove_experience(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let exp_id = parse_id(&path, EntityKind::Experience)?;
    let profile = state
        .profiles
        .remove_experience(identity.user_id, exp_id)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// PUT /api/profile/education
pub async fn add_education(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<EducationInput>,
) -> AppResult<HttpResponse> {
    let profile = state
        .profiles
        .add_education(identity.user_id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// DELETE /api/profile/education/{edu_id}
pub async fn remove_education(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let edu_id = parse_id(&path, EntityKind::Education)?;
    let profile = state
        .profiles
        .remove_education(identity.user_id, edu_id)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// GET /api/profile/github/{username}
pub async fn github_repos(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let repos = state.profiles.get_external_repos(&path).await?;
    Ok(HttpResponse::Ok().json(repos))
}
