use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::domain::{
    Education, EducationInput, Experience, ExperienceInput, Profile, ProfileFields, ProfileInput,
    ProfileView,
};
use crate::error::{DomainError, EntityKind, RepoError};
use crate::ports::{GithubClient, ProfileRepository, UpstreamError, UserRepository};

/// Developer profiles and the GitHub lookup attached to them.
#[derive(Clone)]
pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
    users: Arc<dyn UserRepository>,
    github: Arc<dyn GithubClient>,
}

impl ProfileService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        users: Arc<dyn UserRepository>,
        github: Arc<dyn GithubClient>,
    ) -> Self {
        Self {
            profiles,
            users,
            github,
        }
    }

    async fn owned_profile(&self, user_id: Uuid) -> Result<Profile, DomainError> {
        self.profiles
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Profile, user_id))
    }

    async fn populate(&self, profile: Profile) -> Result<ProfileView, DomainError> {
        let owner = self.users.find_by_id(profile.user_id).await?;
        Ok(ProfileView::new(profile, owner.as_ref()))
    }

    pub async fn get_own_profile(&self, caller: Uuid) -> Result<ProfileView, DomainError> {
        let profile = self.owned_profile(caller).await?;
        self.populate(profile).await
    }

    /// Replace the caller's profile. The previous profile, with its
    /// experience and education, is dropped.
    pub async fn upsert_profile(
        &self,
        caller: Uuid,
        input: ProfileInput,
    ) -> Result<ProfileFields, DomainError> {
        input.validate()?;
        let fields = input.into_fields(caller);

        // No transaction: a failure after the delete leaves the user without a profile.
        self.profiles.delete_by_user_id(caller).await?;
        self.profiles.create(Profile::new(fields.clone())).await?;

        Ok(fields)
    }

    pub async fn list_profiles(&self) -> Result<Vec<ProfileView>, DomainError> {
        let profiles = self.profiles.find_all().await?;

        let mut owner_ids: Vec<Uuid> = profiles.iter().map(|p| p.user_id).collect();
        owner_ids.sort();
        owner_ids.dedup();

        let owners: HashMap<Uuid, _> = self
            .users
            .find_by_ids(&owner_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(profiles
            .into_iter()
            .map(|p| {
                let owner = owners.get(&p.user_id);
                ProfileView::new(p, owner)
            })
            .collect())
    }

    pub async fn get_profile_by_user(&self, user_id: Uuid) -> Result<ProfileView, DomainError> {
        let profile = self.owned_profile(user_id).await?;
        self.populate(profile).await
    }

    /// Delete the caller's profile, if any, and then the caller's account.
    pub async fn delete_own_profile(&self, caller: Uuid) -> Result<(), DomainError> {
        self.profiles.delete_by_user_id(caller).await?;

        match self.users.delete(caller).await {
            Ok(()) => Ok(()),
            Err(RepoError::NotFound) => {
                Err(DomainError::not_found(EntityKind::User, caller))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn add_experience(
        &self,
        caller: Uuid,
        input: ExperienceInput,
    ) -> Result<Profile, DomainError> {
        input.validate()?;
        let from = input
            .from
            .ok_or_else(|| DomainError::Internal("validated experience without from".into()))?;

        let mut profile = self.owned_profile(caller).await?;
        profile.add_experience(Experience::from_input(input, from));
        Ok(self.profiles.update(profile).await?)
    }

    pub async fn remove_experience(
        &self,
        caller: Uuid,
        experience_id: Uuid,
    ) -> Result<Profile, DomainError> {
        let mut profile = self.owned_profile(caller).await?;
        if profile.remove_experience(experience_id) {
            profile = self.profiles.update(profile).await?;
        }
        Ok(profile)
    }

    pub async fn add_education(
        &self,
        caller: Uuid,
        input: EducationInput,
    ) -> Result<Profile, DomainError> {
        input.validate()?;
        let from = input
            .from
            .ok_or_else(|| DomainError::Internal("validated education without from".into()))?;

        let mut profile = self.owned_profile(caller).await?;
        profile.add_education(Education::from_input(input, from));
        Ok(self.profiles.update(profile).await?)
    }

    pub async fn remove_education(
        &self,
        caller: Uuid,
        education_id: Uuid,
    ) -> Result<Profile, DomainError> {
        let mut profile = self.owned_profile(caller).await?;
        if profile.remove_education(education_id) {
            profile = self.profiles.update(profile).await?;
        }
        Ok(profile)
    }

    pub async fn get_external_repos(
        &self,
        username: &str,
    ) -> Result<serde_json::Value, DomainError> {
        self.github
            .recent_repos(username)
            .await
            .map_err(|e| match e {
                UpstreamError::Status(_) => DomainError::Upstream(e.to_string()),
                UpstreamError::Transport(_) | UpstreamError::Decode(_) => {
                    DomainError::Internal(e.to_string())
                }
            })
    }
}
