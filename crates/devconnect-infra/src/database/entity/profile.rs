//! Profile entity for SeaORM.

use devconnect_core::domain::{Education, Experience, Profile, SocialLinks};
use sea_orm::entity::prelude::*;
use sea_orm::{FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SkillList(pub Vec<String>);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SocialColumn(pub SocialLinks);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ExperienceList(pub Vec<Experience>);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct EducationList(pub Vec<Education>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: SkillList,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub github_username: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub social: SocialColumn,
    #[sea_orm(column_type = "JsonBinary")]
    pub experience: ExperienceList,
    #[sea_orm(column_type = "JsonBinary")]
    pub education: EducationList,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Profile {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            company: model.company,
            website: model.website,
            location: model.location,
            status: model.status,
            skills: model.skills.0,
            bio: model.bio,
            githubusername: model.github_username,
            social: model.social.0,
            experience: model.experience.0,
            education: model.education.0,
            created_at: model.created_at.into(),
        }
    }
}

impl From<Profile> for ActiveModel {
    fn from(profile: Profile) -> Self {
        Self {
            id: Set(profile.id),
            user_id: Set(profile.user_id),
            company: Set(profile.company),
            website: Set(profile.website),
            location: Set(profile.location),
            status: Set(profile.status),
            skills: Set(SkillList(profile.skills)),
            bio: Set(profile.bio),
            github_username: Set(profile.githubusername),
            social: Set(SocialColumn(profile.social)),
            experience: Set(ExperienceList(profile.experience)),
            education: Set(EducationList(profile.education)),
            created_at: Set(profile.created_at.into()),
        }
    }
}
