use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{User, normalize_url};

/// Skills as submitted: either a list or a comma separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<String>),
    Csv(String),
}

impl Default for SkillsInput {
    fn default() -> Self {
        SkillsInput::Csv(String::new())
    }
}

impl SkillsInput {
    pub fn into_list(self) -> Vec<String> {
        let items: Vec<String> = match self {
            SkillsInput::List(items) => items,
            SkillsInput::Csv(csv) => csv.split(',').map(str::to_string).collect(),
        };
        items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn is_blank(&self) -> bool {
        match self {
            SkillsInput::List(items) => items.iter().all(|s| s.trim().is_empty()),
            SkillsInput::Csv(csv) => csv.split(',').all(|s| s.trim().is_empty()),
        }
    }
}

fn validate_skills(skills: &SkillsInput) -> Result<(), ValidationError> {
    if skills.is_blank() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed("Skills is required"));
        return Err(err);
    }
    Ok(())
}

fn date_order_error() -> ValidationError {
    let mut err = ValidationError::new("from");
    err.message = Some(Cow::Borrowed(
        "From date is required and needs to be from the past",
    ));
    err
}

/// `YYYY-MM-DD`, with `null` and blank strings read as absent.
fn blank_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid date `{raw}`: {e}"))),
        _ => Ok(None),
    }
}

/// Profile fields as submitted by the owner.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileInput {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
    pub githubusername: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_skills"))]
    pub skills: SkillsInput,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
}

impl ProfileInput {
    /// Normalize links and skills into the stored field set.
    pub fn into_fields(self, user: Uuid) -> ProfileFields {
        let link = |value: Option<String>| value.map(|v| normalize_url(&v));

        ProfileFields {
            user,
            company: self.company,
            location: self.location,
            website: link(self.website),
            bio: self.bio,
            skills: self.skills.into_list(),
            status: self.status,
            githubusername: self.githubusername,
            social: SocialLinks {
                youtube: link(self.youtube),
                twitter: link(self.twitter),
                instagram: link(self.instagram),
                linkedin: link(self.linkedin),
                facebook: link(self.facebook),
            },
        }
    }
}

/// Social network links attached to a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

/// The normalized field set a profile is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileFields {
    pub user: Uuid,
    pub company: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub status: String,
    pub githubusername: Option<String>,
    pub social: SocialLinks,
}

/// Body of a new experience entry.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_experience_dates"))]
pub struct ExperienceInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "blank_date")]
    #[validate(required(message = "From date is required and needs to be from the past"))]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_date")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

fn validate_experience_dates(input: &ExperienceInput) -> Result<(), ValidationError> {
    match (input.from, input.to) {
        (Some(from), Some(to)) if from >= to => Err(date_order_error()),
        _ => Ok(()),
    }
}

/// Body of a new education entry.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_education_dates"))]
pub struct EducationInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "School is required"))]
    pub school: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field of study is required."))]
    pub fieldofstudy: String,
    #[serde(default, deserialize_with = "blank_date")]
    #[validate(required(message = "From is required"))]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_date")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

fn validate_education_dates(input: &EducationInput) -> Result<(), ValidationError> {
    match (input.from, input.to) {
        (Some(from), Some(to)) if from >= to => Err(date_order_error()),
        _ => Ok(()),
    }
}

/// A past or current position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Experience {
    /// Build an entry from an input that already passed validation.
    pub fn from_input(input: ExperienceInput, from: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            company: input.company,
            location: input.location,
            from,
            to: input.to,
            current: input.current,
            description: input.description,
        }
    }
}

/// A school, degree or course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Education {
    /// Build an entry from an input that already passed validation.
    pub fn from_input(input: EducationInput, from: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            school: input.school,
            degree: input.degree,
            fieldofstudy: input.fieldofstudy,
            from,
            to: input.to,
            current: input.current,
            description: input.description,
        }
    }
}

/// Profile entity - one per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Create a fresh profile with empty experience and education.
    pub fn new(fields: ProfileFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: fields.user,
            company: fields.company,
            website: fields.website,
            location: fields.location,
            status: fields.status,
            skills: fields.skills,
            bio: fields.bio,
            githubusername: fields.githubusername,
            social: fields.social,
            experience: Vec::new(),
            education: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn add_experience(&mut self, entry: Experience) {
        self.experience.insert(0, entry);
    }

    /// Returns whether an entry was removed.
    pub fn remove_experience(&mut self, id: Uuid) -> bool {
        match self.experience.iter().position(|e| e.id == id) {
            Some(index) => {
                self.experience.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn add_education(&mut self, entry: Education) {
        self.education.insert(0, entry);
    }

    /// Returns whether an entry was removed.
    pub fn remove_education(&mut self, id: Uuid) -> bool {
        match self.education.iter().position(|e| e.id == id) {
            Some(index) => {
                self.education.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Display fields of the user owning a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileOwner {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

impl From<&User> for ProfileOwner {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// A profile joined with its owner's name and avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub id: Uuid,
    pub user: Option<ProfileOwner>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

impl ProfileView {
    pub fn new(profile: Profile, owner: Option<&User>) -> Self {
        Self {
            id: profile.id,
            user: owner.map(ProfileOwner::from),
            company: profile.company,
            website: profile.website,
            location: profile.location,
            status: profile.status,
            skills: profile.skills,
            bio: profile.bio,
            githubusername: profile.githubusername,
            social: profile.social,
            experience: profile.experience,
            education: profile.education,
            date: profile.created_at,
        }
    }
}
