//! Domain entities - the core business objects.

mod links;
mod post;
mod profile;
mod user;

pub use links::normalize_url;
pub use post::{Comment, Like, NewComment, NewPost, Post};
pub use profile::{
    Education, EducationInput, Experience, ExperienceInput, Profile, ProfileFields, ProfileInput,
    ProfileOwner, ProfileView, SkillsInput, SocialLinks,
};
pub use user::{Credentials, DEFAULT_AVATAR, Registration, User};
