//! # Request builders
//!
//! Typed payloads for the three write endpoints that take user input.
//!
//! | Builder | Endpoint | Encoding |
//! |---------|----------|----------|
//! | [`SignupForm`] | `POST /signup` | JSON, camelCase keys |
//! | [`NewProject`] | `POST /projects/create` | JSON, images as data URLs |
//! | [`ProfileUpdate`] | `PUT /profile/update` | multipart |
//!
//! Client-side checks return [`ApiError::Validation`] before any request is
//! made. [`ProfileUpdate::into_form`] is the only place a multipart body is
//! assembled.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{ProjectStatus, User, MAX_IMAGES};

// ── Signup ──────────────────────────────────────────────────────────

/// Which kind of account is being created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Developer,
    Entrepreneur,
}

impl UserType {
    pub fn label(self) -> &'static str {
        match self {
            UserType::Developer => "Developer",
            UserType::Entrepreneur => "Entrepreneur/Investor",
        }
    }
}

/// `POST /signup` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub user_type: UserType,
    pub github_link: String,
    pub portfolio_link: String,
    pub linkedin_link: String,
    pub company_name: String,
}

impl SignupForm {
    /// Required-field and password-confirmation checks.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.username.trim().is_empty() {
            return Err(ApiError::validation("Username is required"));
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ApiError::validation("Please enter a valid email"));
        }
        if self.password.is_empty() {
            return Err(ApiError::validation("Password is required"));
        }
        if self.password != self.confirm_password {
            return Err(ApiError::validation("Passwords do not match"));
        }
        Ok(())
    }

    /// Copy with surrounding whitespace stripped from the identifying fields.
    pub fn normalized(&self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            ..self.clone()
        }
    }
}

// ── New project ─────────────────────────────────────────────────────

const CODE_SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const CODE_SUFFIX_LEN: usize = 6;

/// Slug part of a project code: lowercase ASCII letters and digits, words
/// joined by `-`.
pub fn code_base(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Generate a project code: [`code_base`] plus a random 6-character suffix.
pub fn project_code(name: &str, rng: &mut impl Rng) -> String {
    let suffix: String = (0..CODE_SUFFIX_LEN)
        .map(|_| CODE_SUFFIX_CHARSET[rng.gen_range(0..CODE_SUFFIX_CHARSET.len())] as char)
        .collect();
    let base = code_base(name);
    if base.is_empty() {
        suffix
    } else {
        format!("{base}-{suffix}")
    }
}

/// Which tag list an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    General,
    Programming,
}

/// `POST /projects/create` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub code: String,
    pub status: ProjectStatus,
    pub general_tags: Vec<String>,
    pub programming_tags: Vec<String>,
    pub images: Vec<String>,
}

impl NewProject {
    /// Set the name and regenerate the code from it. A blank name clears the code.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.code = if self.name.trim().is_empty() {
            String::new()
        } else {
            project_code(&self.name, &mut rand::thread_rng())
        };
    }

    fn tags_mut(&mut self, kind: TagKind) -> &mut Vec<String> {
        match kind {
            TagKind::General => &mut self.general_tags,
            TagKind::Programming => &mut self.programming_tags,
        }
    }

    /// Add a trimmed, non-empty tag unless it is already present.
    /// Returns whether the list changed.
    pub fn add_tag(&mut self, kind: TagKind, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        let tags = self.tags_mut(kind);
        if tags.iter().any(|t| t == tag) {
            return false;
        }
        tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, kind: TagKind, tag: &str) {
        self.tags_mut(kind).retain(|t| t != tag);
    }

    /// Attach an image reference. Fails once [`MAX_IMAGES`] are attached.
    pub fn add_image(&mut self, image: String) -> Result<(), ApiError> {
        if self.images.len() >= MAX_IMAGES {
            return Err(ApiError::validation(format!(
                "Maximum {MAX_IMAGES} images allowed"
            )));
        }
        self.images.push(image);
        Ok(())
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    pub fn remaining_image_slots(&self) -> usize {
        MAX_IMAGES.saturating_sub(self.images.len())
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::validation("Project name is required"));
        }
        if self.description.trim().is_empty() {
            return Err(ApiError::validation("Description is required"));
        }
        if self.code.trim().is_empty() {
            return Err(ApiError::validation("Project code is required"));
        }
        if self.images.len() > MAX_IMAGES {
            return Err(ApiError::validation(format!(
                "Maximum {MAX_IMAGES} images allowed"
            )));
        }
        Ok(())
    }
}

// ── Profile update ──────────────────────────────────────────────────

/// Text fields accepted by `PUT /profile/update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Phone,
    Bio,
    GithubLink,
    PortfolioLink,
    LinkedinLink,
    CompanyName,
}

impl ProfileField {
    pub const ALL: [ProfileField; 9] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Bio,
        ProfileField::GithubLink,
        ProfileField::PortfolioLink,
        ProfileField::LinkedinLink,
        ProfileField::CompanyName,
    ];

    /// Multipart field name.
    pub fn name(self) -> &'static str {
        match self {
            ProfileField::FirstName => "first_name",
            ProfileField::LastName => "last_name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Bio => "bio",
            ProfileField::GithubLink => "github_link",
            ProfileField::PortfolioLink => "portfolio_link",
            ProfileField::LinkedinLink => "linkedin_link",
            ProfileField::CompanyName => "company_name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::FirstName => "First Name",
            ProfileField::LastName => "Last Name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::Bio => "Bio",
            ProfileField::GithubLink => "GitHub",
            ProfileField::PortfolioLink => "Portfolio",
            ProfileField::LinkedinLink => "LinkedIn",
            ProfileField::CompanyName => "Company",
        }
    }

    fn read(self, user: &User) -> Option<&str> {
        match self {
            ProfileField::FirstName => user.first_name.as_deref(),
            ProfileField::LastName => user.last_name.as_deref(),
            ProfileField::Email => Some(user.email.as_str()),
            ProfileField::Phone => user.phone.as_deref(),
            ProfileField::Bio => user.bio.as_deref(),
            ProfileField::GithubLink => user.github_link.as_deref(),
            ProfileField::PortfolioLink => user.portfolio_link.as_deref(),
            ProfileField::LinkedinLink => user.linkedin_link.as_deref(),
            ProfileField::CompanyName => user.company_name.as_deref(),
        }
    }
}

/// Binary parts accepted by `PUT /profile/update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttachmentSlot {
    ProfilePicture,
    Banner,
}

impl AttachmentSlot {
    pub fn name(self) -> &'static str {
        match self {
            AttachmentSlot::ProfilePicture => "profile_picture",
            AttachmentSlot::Banner => "banner",
        }
    }
}

/// A file chosen for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Multipart profile update: named text fields plus optional named files.
///
/// Blank text fields are not sent, which the backend reads as "unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    fields: BTreeMap<ProfileField, String>,
    attachments: BTreeMap<AttachmentSlot, Attachment>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill every text field from the current user.
    pub fn from_user(user: &User) -> Self {
        let mut update = Self::new();
        for field in ProfileField::ALL {
            if let Some(value) = field.read(user) {
                update.set(field, value);
            }
        }
        update
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    pub fn with(mut self, field: ProfileField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: ProfileField) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn attach(&mut self, slot: AttachmentSlot, attachment: Attachment) {
        self.attachments.insert(slot, attachment);
    }

    pub fn with_attachment(mut self, slot: AttachmentSlot, attachment: Attachment) -> Self {
        self.attach(slot, attachment);
        self
    }

    pub fn detach(&mut self, slot: AttachmentSlot) {
        self.attachments.remove(&slot);
    }

    pub fn attachment(&self, slot: AttachmentSlot) -> Option<&Attachment> {
        self.attachments.get(&slot)
    }

    /// The text fields that will be sent, in field order.
    pub fn text_fields(&self) -> impl Iterator<Item = (ProfileField, &str)> {
        self.fields
            .iter()
            .map(|(field, value)| (*field, value.trim()))
            .filter(|(_, value)| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.text_fields().next().is_none() && self.attachments.is_empty()
    }

    /// Build the multipart body.
    pub fn into_form(self) -> Result<reqwest::multipart::Form, ApiError> {
        let mut form = reqwest::multipart::Form::new();
        for (field, value) in self.text_fields() {
            form = form.text(field.name(), value.to_string());
        }
        for (slot, attachment) in self.attachments {
            let mut part = reqwest::multipart::Part::bytes(attachment.bytes)
                .file_name(attachment.file_name);
            if let Some(mime) = attachment.content_type.as_deref() {
                part = part.mime_str(mime).map_err(|e| {
                    ApiError::validation(format!("Unsupported file type {mime}: {e}"))
                })?;
            }
            form = form.part(slot.name(), part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn valid_signup() -> SignupForm {
        SignupForm {
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
            ..SignupForm::default()
        }
    }

    #[test]
    fn test_signup_validation() {
        assert!(valid_signup().validate().is_ok());

        let mismatch = SignupForm {
            confirm_password: "hunter23".into(),
            ..valid_signup()
        };
        assert_eq!(
            mismatch.validate(),
            Err(ApiError::validation("Passwords do not match"))
        );

        let no_user = SignupForm {
            username: "  ".into(),
            ..valid_signup()
        };
        assert!(no_user.validate().is_err());

        let bad_email = SignupForm {
            email: "ada.example.com".into(),
            ..valid_signup()
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_signup_wire_format() {
        let json = serde_json::to_value(valid_signup()).unwrap();
        assert_eq!(json["userType"], "developer");
        assert_eq!(json["firstName"], "");
        assert!(json.get("confirmPassword").is_none());
        assert!(json.get("confirm_password").is_none());
    }

    #[test]
    fn test_code_base() {
        assert_eq!(code_base("My Cool App!"), "my-cool-app");
        assert_eq!(code_base("  AI   Chat  2.0 "), "ai-chat-20");
        assert_eq!(code_base("!!!"), "");
    }

    #[test]
    fn test_project_code_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let code = project_code("My Cool App", &mut rng);
        let (base, suffix) = code.rsplit_once('-').unwrap();
        assert_eq!(base, "my-cool-app");
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

        let bare = project_code("???", &mut rng);
        assert_eq!(bare.len(), 6);
    }

    #[test]
    fn test_set_name_regenerates_code() {
        let mut project = NewProject::default();
        project.set_name("Task Board");
        assert!(project.code.starts_with("task-board-"));

        project.set_name("   ");
        assert!(project.code.is_empty());
    }

    #[test]
    fn test_tags_are_trimmed_and_deduplicated() {
        let mut project = NewProject::default();
        assert!(project.add_tag(TagKind::General, " fintech "));
        assert!(!project.add_tag(TagKind::General, "fintech"));
        assert!(!project.add_tag(TagKind::General, "   "));
        assert!(project.add_tag(TagKind::Programming, "fintech"));
        assert_eq!(project.general_tags, vec!["fintech"]);
        assert_eq!(project.programming_tags, vec!["fintech"]);

        project.remove_tag(TagKind::General, "fintech");
        assert!(project.general_tags.is_empty());
        assert_eq!(project.programming_tags, vec!["fintech"]);
    }

    #[test]
    fn test_image_limit() {
        let mut project = NewProject::default();
        for i in 0..MAX_IMAGES {
            project.add_image(format!("data:image/png;base64,{i}")).unwrap();
        }
        assert_eq!(project.remaining_image_slots(), 0);
        assert_eq!(
            project.add_image("one-too-many".into()),
            Err(ApiError::validation("Maximum 9 images allowed"))
        );

        project.remove_image(0);
        project.remove_image(100);
        assert_eq!(project.images.len(), MAX_IMAGES - 1);
    }

    #[test]
    fn test_new_project_validation() {
        let mut project = NewProject::default();
        assert!(project.validate().is_err());
        project.set_name("Engine");
        project.description = "Fast".into();
        assert!(project.validate().is_ok());
    }

    #[test]
    fn test_new_project_wire_format() {
        let project = NewProject {
            name: "Engine".into(),
            status: ProjectStatus::UnderDevelopment,
            ..NewProject::default()
        };
        let json = serde_json::to_value(project).unwrap();
        assert_eq!(json["status"], "Under Development");
        assert_eq!(json["images"], serde_json::json!([]));
    }

    #[test]
    fn test_profile_update_skips_blank_fields() {
        let user = User {
            username: "ada".into(),
            email: "ada@example.com".into(),
            first_name: Some("Ada".into()),
            bio: Some("".into()),
            ..User::default()
        };
        let update = ProfileUpdate::from_user(&user).with(ProfileField::CompanyName, " Analytical ");

        let sent: Vec<_> = update.text_fields().collect();
        assert_eq!(
            sent,
            vec![
                (ProfileField::FirstName, "Ada"),
                (ProfileField::Email, "ada@example.com"),
                (ProfileField::CompanyName, "Analytical"),
            ]
        );
        assert_eq!(update.get(ProfileField::Bio), "");
    }

    #[test]
    fn test_profile_update_attachments_replace_by_slot() {
        let pic = |name: &str| Attachment {
            file_name: name.to_string(),
            content_type: Some("image/png".into()),
            bytes: vec![1, 2, 3],
        };
        let mut update = ProfileUpdate::new()
            .with_attachment(AttachmentSlot::ProfilePicture, pic("a.png"))
            .with_attachment(AttachmentSlot::ProfilePicture, pic("b.png"));
        assert_eq!(
            update.attachment(AttachmentSlot::ProfilePicture).map(|a| a.file_name.as_str()),
            Some("b.png")
        );
        assert!(!update.is_empty());

        update.detach(AttachmentSlot::ProfilePicture);
        assert!(update.is_empty());
    }

    #[test]
    fn test_profile_update_rejects_bad_mime() {
        let update = ProfileUpdate::new().with_attachment(
            AttachmentSlot::Banner,
            Attachment {
                file_name: "b.png".into(),
                content_type: Some("not a mime".into()),
                bytes: vec![0],
            },
        );
        assert!(matches!(update.into_form(), Err(ApiError::Validation(_))));
    }
}
