//! Input validation helpers
//!
//! Forms are checked before any request leaves the client, with the same
//! rules the admin console applies.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    BADGE_COLORS, BadgeForm, CourseCreate, CourseUpdate, FaqForm, HelpCategoryForm,
    MIN_PASSWORD_LEN, ModuleCreate, ModuleUpdate, PasswordChange, TeacherForm, UserCreate,
    UserUpdate, VideoCreate, VideoUpdate,
};
use shared::util::{is_email, slugify};
use shared::youtube;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names and titles: course, module, video, badge, category
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions, FAQ answers, transcriptions
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/// FAQ questions
pub const MAX_QUESTION_LEN: usize = 500;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Icon names
pub const MAX_ICON_LEN: usize = 100;

/// Email addresses
pub const MAX_EMAIL_LEN: usize = 254;

/// Phone numbers
pub const MAX_PHONE_LEN: usize = 30;

// ── Generic helpers ─────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    validate_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value {
        validate_len(v, field, max_len)?;
    }
    Ok(())
}

fn validate_len(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(())
}

/// Video `url` must be a YouTube link or a bare video code
pub fn validate_video_url(url: &str) -> AppResult<()> {
    validate_required_text(url, "url", MAX_URL_LEN)?;
    if !youtube::is_valid_video_reference(url) {
        return Err(AppError::new(ErrorCode::VideoUrlInvalid).with_detail("field", "url"));
    }
    Ok(())
}

/// Required, well-formed email address
pub fn validate_email(email: &str) -> AppResult<()> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    if !is_email(email) {
        return Err(AppError::new(ErrorCode::EmailInvalid).with_detail("field", "email"));
    }
    Ok(())
}

/// Password of at least [`MIN_PASSWORD_LEN`] chars, repeated in the confirmation
pub fn validate_password(password: &str, confirmation: &str) -> AppResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::new(ErrorCode::PasswordTooShort)
            .with_detail("field", "password")
            .with_detail("min", MIN_PASSWORD_LEN));
    }
    if password != confirmation {
        return Err(AppError::new(ErrorCode::PasswordMismatch)
            .with_detail("field", "password_confirmation"));
    }
    Ok(())
}

// ── Forms ───────────────────────────────────────────────────────────

pub fn validate_course_create(form: &CourseCreate) -> AppResult<()> {
    validate_required_text(&form.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&form.description, "description", MAX_DESCRIPTION_LEN)
}

pub fn validate_course_update(form: &CourseUpdate) -> AppResult<()> {
    if let Some(title) = &form.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    validate_optional_text(&form.description, "description", MAX_DESCRIPTION_LEN)
}

pub fn validate_module_create(form: &ModuleCreate) -> AppResult<()> {
    validate_required_text(&form.name, "name", MAX_NAME_LEN)?;
    validate_len(&form.description, "description", MAX_DESCRIPTION_LEN)
}

pub fn validate_module_update(form: &ModuleUpdate) -> AppResult<()> {
    validate_required_text(&form.name, "name", MAX_NAME_LEN)?;
    validate_len(&form.description, "description", MAX_DESCRIPTION_LEN)
}

pub fn validate_video_create(form: &VideoCreate) -> AppResult<()> {
    validate_required_text(&form.title, "title", MAX_NAME_LEN)?;
    validate_len(&form.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_video_url(&form.url)
}

pub fn validate_video_update(form: &VideoUpdate) -> AppResult<()> {
    if let Some(title) = &form.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    validate_optional_text(&form.description, "description", MAX_DESCRIPTION_LEN)?;
    if let Some(url) = &form.url {
        validate_video_url(url)?;
    }
    validate_optional_text(&form.thumbnail, "thumbnail", MAX_URL_LEN)
}

pub fn validate_badge(form: &BadgeForm) -> AppResult<()> {
    validate_required_text(&form.title, "title", MAX_NAME_LEN)?;
    if form.threshold < 1 {
        return Err(AppError::new(ErrorCode::BadgeThresholdInvalid)
            .with_detail("field", "threshold")
            .with_detail("value", form.threshold));
    }
    if !BADGE_COLORS
        .iter()
        .any(|c| c.eq_ignore_ascii_case(form.color.trim()))
    {
        return Err(AppError::new(ErrorCode::BadgeColorInvalid)
            .with_detail("field", "color")
            .with_detail("value", form.color.clone()));
    }
    validate_optional_text(&form.icon, "icon", MAX_ICON_LEN)?;
    validate_optional_text(&form.description, "description", MAX_DESCRIPTION_LEN)
}

/// Validate a help category and fill in the slug from the name when missing
pub fn prepare_help_category(mut form: HelpCategoryForm) -> AppResult<HelpCategoryForm> {
    validate_required_text(&form.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&form.icon, "icon", MAX_ICON_LEN)?;
    validate_optional_text(&form.description, "description", MAX_DESCRIPTION_LEN)?;

    let slug = match form.slug.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => slugify(s),
        _ => slugify(&form.name),
    };
    if slug.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            "slug must contain letters or digits",
        )
        .with_detail("field", "slug"));
    }
    form.slug = Some(slug);
    Ok(form)
}

pub fn validate_faq(form: &FaqForm) -> AppResult<()> {
    if form.category_id <= 0 {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            "category_id must reference a help category",
        )
        .with_detail("field", "category_id"));
    }
    validate_required_text(&form.question, "question", MAX_QUESTION_LEN)?;
    validate_required_text(&form.answer, "answer", MAX_DESCRIPTION_LEN)
}

pub fn validate_user_create(form: &UserCreate) -> AppResult<()> {
    validate_required_text(&form.name, "name", MAX_NAME_LEN)?;
    validate_email(&form.email)?;
    validate_password(&form.password, &form.password_confirmation)
}

pub fn validate_user_update(form: &UserUpdate) -> AppResult<()> {
    validate_required_text(&form.name, "name", MAX_NAME_LEN)?;
    validate_email(&form.email)
}

pub fn validate_password_change(form: &PasswordChange) -> AppResult<()> {
    validate_password(&form.password, &form.password_confirmation)
}

pub fn validate_teacher(form: &TeacherForm) -> AppResult<()> {
    validate_required_text(&form.name, "name", MAX_NAME_LEN)?;
    validate_email(&form.email)?;
    validate_optional_text(&form.phone, "phone", MAX_PHONE_LEN)?;
    validate_optional_text(&form.bio, "bio", MAX_DESCRIPTION_LEN)
}
