//! Form Validation
//!
//! Client-side checks run before any request is sent. Everything beyond
//! required fields and length limits is left to the server.

use thiserror::Error;

use crate::api::{
    CreateTaskData, LoginData, RegisterData, UpdatePasswordData, UpdateTaskData, UpdateUserData,
};
use crate::models::User;

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const PASSWORD_MIN_CHARS: usize = 6;
pub const AVATAR_MAX_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,

    #[error("New password must be at least 6 characters long")]
    NewPasswordTooShort,

    #[error("New passwords do not match")]
    PasswordMismatch,

    #[error("Please select a valid image file")]
    NotAnImage,

    #[error("Image size must be less than 5MB")]
    ImageTooLarge,
}

fn required(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(())
    }
}

fn at_most(field: &'static str, value: &str, max: usize) -> Result<(), FormError> {
    if value.chars().count() > max {
        Err(FormError::TooLong { field, max })
    } else {
        Ok(())
    }
}

/// "12/100 characters"
pub fn char_counter(value: &str, max: usize) -> String {
    format!("{}/{} characters", value.chars().count(), max)
}

// ========================
// Task Form
// ========================

/// Fields shared by the create and update task forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
}

impl TaskForm {
    /// Submit stays disabled until both fields have content.
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    pub fn validate(&self) -> Result<(), FormError> {
        required("Title", &self.title)?;
        required("Description", &self.description)?;
        at_most("Title", &self.title, TITLE_MAX_CHARS)?;
        at_most("Description", &self.description, DESCRIPTION_MAX_CHARS)
    }

    pub fn to_create(&self) -> Result<CreateTaskData, FormError> {
        self.validate()?;
        Ok(CreateTaskData {
            title: self.title.clone(),
            description: self.description.clone(),
        })
    }

    pub fn to_update(&self) -> Result<UpdateTaskData, FormError> {
        self.validate()?;
        Ok(UpdateTaskData {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
        })
    }
}

// ========================
// Auth Forms
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterData, FormError> {
        required("First name", &self.first_name)?;
        required("Last name", &self.last_name)?;
        required("Username", &self.username)?;
        required("Email", &self.email)?;
        required("Password", &self.password)?;
        if self.password.chars().count() < PASSWORD_MIN_CHARS {
            return Err(FormError::PasswordTooShort);
        }
        Ok(RegisterData {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub login_identifier: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginData, FormError> {
        required("Email or username", &self.login_identifier)?;
        required("Password", &self.password)?;
        Ok(LoginData {
            login_identifier: self.login_identifier.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    /// Mismatch is reported before length.
    pub fn validate(&self) -> Result<UpdatePasswordData, FormError> {
        if self.new_password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if self.new_password.chars().count() < PASSWORD_MIN_CHARS {
            return Err(FormError::NewPasswordTooShort);
        }
        required("Current password", &self.current_password)?;
        Ok(UpdatePasswordData {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

// ========================
// Profile Form
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }

    pub fn validate(&self) -> Result<UpdateUserData, FormError> {
        required("First name", &self.first_name)?;
        required("Last name", &self.last_name)?;
        required("Username", &self.username)?;
        required("Email", &self.email)?;
        Ok(UpdateUserData {
            first_name: Some(self.first_name.trim().to_string()),
            last_name: Some(self.last_name.trim().to_string()),
            username: Some(self.username.trim().to_string()),
            email: Some(self.email.trim().to_string()),
        })
    }
}

/// Check a picked avatar file before reading it.
pub fn validate_avatar(content_type: &str, size_bytes: u64) -> Result<(), FormError> {
    if !content_type.starts_with("image/") {
        return Err(FormError::NotAnImage);
    }
    if size_bytes > AVATAR_MAX_BYTES {
        return Err(FormError::ImageTooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::user;

    fn task_form(title: &str, description: &str) -> TaskForm {
        TaskForm {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_title_over_100_chars_is_rejected() {
        let form = task_form(&"x".repeat(101), "fine");
        assert_eq!(
            form.to_create(),
            Err(FormError::TooLong {
                field: "Title",
                max: TITLE_MAX_CHARS
            })
        );
        assert!(task_form(&"x".repeat(100), "fine").to_create().is_ok());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let form = task_form(&"é".repeat(100), "ok");
        assert!(form.validate().is_ok());
        assert_eq!(char_counter(&form.title, TITLE_MAX_CHARS), "100/100 characters");
    }

    #[test]
    fn test_description_limit_and_required() {
        assert_eq!(
            task_form("t", &"d".repeat(501)).validate(),
            Err(FormError::TooLong {
                field: "Description",
                max: DESCRIPTION_MAX_CHARS
            })
        );
        let blank = task_form("   ", "d");
        assert!(!blank.can_submit());
        assert_eq!(blank.validate(), Err(FormError::Required("Title")));
    }

    #[test]
    fn test_update_sends_both_fields() {
        let data = task_form("t", "d").to_update().unwrap();
        assert_eq!(data.title.as_deref(), Some("t"));
        assert_eq!(data.description.as_deref(), Some("d"));
    }

    #[test]
    fn test_register_password_min_length() {
        let mut form = RegisterForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: "ada".to_string(),
            email: " ada@example.com ".to_string(),
            password: "12345".to_string(),
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err, FormError::PasswordTooShort);
        assert_eq!(err.to_string(), "Password must be at least 6 characters long");

        form.password = "123456".to_string();
        let data = form.validate().unwrap();
        assert_eq!(data.email, "ada@example.com");
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm {
            login_identifier: "ada".to_string(),
            password: String::new(),
        };
        assert_eq!(form.validate(), Err(FormError::Required("Password")));
    }

    #[test]
    fn test_password_mismatch_checked_first() {
        let form = PasswordForm {
            current_password: "old-secret".to_string(),
            new_password: "abc".to_string(),
            confirm_password: "abd".to_string(),
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err, FormError::PasswordMismatch);
        assert_eq!(err.to_string(), "New passwords do not match");

        let short = PasswordForm {
            confirm_password: "abc".to_string(),
            ..form
        };
        assert_eq!(
            short.validate().unwrap_err().to_string(),
            "New password must be at least 6 characters long"
        );
    }

    #[test]
    fn test_profile_form_prefills_from_user() {
        let form = ProfileForm::from_user(&user());
        assert_eq!(form.email, "ada@example.com");
        let data = form.validate().unwrap();
        assert_eq!(data.username.as_deref(), Some("ada"));
    }

    #[test]
    fn test_avatar_checks() {
        assert_eq!(validate_avatar("image/png", 1024), Ok(()));
        assert_eq!(validate_avatar("image/jpeg", AVATAR_MAX_BYTES), Ok(()));
        assert_eq!(
            validate_avatar("application/pdf", 1024),
            Err(FormError::NotAnImage)
        );
        assert_eq!(
            validate_avatar("image/png", AVATAR_MAX_BYTES + 1),
            Err(FormError::ImageTooLarge)
        );
    }
}
