use std::borrow::Cow;

use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

const PASSWORD_RULES: &str = "At least 8 characters, At least one capital letter, At least one lowercase letter, At least one number, At least one special character (such as @, #, !, etc.)";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 50))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = validate_password))]
    pub password: String,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 50))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(custom(function = validate_password))]
    pub password: Option<String>,
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.len() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    if long_enough && has_upper && has_lower && has_digit && has_special {
        Ok(())
    } else {
        let mut err = ValidationError::new("password_strength");
        err.message = Some(Cow::Borrowed(PASSWORD_RULES));
        Err(err)
    }
}
