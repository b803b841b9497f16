//! Authentication form handling for Tally
//!
//! This module owns the boundary between the auth screens and the
//! authentication layer: it checks that required fields are filled in and,
//! only then, hands the credentials to a [`SubmitHandler`]. What the handler
//! does with them (network calls, sessions) is outside this crate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown when a required field is left empty
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill all the fields";

/// Which form a validation error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    /// Sign-in form
    Login,
    /// Account creation form
    Register,
}

impl FormKind {
    /// Title used for the alert raised by this form
    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Login => "Login",
            FormKind::Register => "Sign up",
        }
    }
}

/// Form validation errors
///
/// Recovered inside the screen: the screen shows a prompt and never asks
/// for navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are empty
    #[error("{}: {}", .form.title(), MISSING_FIELDS_MESSAGE)]
    MissingFields {
        /// Form being submitted
        form: FormKind,
        /// Names of the empty fields
        fields: Vec<&'static str>,
    },
}

impl ValidationError {
    /// Alert title for this error
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingFields { form, .. } => form.title(),
        }
    }

    /// User-facing prompt for this error
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields { .. } => MISSING_FIELDS_MESSAGE,
        }
    }
}

/// Result type for form operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Validated sign-in credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// Validated account creation details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// Receiver of validated credentials (implemented by the auth layer)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    /// Sign in with an email and password
    async fn submit(&self, email: String, password: String);

    /// Create an account
    async fn register(&self, name: String, email: String, password: String);
}

/// Raw sign-in form values, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    /// Email field
    pub email: String,
    /// Password field
    pub password: String,
}

impl LoginForm {
    /// Check that every field has a value
    pub fn validate(&self) -> Result<Credentials> {
        let missing = missing_fields(&[("email", &self.email), ("password", &self.password)]);
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields {
                form: FormKind::Login,
                fields: missing,
            });
        }
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Raw account creation form values, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    /// Name field
    pub name: String,
    /// Email field
    pub email: String,
    /// Password field
    pub password: String,
}

impl RegisterForm {
    /// Check that every field has a value
    pub fn validate(&self) -> Result<Registration> {
        let missing = missing_fields(&[
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
        ]);
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields {
                form: FormKind::Register,
                fields: missing,
            });
        }
        Ok(Registration {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

fn missing_fields(fields: &[(&'static str, &String)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect()
}

/// A validated form, ready for the handler
///
/// Built by the screen at tap time so the handler call can run off the UI
/// loop while the screen shows its loading state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum Submission {
    /// Sign in
    Login(Credentials),
    /// Create an account
    Register(Registration),
}

impl Submission {
    /// Form this submission came from
    pub fn kind(&self) -> FormKind {
        match self {
            Submission::Login(_) => FormKind::Login,
            Submission::Register(_) => FormKind::Register,
        }
    }

    /// Hand the values to `handler`, exactly once
    pub async fn send<H>(self, handler: &H)
    where
        H: SubmitHandler + ?Sized,
    {
        match self {
            Submission::Login(credentials) => {
                tracing::info!("Submitting login");
                handler.submit(credentials.email, credentials.password).await;
            }
            Submission::Register(registration) => {
                tracing::info!("Submitting registration");
                handler
                    .register(registration.name, registration.email, registration.password)
                    .await;
            }
        }
    }
}

impl LoginForm {
    /// Validate into a submission, logging a blocked attempt
    pub fn submission(&self) -> Result<Submission> {
        let credentials = self.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "Login blocked by validation");
        })?;
        Ok(Submission::Login(credentials))
    }
}

impl RegisterForm {
    /// Validate into a submission, logging a blocked attempt
    pub fn submission(&self) -> Result<Submission> {
        let registration = self.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "Registration blocked by validation");
        })?;
        Ok(Submission::Register(registration))
    }
}

/// Validate a sign-in form and pass it to the handler
///
/// The handler is invoked exactly once on success and not at all when
/// validation fails.
pub async fn submit_login<H>(form: &LoginForm, handler: &H) -> Result<()>
where
    H: SubmitHandler + ?Sized,
{
    form.submission()?.send(handler).await;
    Ok(())
}

/// Validate an account creation form and pass it to the handler
pub async fn submit_registration<H>(form: &RegisterForm, handler: &H) -> Result<()>
where
    H: SubmitHandler + ?Sized,
{
    form.submission()?.send(handler).await;
    Ok(())
}
