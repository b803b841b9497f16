//! Core application logic for Tally
//!
//! The presentation layer only needs one piece of shared logic: turning
//! typed form values into validated credentials for the auth layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;

pub use auth::{
    submit_login, submit_registration, Credentials, FormKind, LoginForm, RegisterForm,
    Registration, SubmitHandler, Submission, ValidationError,
};
