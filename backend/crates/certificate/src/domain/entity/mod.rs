//! Entity Module

pub mod certificate_request;
pub mod submission;
pub mod user_profile;

mod record;
