//! Value Object Module

pub mod certificate_type;
pub mod email;
pub mod request_id;
pub mod request_status;
pub mod text;
