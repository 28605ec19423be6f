//! Presentation Layer
//!
//! HTTP handlers, DTOs, routers and the staff gate.

pub mod dto;
pub mod gate;
pub mod handlers;
pub mod router;
