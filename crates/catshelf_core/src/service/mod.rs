//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep screen/CLI layers decoupled from storage details.

pub mod cat_service;
