//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate capture, gesture and normalization into page-level APIs.
//! - Keep FFI/CLI layers decoupled from per-contact engine details.

pub mod ink_service;
