//! Page-navigation gestures.
//!
//! # Responsibility
//! - Classify one press-to-release contact into a cardinal swipe direction.
//!
//! # Invariants
//! - Vote state lives exactly one contact and is never shared or persisted.

pub mod swipe;
