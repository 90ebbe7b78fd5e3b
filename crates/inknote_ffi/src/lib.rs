//! Flutter bridge for the InkNote ink pipeline.

pub mod api;
