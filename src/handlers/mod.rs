//! HTTP handlers for the greeting and article resources.

pub mod articles;
pub mod greeting;
