//! HTTP route handlers.

pub mod catalog;
