//! Integration tests with mock HTTP server

pub mod credits;
pub mod humanize;
