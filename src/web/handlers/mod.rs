//! HTTP request handlers for all web endpoints.

pub mod generate;
pub mod health;
pub mod home;
