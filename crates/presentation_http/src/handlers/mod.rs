//! HTTP request handlers

pub mod email;
pub mod health;
pub mod home;
pub mod plan;
pub mod session;
