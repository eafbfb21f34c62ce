//! Request handlers

pub mod claims;
pub mod model;
pub mod health;
