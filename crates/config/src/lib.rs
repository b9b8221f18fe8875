// Configuration loading

pub mod auth;
pub mod settings;
