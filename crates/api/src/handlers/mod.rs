pub mod about;
pub mod auth;
pub mod contact;
pub mod hero;
pub mod project;
pub mod service;
pub mod upload;
