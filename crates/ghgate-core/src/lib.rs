pub mod access;
pub mod config;
pub mod github;
pub mod logging;
pub mod route;
pub mod search;
