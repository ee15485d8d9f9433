pub mod archive;
pub mod config;
pub mod fetch;
pub mod maven;
pub mod page;
pub mod platform;
pub mod portal;
pub mod sanitize;
pub mod version;
pub mod workspace;
