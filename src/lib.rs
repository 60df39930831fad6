pub mod application;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
