pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod deep_link;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
