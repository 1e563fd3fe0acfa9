pub mod config;
pub mod doc;
pub mod dto;
pub mod error;
pub mod models;
pub mod response;
