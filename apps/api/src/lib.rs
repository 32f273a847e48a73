pub mod analyzer;
pub mod ats;
pub mod chat;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod inference;
pub mod models;
pub mod reader;
pub mod recommend;
pub mod routes;
pub mod state;
