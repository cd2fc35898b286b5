//! Feedback board server: a SQLite-backed store of name/message feedback,
//! exposed over `GET`/`POST /api/feedback`.

pub mod api;
pub mod common;
pub mod config;
pub mod service;
pub mod storage;
