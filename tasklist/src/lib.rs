//! `Tasklist`: terminal task list library.

pub mod app;
pub mod board;
pub mod config;
pub mod ui;
