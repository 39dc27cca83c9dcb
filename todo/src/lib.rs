//! Todo list with state persisted to browser storage.

pub mod app;
pub mod components;
pub mod context;
pub mod document;
pub mod models;
pub mod store;
