//! Filterable list of hacker stories with a persisted search term.

pub mod app;
pub mod components;
pub mod models;
pub mod search;
