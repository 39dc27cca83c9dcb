//! Story Search
//!
//! Search term commands and the case-insensitive title filter.

use crate::models::Story;

/// Storage key of the search term
pub const SEARCH_KEY: &str = "search";

/// Search term used before anything was stored
pub const DEFAULT_SEARCH_TERM: &str = "React";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    SetSearchTerm(String),
}

/// Next search term; replaced unconditionally
pub fn reduce(_term: &str, command: SearchCommand) -> String {
    match command {
        SearchCommand::SetSearchTerm(next) => next,
    }
}

/// Stories whose lower-cased title contains the lower-cased term, in order
///
/// An empty term matches every story.
pub fn filtered_stories(stories: &[Story], search_term: &str) -> Vec<Story> {
    let needle = search_term.to_lowercase();
    stories
        .iter()
        .filter(|story| story.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
