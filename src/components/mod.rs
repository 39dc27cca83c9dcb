//! UI Components
//!
//! Stateless leaves for the search input and the story list.

mod input_with_label;
mod story_list;

pub use input_with_label::InputWithLabel;
pub use story_list::{StoryItem, StoryList};
