//! Hacker Stories App
//!
//! Search input over a fixed story list; the term survives reloads.

use std::sync::Arc;

use leptos::prelude::*;
use storage_state::{use_storage_state, BrowserStorage, RawText};

use crate::components::{InputWithLabel, StoryList};
use crate::models::seed_stories;
use crate::search::{filtered_stories, reduce, SearchCommand, DEFAULT_SEARCH_TERM, SEARCH_KEY};

#[component]
pub fn App() -> impl IntoView {
    let stories = seed_stories();

    let (search_term, set_search_term) = use_storage_state::<RawText>(
        Arc::new(BrowserStorage::new()),
        SEARCH_KEY,
        DEFAULT_SEARCH_TERM.to_string(),
    );

    let handle_search = move |text: String| {
        log::debug!("Search term changed to {:?}", text);
        set_search_term.update(|term| *term = reduce(term, SearchCommand::SetSearchTerm(text)));
    };

    let searched_stories = Signal::derive(move || filtered_stories(&stories, &search_term.get()));

    view! {
        <div>
            <h1>"My Hacker Stories"</h1>

            <InputWithLabel
                id="search"
                label="Search"
                value=search_term
                on_input_change=handle_search
            />

            <hr />

            <StoryList list=searched_stories />
        </div>
    }
}
