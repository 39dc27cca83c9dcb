//! Story List Component

use leptos::prelude::*;

use crate::models::Story;

/// Unordered list of stories keyed by `objectID`
#[component]
pub fn StoryList(#[prop(into)] list: Signal<Vec<Story>>) -> impl IntoView {
    view! {
        <ul>
            <For
                each=move || list.get()
                key=|story| story.object_id
                children=move |story| view! { <StoryItem story=story /> }
            />
        </ul>
    }
}

#[component]
pub fn StoryItem(story: Story) -> impl IntoView {
    let Story { title, url, author, num_comments, points, .. } = story;

    view! {
        <li>
            <span><a href=url>{title}</a></span>
            <span>{author}</span>
            <span>{num_comments}</span>
            <span>{points}</span>
        </li>
    }
}
