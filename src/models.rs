//! Story Models

use serde::{Deserialize, Serialize};

/// Story entry, field names as served by the Hacker News search API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: i32,
    #[serde(rename = "objectID")]
    pub object_id: u32,
}

/// The fixed list shown for the whole session
pub fn seed_stories() -> Vec<Story> {
    vec![
        Story {
            title: "React".to_string(),
            url: "https://reactjs.org".to_string(),
            author: "Jordan Walke".to_string(),
            num_comments: 3,
            points: 4,
            object_id: 0,
        },
        Story {
            title: "Redux".to_string(),
            url: "https://redux.js.org".to_string(),
            author: "Dan Abramov, Andrew Clark".to_string(),
            num_comments: 2,
            points: 5,
            object_id: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let stories = seed_stories();
        assert_eq!(stories.len(), 2);
        assert_ne!(stories[0].object_id, stories[1].object_id);
    }

    #[test]
    fn test_object_id_field_name() {
        let json = serde_json::to_value(&seed_stories()[1]).unwrap();
        assert_eq!(json["objectID"], 1);
        assert_eq!(json["num_comments"], 2);
    }
}
