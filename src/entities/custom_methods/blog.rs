use crate::blog;

pub trait BlogTagsTrait {
    fn tag_list(&self) -> Vec<String>;
}

impl BlogTagsTrait for blog::Model {
    fn tag_list(&self) -> Vec<String> {
        split_tags(&self.tags)
    }
}

/// Tags are persisted as one comma separated column.
pub fn join_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}
