//! Unified Result Model
//!
//! Every command maps its output onto this model before rendering, so all
//! formats share one shape.

use serde::{Deserialize, Serialize};

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    File,
    Match,
    Count,
}

/// The unified result item that all commands produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// Path relative to root, using '/' as separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Matched value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Occurrence count for count results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl ResultItem {
    /// Create a new file result
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            kind: Kind::File,
            path: Some(path.into()),
            value: None,
            count: None,
        }
    }

    /// Create a new match result
    pub fn matched(value: impl Into<String>) -> Self {
        Self {
            kind: Kind::Match,
            path: None,
            value: Some(value.into()),
            count: None,
        }
    }

    /// Create a new count result
    pub fn count(count: u64, value: impl Into<String>) -> Self {
        Self {
            kind: Kind::Count,
            path: None,
            value: Some(value.into()),
            count: Some(count),
        }
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    #[allow(dead_code)]
    pub fn extend(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.items.extend(items);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_item_file() {
        let item = ResultItem::file("src/main.rs");
        assert_eq!(item.kind, Kind::File);
        assert_eq!(item.path, Some("src/main.rs".to_string()));
        assert!(item.value.is_none());
        assert!(item.count.is_none());
    }

    #[test]
    fn test_result_item_matched() {
        let item = ResultItem::matched("import sys");
        assert_eq!(item.kind, Kind::Match);
        assert_eq!(item.value, Some("import sys".to_string()));
        assert!(item.path.is_none());
    }

    #[test]
    fn test_result_item_count() {
        let item = ResultItem::count(3, "sys");
        assert_eq!(item.kind, Kind::Count);
        assert_eq!(item.count, Some(3));
        assert_eq!(item.value, Some("sys".to_string()));
    }

    #[test]
    fn test_kind_serialization() {
        let item = ResultItem::count(2, "sys");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"kind\":\"count\""));
        assert!(json.contains("\"count\":2"));
    }

    #[test]
    fn test_none_fields_are_skipped() {
        let item = ResultItem::file("a.py");
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("\"value\""));
        assert!(!json.contains("\"count\""));
    }

    #[test]
    fn test_result_item_deserialization() {
        let json = r#"{"kind":"count","value":"sys","count":2}"#;
        let item: ResultItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, Kind::Count);
        assert_eq!(item.count, Some(2));
    }

    #[test]
    fn test_result_set_push_and_len() {
        let mut set = ResultSet::new();
        assert!(set.is_empty());
        set.push(ResultItem::file("a.py"));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_result_set_extend() {
        let mut set = ResultSet::new();
        set.extend(vec![ResultItem::file("a.py"), ResultItem::file("b.py")]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_result_set_from_iter() {
        let set: ResultSet = vec![ResultItem::matched("a"), ResultItem::matched("b")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_result_set_into_iter() {
        let mut set = ResultSet::new();
        set.push(ResultItem::file("a.py"));
        set.push(ResultItem::file("b.py"));

        let items: Vec<_> = set.into_iter().collect();
        assert_eq!(items.len(), 2);
    }
}
