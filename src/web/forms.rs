//! Raw query-string and form payloads, and their parsing.

use serde::Deserialize;

use super::controller::{ListParams, SortDirection};

/// Query string of the index page. Every field is parsed leniently:
/// unknown or malformed values are ignored rather than rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IndexQuery {
    pub sort: Option<String>,
    pub page: Option<String>,
    pub completed: Option<String>,
    pub color: Option<String>,
    pub title: Option<String>,
}

impl IndexQuery {
    pub fn into_params(self) -> ListParams {
        ListParams {
            sort: self.sort.as_deref().and_then(SortDirection::parse),
            page: self
                .page
                .as_deref()
                .and_then(|p| p.trim().parse::<u64>().ok())
                .filter(|p| *p > 0)
                .unwrap_or(1),
            completed: self.completed.as_deref().and_then(parse_bool),
            color: non_blank(self.color),
            title: non_blank(self.title),
        }
    }
}

/// Fields posted by the create form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateForm {
    pub title: String,
    pub color: Option<String>,
}

/// Fields posted by the edit form. An unchecked checkbox is simply absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EditForm {
    pub id: String,
    pub title: String,
    pub color: String,
    pub is_completed: Option<String>,
}

impl EditForm {
    pub fn is_completed(&self) -> bool {
        self.is_completed.is_some()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_query_defaults() {
        let params = IndexQuery::default().into_params();
        assert_eq!(params, ListParams::default());
    }

    #[test]
    fn test_index_query_parsing() {
        let query = IndexQuery {
            sort: Some("DESC".to_string()),
            page: Some("3".to_string()),
            completed: Some("false".to_string()),
            color: Some("#dff".to_string()),
            title: Some(" ".to_string()),
        };
        let params = query.into_params();
        assert_eq!(params.sort, Some(SortDirection::Desc));
        assert_eq!(params.page, 3);
        assert_eq!(params.completed, Some(false));
        assert_eq!(params.color.as_deref(), Some("#dff"));
        assert!(params.title.is_none());
    }

    #[test]
    fn test_malformed_values_are_ignored() {
        let query = IndexQuery {
            sort: Some("up".to_string()),
            page: Some("0".to_string()),
            completed: Some("maybe".to_string()),
            ..IndexQuery::default()
        };
        let params = query.into_params();
        assert!(params.sort.is_none());
        assert_eq!(params.page, 1);
        assert!(params.completed.is_none());
    }
}
