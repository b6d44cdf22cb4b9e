//! Server-rendered HTML pages.
//!
//! Every piece of user-supplied text goes through [`escape`] before it is
//! written into markup.

use std::fmt::Write;

use crate::constants::{
    DEFAULT_COLOR, PAGE_TITLE_CREATE, PAGE_TITLE_DELETE, PAGE_TITLE_DETAILS, PAGE_TITLE_EDIT, PAGE_TITLE_INDEX,
};

use super::controller::{ItemPage, ItemView, ListParams, SortDirection};

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto}\
table{border-collapse:collapse;width:100%}td,th{padding:.4rem;border-bottom:1px solid #ccc;text-align:left}\
.swatch{display:inline-block;width:1rem;height:1rem;border:1px solid #999;vertical-align:middle}\
.done{text-decoration:line-through;color:#777}.error{color:#b00}";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Percent-encode a query-string value.
fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => encoded.push(byte as char),
            b' ' => encoded.push('+'),
            _ => {
                let _ = write!(encoded, "%{:02X}", byte);
            }
        }
    }
    encoded
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{} - todolist</title>\n\
         <style>{}</style>\n</head>\n<body>\n<h1>{}</h1>\n{}\n</body>\n</html>\n",
        escape(title),
        STYLE,
        escape(title),
        body
    )
}

fn swatch(color: &str) -> String {
    format!("<span class=\"swatch\" style=\"background:{}\"></span>", escape(color))
}

/// Index query string for `params` with the sort and page overridden.
fn index_href(params: &ListParams, sort: Option<SortDirection>, page: u64) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();
    if let Some(sort) = sort {
        pairs.push(("sort", sort.as_str().to_string()));
    }
    if page > 1 {
        pairs.push(("page", page.to_string()));
    }
    if let Some(completed) = params.completed {
        pairs.push(("completed", completed.to_string()));
    }
    if let Some(color) = &params.color {
        pairs.push(("color", color.clone()));
    }
    if let Some(title) = &params.title {
        pairs.push(("title", title.clone()));
    }

    if pairs.is_empty() {
        return "/".to_string();
    }
    let query: Vec<String> = pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, encode_query_value(&value)))
        .collect();
    escape(&format!("/?{}", query.join("&")))
}

pub fn index(page: &ItemPage, params: &ListParams) -> String {
    let mut body = String::new();
    body.push_str("<p><a href=\"/items/new\">Create new</a></p>\n");

    let completed_option = |value: Option<bool>, label: &str| {
        let selected = if params.completed == value { " selected" } else { "" };
        let raw = value.map(|v| v.to_string()).unwrap_or_default();
        format!("<option value=\"{}\"{}>{}</option>", raw, selected, label)
    };
    let _ = write!(
        body,
        "<form method=\"get\" action=\"/\">\n\
         <input type=\"hidden\" name=\"sort\" value=\"{}\">\n\
         <label>Title <input name=\"title\" value=\"{}\"></label>\n\
         <label>Color <input name=\"color\" value=\"{}\"></label>\n\
         <label>Status <select name=\"completed\">{}{}{}</select></label>\n\
         <button type=\"submit\">Filter</button>\n</form>\n",
        params.sort.map(|s| s.as_str()).unwrap_or_default(),
        escape(params.title.as_deref().unwrap_or_default()),
        escape(params.color.as_deref().unwrap_or_default()),
        completed_option(None, "Any"),
        completed_option(Some(false), "Open"),
        completed_option(Some(true), "Completed"),
    );

    let _ = write!(
        body,
        "<table>\n<thead><tr><th>Title (<a href=\"{}\">asc</a> | <a href=\"{}\">desc</a>)</th>\
         <th>Completed</th><th>Color</th><th></th></tr></thead>\n<tbody>\n",
        index_href(params, Some(SortDirection::Asc), 1),
        index_href(params, Some(SortDirection::Desc), 1),
    );

    for item in &page.items {
        let class = if item.is_completed { " class=\"done\"" } else { "" };
        let _ = write!(
            body,
            "<tr><td{}>{}</td><td>{}</td><td>{} {}</td>\
             <td><a href=\"/items/{id}/edit\">Edit</a> | <a href=\"/items/{id}\">Details</a> | \
             <a href=\"/items/{id}/delete\">Delete</a></td></tr>\n",
            class,
            escape(&item.title),
            if item.is_completed { "yes" } else { "no" },
            swatch(&item.color),
            escape(&item.color),
            id = item.id,
        );
    }
    if page.items.is_empty() {
        body.push_str("<tr><td colspan=\"4\">No items.</td></tr>\n");
    }
    body.push_str("</tbody>\n</table>\n");

    body.push_str("<p>");
    if page.has_previous() {
        let _ = write!(
            body,
            "<a href=\"{}\">Previous</a> ",
            index_href(params, params.sort, page.page - 1)
        );
    }
    let _ = write!(body, "Page {} ({} items)", page.page, page.total);
    if page.has_next() {
        let _ = write!(
            body,
            " <a href=\"{}\">Next</a>",
            index_href(params, params.sort, page.page + 1)
        );
    }
    body.push_str("</p>\n");

    layout(PAGE_TITLE_INDEX, &body)
}

fn item_fields(item: &ItemView) -> String {
    format!(
        "<dl>\n<dt>Title</dt><dd>{}</dd>\n<dt>Completed</dt><dd>{}</dd>\n<dt>Color</dt><dd>{} {}</dd>\n</dl>\n",
        escape(&item.title),
        if item.is_completed { "yes" } else { "no" },
        swatch(&item.color),
        escape(&item.color),
    )
}

pub fn details(item: &ItemView) -> String {
    let body = format!(
        "{}<p><a href=\"/items/{id}/edit\">Edit</a> | <a href=\"/\">Back to list</a></p>\n",
        item_fields(item),
        id = item.id
    );
    layout(PAGE_TITLE_DETAILS, &body)
}

fn error_line(error: Option<&str>) -> String {
    error
        .map(|message| format!("<p class=\"error\">{}</p>\n", escape(message)))
        .unwrap_or_default()
}

pub fn create_form(title: &str, color: Option<&str>, error: Option<&str>) -> String {
    let body = format!(
        "{}<form method=\"post\" action=\"/items\">\n\
         <p><label>Title <input name=\"title\" value=\"{}\"></label></p>\n\
         <p><label>Color <input name=\"color\" value=\"{}\"></label></p>\n\
         <p><button type=\"submit\">Create</button></p>\n</form>\n\
         <p><a href=\"/\">Back to list</a></p>\n",
        error_line(error),
        escape(title),
        escape(color.unwrap_or(DEFAULT_COLOR)),
    );
    layout(PAGE_TITLE_CREATE, &body)
}

pub fn edit_form(item: &ItemView, error: Option<&str>) -> String {
    let body = format!(
        "{}<form method=\"post\" action=\"/items/{id}/edit\">\n\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
         <p><label>Title <input name=\"title\" value=\"{}\"></label></p>\n\
         <p><label>Color <input name=\"color\" value=\"{}\"></label></p>\n\
         <p><label><input type=\"checkbox\" name=\"is_completed\" value=\"true\"{}> Completed</label></p>\n\
         <p><button type=\"submit\">Save</button></p>\n</form>\n\
         <p><a href=\"/\">Back to list</a></p>\n",
        error_line(error),
        escape(&item.title),
        escape(&item.color),
        if item.is_completed { " checked" } else { "" },
        id = item.id,
    );
    layout(PAGE_TITLE_EDIT, &body)
}

pub fn delete_confirm(item: &ItemView) -> String {
    let body = format!(
        "<p>Are you sure you want to delete this?</p>\n{}\
         <form method=\"post\" action=\"/items/{id}/delete\">\n\
         <button type=\"submit\">Delete</button> | <a href=\"/\">Back to list</a>\n</form>\n",
        item_fields(item),
        id = item.id
    );
    layout(PAGE_TITLE_DELETE, &body)
}

pub fn error_page(heading: &str, message: &str) -> String {
    let body = format!(
        "<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to list</a></p>\n",
        escape(message)
    );
    layout(heading, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn view(title: &str) -> ItemView {
        ItemView {
            id: Uuid::new_v4(),
            title: title.to_string(),
            is_completed: false,
            color: "#dff".to_string(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(
            escape("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_encode_query_value() {
        assert_eq!(encode_query_value("milk"), "milk");
        assert_eq!(encode_query_value("buy milk"), "buy+milk");
        assert_eq!(encode_query_value("#dff&x"), "%23dff%26x");
    }

    #[test]
    fn test_index_href_keeps_filters() {
        let params = ListParams {
            title: Some("a b".to_string()),
            completed: Some(true),
            ..ListParams::default()
        };
        assert_eq!(
            index_href(&params, Some(SortDirection::Asc), 2),
            "/?sort=asc&amp;page=2&amp;completed=true&amp;title=a+b"
        );
        assert_eq!(index_href(&ListParams::default(), None, 1), "/");
    }

    #[test]
    fn test_details_escapes_title() {
        let html = details(&view("<b>bold</b>"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn test_edit_form_checkbox_state() {
        let mut item = view("Buy milk");
        assert!(!edit_form(&item, None).contains(" checked"));
        item.is_completed = true;
        assert!(edit_form(&item, None).contains(" checked"));
    }

    #[test]
    fn test_create_form_shows_error() {
        let html = create_form("", None, Some("The Title field is required."));
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("value=\"#dff\""));
    }
}
