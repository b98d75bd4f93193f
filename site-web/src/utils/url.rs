//! URL query helpers.
//!
//! The invest page accepts `?project=<id>` to open the wizard directly on a
//! project. Reading straight from `window.location.search` covers the case
//! where the router's query map is not initialized yet.

use web_sys::window;

/// Value of one query parameter in the current URL.
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    query_value(&search, key)
}

/// Look a key up in a raw query string (with or without the leading `?`).
pub fn query_value(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        return None;
    }
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some((k, value)) if k == key => {
                return Some(
                    urlencoding::decode(value)
                        .unwrap_or_else(|_| value.into())
                        .into_owned(),
                );
            }
            // Bare key with no value.
            None if pair == key => return Some(String::new()),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_values() {
        assert_eq!(query_value("?project=3&ref=home", "project"), Some("3".into()));
        assert_eq!(query_value("project=3&ref=home", "ref"), Some("home".into()));
        assert_eq!(query_value("?project=3", "missing"), None);
        assert_eq!(query_value("", "project"), None);
    }

    #[test]
    fn decodes_and_handles_bare_keys() {
        assert_eq!(
            query_value("?q=the%20meridian", "q"),
            Some("the meridian".into())
        );
        assert_eq!(query_value("?flag&x=1", "flag"), Some(String::new()));
    }
}
