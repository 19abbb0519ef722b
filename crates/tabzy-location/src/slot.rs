//! URL slots
//!
//! A slot is the place in a URL where the active tab identifier is stored:
//! either the fragment, or a named query parameter. Writing through a slot
//! leaves every unrelated part of the URL untouched.

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSlot {
    /// The hash segment holds the identifier.
    Fragment,
    /// The named query parameter holds the identifier.
    Param(String),
}

impl UrlSlot {
    /// Read the stored identifier, if present and non-empty.
    ///
    /// When the parameter appears more than once, the first occurrence wins.
    pub fn read(&self, url: &Url) -> Option<String> {
        match self {
            UrlSlot::Fragment => url
                .fragment()
                .filter(|f| !f.is_empty())
                .map(|f| f.to_string()),
            UrlSlot::Param(key) => url
                .query_pairs()
                .find(|(k, _)| k.as_ref() == key.as_str())
                .map(|(_, v)| v.into_owned())
                .filter(|v| !v.is_empty()),
        }
    }

    /// Return a copy of `url` with the identifier written into the slot.
    ///
    /// Param mode replaces the first occurrence of the key in place,
    /// drops later duplicates of it, appends when absent, and preserves
    /// all other query parameters in order.
    pub fn write(&self, url: &Url, value: &str) -> Url {
        let mut updated = url.clone();

        match self {
            UrlSlot::Fragment => {
                updated.set_fragment(Some(value));
            }
            UrlSlot::Param(key) => {
                let mut pairs: Vec<(String, String)> = Vec::new();
                let mut placed = false;

                for (k, v) in url.query_pairs() {
                    if k.as_ref() == key.as_str() {
                        if !placed {
                            pairs.push((key.clone(), value.to_string()));
                            placed = true;
                        }
                    } else {
                        pairs.push((k.into_owned(), v.into_owned()));
                    }
                }

                if !placed {
                    pairs.push((key.clone(), value.to_string()));
                }

                updated
                    .query_pairs_mut()
                    .clear()
                    .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
        }

        updated
    }
}

impl std::fmt::Display for UrlSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlSlot::Fragment => write!(f, "fragment"),
            UrlSlot::Param(key) => write!(f, "param:{}", key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_round_trip() {
        let slot = UrlSlot::Fragment;
        let url = Url::parse("https://example.com/page").unwrap();

        assert_eq!(slot.read(&url), None);

        let written = slot.write(&url, "overview");
        assert_eq!(written.as_str(), "https://example.com/page#overview");
        assert_eq!(slot.read(&written), Some("overview".to_string()));
    }

    #[test]
    fn test_empty_fragment_reads_as_absent() {
        let slot = UrlSlot::Fragment;
        let url = Url::parse("https://example.com/page#").unwrap();

        assert_eq!(slot.read(&url), None);
    }

    #[test]
    fn test_param_preserves_other_parameters() {
        let slot = UrlSlot::Param("tab".to_string());
        let url = Url::parse("https://example.com/?x=1&tab=a&y=2").unwrap();

        let written = slot.write(&url, "b");
        assert_eq!(written.as_str(), "https://example.com/?x=1&tab=b&y=2");
        assert_eq!(slot.read(&written), Some("b".to_string()));
    }

    #[test]
    fn test_param_appended_when_absent() {
        let slot = UrlSlot::Param("tab".to_string());
        let url = Url::parse("https://example.com/?x=1").unwrap();

        let written = slot.write(&url, "a");
        assert_eq!(written.as_str(), "https://example.com/?x=1&tab=a");
    }

    #[test]
    fn test_param_duplicates_collapse() {
        let slot = UrlSlot::Param("tab".to_string());
        let url = Url::parse("https://example.com/?tab=a&x=1&tab=c").unwrap();

        // First occurrence wins on read
        assert_eq!(slot.read(&url), Some("a".to_string()));

        // Write replaces in place and drops the duplicate
        let written = slot.write(&url, "b");
        assert_eq!(written.as_str(), "https://example.com/?tab=b&x=1");
    }

    #[test]
    fn test_empty_param_reads_as_absent() {
        let slot = UrlSlot::Param("tab".to_string());
        let url = Url::parse("https://example.com/?tab=").unwrap();

        assert_eq!(slot.read(&url), None);
    }
}
