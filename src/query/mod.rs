//! Parsing of the raw query into a needle and the filters applied to each haystack.
//!
//! The raw query is split on single spaces. Tokens starting with one of the filter sigils
//! (`*`, `$`, `^`, `?`, optionally negated with `!`) become [`Filter`]s, every other token is
//! concatenated, without a separator, into the needle. For example `"*src foo $.rs"` has the
//! needle `"foo"` and two filters.
//!
//! Matching is case insensitive unless the needle contains an uppercase char ("smart case").
//! Filter tokens don't take part in that decision.

use std::borrow::Cow;

mod filter;

pub use filter::{Filter, Pattern};

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    needle: String,
    needle_len: usize,
    case_sensitive: bool,
    filters: Vec<Filter>,
    match_all: bool,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        // An empty query matches everything as is, without case folding or whitespace removal
        if raw.is_empty() {
            return Self {
                needle: String::new(),
                needle_len: 0,
                case_sensitive: false,
                filters: vec![],
                match_all: true,
            };
        }

        let mut needle = String::with_capacity(raw.len());
        let mut filters = vec![];
        for token in raw.split(' ') {
            match Filter::parse(token) {
                Some(filter) => filters.push(filter),
                None => needle.push_str(token),
            }
        }

        let case_sensitive = needle.chars().any(char::is_uppercase);
        if !case_sensitive {
            needle = needle.to_lowercase();
        }

        tracing::trace!(
            needle = %needle,
            case_sensitive,
            filters = filters.len(),
            "parsed query"
        );

        Self {
            needle_len: needle.chars().count(),
            needle,
            case_sensitive,
            filters,
            match_all: false,
        }
    }

    /// The part of the query used for scoring, with filter tokens and spaces removed
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Length of the needle in chars
    pub fn needle_len(&self) -> usize {
        self.needle_len
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Prepares a haystack for scoring. Returns `None` when one of the filters rejects it.
    ///
    /// Otherwise returns the haystack case folded (unless case sensitive), with the text
    /// matched by stripping filters removed and with all whitespace removed. The empty query
    /// returns every haystack unchanged.
    pub fn filter<'a>(&self, haystack: &'a str) -> Option<Cow<'a, str>> {
        if self.match_all {
            return Some(Cow::Borrowed(haystack));
        }

        let mut haystack = if self.case_sensitive {
            haystack.to_string()
        } else {
            haystack.to_lowercase()
        };

        for filter in &self.filters {
            if !filter.apply(&mut haystack) {
                return None;
            }
        }

        haystack.retain(|c| !c.is_whitespace());
        Some(Cow::Owned(haystack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(query: &str, haystack: &str) -> Option<String> {
        Query::parse(query)
            .filter(haystack)
            .map(|haystack| haystack.into_owned())
    }

    #[test]
    fn test_empty_query() {
        let query = Query::parse("");
        assert_eq!(query.needle(), "");
        assert!(query.filters().is_empty());
        assert_eq!(filter("", "Hello World"), Some("Hello World".into()));
    }

    #[test]
    fn test_needle_tokens_are_joined() {
        let query = Query::parse("foo  bar");
        assert_eq!(query.needle(), "foobar");
        assert_eq!(query.needle_len(), 6);
        assert!(query.filters().is_empty());
    }

    #[test]
    fn test_blank_query_strips_whitespace() {
        let query = Query::parse("   ");
        assert_eq!(query.needle(), "");
        assert_eq!(filter("   ", " A b\tc\n"), Some("abc".into()));
    }

    #[test]
    fn test_filters_are_split_from_needle() {
        let query = Query::parse("*filter1 $filter2 query ^filter3");
        assert_eq!(query.needle(), "query");
        assert_eq!(
            query.filters(),
            &[
                Filter::Contains("filter1".into()),
                Filter::EndsWith("filter2".into()),
                Filter::StartsWith("filter3".into()),
            ]
        );
    }

    #[test]
    fn test_smart_case() {
        assert!(!Query::parse("hello").is_case_sensitive());
        assert!(Query::parse("Hello").is_case_sensitive());
        assert!(Query::parse("hEllo").is_case_sensitive());
        assert!(Query::parse("Hello123").is_case_sensitive());
        assert!(!Query::parse("123").is_case_sensitive());
        // Filters don't affect case sensitivity
        assert!(!Query::parse("hello *World").is_case_sensitive());
        assert!(Query::parse("Ölfass").is_case_sensitive());
    }

    #[test]
    fn test_case_insensitive_lowercases_haystack() {
        assert_eq!(filter("hello", "HeLLo"), Some("hello".into()));
        assert_eq!(filter("Hello", "HeLLo"), Some("HeLLo".into()));
    }

    #[test]
    fn test_filter_operands_are_verbatim() {
        // The haystack is lowercased, the operand isn't, so it can never match
        assert_eq!(filter("hello *World", "Hello World"), None);
        assert_eq!(filter("hello *world", "Hello World"), Some("hello".into()));
    }

    #[test]
    fn test_single_filters() {
        assert_eq!(filter("*world", "helloworld test"), Some("hellotest".into()));
        assert_eq!(filter("$test", "hello test"), Some("hello".into()));
        assert_eq!(filter("^hello", "hello world"), Some("world".into()));
        assert_eq!(filter("*xyz", "hello"), None);
    }

    #[test]
    fn test_multiple_filters() {
        assert_eq!(
            filter("^hello *world $test", "hello big world test"),
            Some("big".into())
        );
    }

    #[test]
    fn test_filters_apply_in_order() {
        // "^ab" strips "ab" first, so "$b" sees "cb"
        assert_eq!(filter("^ab $b", "abcb"), Some("c".into()));
        // "$b" strips the trailing "b" first, then "^ab" still matches
        assert_eq!(filter("$b ^ab", "abcb"), Some("c".into()));
        // The first filter fails, the second is never reached
        assert_eq!(filter("^x *a", "abc"), None);
        // The second filter sees the output of the first
        assert_eq!(filter("*a *a", "aab"), Some("b".into()));
        assert_eq!(filter("*a *a", "ab"), None);
    }

    #[test]
    fn test_regex_filters() {
        assert_eq!(
            filter("?\\w+@\\w+\\.\\w+", "contact me at test@example.com please"),
            Some("contactmeattest@example.complease".into())
        );
        assert_eq!(filter("?\\d{3}-\\d{2}-\\d{4}", "no ssn here"), None);
    }

    #[test]
    fn test_negated_filters() {
        assert_eq!(filter("!*xyz", "hello world"), Some("helloworld".into()));
        assert_eq!(filter("!^hello", "world hello"), Some("worldhello".into()));
        assert_eq!(filter("!$test", "test hello"), Some("testhello".into()));
        assert_eq!(filter("!?\\d+", "only text here"), Some("onlytexthere".into()));
        assert_eq!(filter("!*hello", "hello world"), None);
    }

    #[test]
    fn test_complex_query() {
        let query = Query::parse("search !*avoid ?\\w+@\\w+\\.\\w+");
        assert_eq!(query.needle(), "search");
        assert_eq!(query.filters().len(), 2);
        assert_eq!(
            filter("search !*avoid ?\\w+@\\w+\\.\\w+", "search for email@example.com"),
            Some("searchforemail@example.com".into())
        );
        assert_eq!(
            filter("search !*avoid ?\\w+@\\w+\\.\\w+", "avoid email@example.com"),
            None
        );
    }

    #[test]
    fn test_bang_without_sigil_is_needle() {
        let query = Query::parse("hi !");
        assert_eq!(query.needle(), "hi!");
        assert!(query.filters().is_empty());
    }

    #[test]
    fn test_unicode_whitespace_removed() {
        assert_eq!(filter("x", "a\u{00A0}b\u{2003}c"), Some("abc".into()));
    }
}
