use regex::Regex;

/// A constraint parsed from a query token, checked against each haystack before scoring.
///
/// The sigil at the start of the token picks the kind:
/// - `*foo`: haystack must contain `foo`, the first occurrence is removed
/// - `$foo`: haystack must end with `foo`, which is stripped
/// - `^foo`: haystack must start with `foo`, which is stripped
/// - `?re`: haystack must match the regex `re`, nothing is removed
/// - `!*foo`, `!$foo`, `!^foo`, `!?re`: the inner filter must fail, nothing is removed
///
/// Operands are used verbatim, they are never case folded.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Contains(String),
    EndsWith(String),
    StartsWith(String),
    Matches(Pattern),
    Not(Box<Filter>),
}

/// Operand of a `?` filter. Operands that fail to compile as a regex are matched as plain
/// substrings instead, so that every query remains valid.
#[derive(Debug, Clone)]
pub enum Pattern {
    Regex(Regex),
    Literal(String),
}

impl Pattern {
    pub fn new(pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(regex) => Pattern::Regex(regex),
            Err(err) => {
                tracing::debug!(pattern, %err, "invalid regex filter, matching literally");
                Pattern::Literal(pattern.to_string())
            }
        }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            Pattern::Regex(regex) => regex.is_match(haystack),
            Pattern::Literal(literal) => haystack.contains(literal.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Regex(regex) => regex.as_str(),
            Pattern::Literal(literal) => literal,
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Pattern::Regex(_), Pattern::Regex(_)) | (Pattern::Literal(_), Pattern::Literal(_))
        ) && self.as_str() == other.as_str()
    }
}

impl Filter {
    /// Parses a single space-free token. Returns `None` when the token is part of the needle
    /// rather than a filter.
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(inner) = token.strip_prefix('!') {
            return Self::parse_positive(inner).map(|filter| Filter::Not(Box::new(filter)));
        }
        Self::parse_positive(token)
    }

    fn parse_positive(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let sigil = chars.next()?;
        let operand = chars.as_str();
        match sigil {
            '*' => Some(Filter::Contains(operand.to_string())),
            '$' => Some(Filter::EndsWith(operand.to_string())),
            '^' => Some(Filter::StartsWith(operand.to_string())),
            '?' => Some(Filter::Matches(Pattern::new(operand))),
            _ => None,
        }
    }

    /// Whether the haystack passes this filter, without modifying it
    pub fn accepts(&self, haystack: &str) -> bool {
        match self {
            Filter::Contains(needle) => haystack.contains(needle.as_str()),
            Filter::EndsWith(suffix) => haystack.ends_with(suffix.as_str()),
            Filter::StartsWith(prefix) => haystack.starts_with(prefix.as_str()),
            Filter::Matches(pattern) => pattern.is_match(haystack),
            Filter::Not(inner) => !inner.accepts(haystack),
        }
    }

    /// Checks the haystack against the filter, removing the matched text in place when the
    /// filter strips. The haystack is left untouched when the filter fails.
    pub fn apply(&self, haystack: &mut String) -> bool {
        match self {
            Filter::Contains(needle) => match haystack.find(needle.as_str()) {
                Some(start) => {
                    haystack.replace_range(start..start + needle.len(), "");
                    true
                }
                None => false,
            },
            Filter::EndsWith(suffix) => {
                let accepted = haystack.ends_with(suffix.as_str());
                if accepted {
                    haystack.truncate(haystack.len() - suffix.len());
                }
                accepted
            }
            Filter::StartsWith(prefix) => {
                let accepted = haystack.starts_with(prefix.as_str());
                if accepted {
                    haystack.replace_range(..prefix.len(), "");
                }
                accepted
            }
            Filter::Matches(_) | Filter::Not(_) => self.accepts(haystack),
        }
    }
}
