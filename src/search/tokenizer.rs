//! Query tokenization.
//!
//! A query is split on whitespace into tokens. Each token keeps its literal
//! text and a regex-escaped form, so characters like `.` or `*` in user input
//! are always matched literally.

/// A single search token taken from a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    literal: String,
    escaped: String,
}

impl Token {
    fn new(literal: &str) -> Self {
        Self {
            literal: literal.to_string(),
            escaped: regex::escape(literal),
        }
    }

    /// The token exactly as it appeared in the query.
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// The token escaped for literal use inside a regular expression.
    pub fn escaped(&self) -> &str {
        &self.escaped
    }

    /// Length in characters; used to order alternatives longest-first.
    pub fn char_len(&self) -> usize {
        self.literal.chars().count()
    }
}

/// The ordered tokens of a query. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: Vec<Token>,
}

impl TokenSet {
    /// An empty token set (no filter, no highlighting).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Tokens ordered longest-first; equal lengths keep query order.
    pub fn longest_first(&self) -> Vec<&Token> {
        let mut ordered: Vec<&Token> = self.tokens.iter().collect();
        ordered.sort_by(|a, b| b.char_len().cmp(&a.char_len()));
        ordered
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Split a raw query into search tokens.
///
/// Leading and trailing whitespace is ignored and runs of whitespace act as a
/// single separator. No case folding happens here; matching is
/// case-insensitive instead. Total over all inputs.
///
/// # Example
///
/// ```
/// use article_search_mcp::search::tokenize;
///
/// let tokens = tokenize("  event   loop.* ");
/// let literals: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(literals, vec!["event", "loop.*"]);
/// assert_eq!(tokens.iter().nth(1).unwrap().escaped(), r"loop\.\*");
/// ```
pub fn tokenize(query: &str) -> TokenSet {
    TokenSet {
        tokens: query.split_whitespace().map(Token::new).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literals(tokens: &TokenSet) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_tokenize_splits_on_whitespace_runs() {
        let tokens = tokenize("async \t await\n promises");
        assert_eq!(literals(&tokens), vec!["async", "await", "promises"]);
    }

    #[test]
    fn test_tokenize_empty_and_whitespace_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n ").is_empty());
    }

    #[test]
    fn test_tokenize_preserves_case() {
        let tokens = tokenize("JavaScript");
        assert_eq!(literals(&tokens), vec!["JavaScript"]);
    }

    #[test]
    fn test_tokenize_escapes_metacharacters() {
        let tokens = tokenize(".* (a|b) [x] $^ \\");
        let escaped: Vec<&str> = tokens.iter().map(Token::escaped).collect();
        assert_eq!(
            escaped,
            vec![r"\.\*", r"\(a\|b\)", r"\[x\]", r"\$\^", r"\\"]
        );
    }

    #[test]
    fn test_tokenize_keeps_duplicates() {
        let tokens = tokenize("foo foo");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_longest_first_is_stable() {
        let tokens = tokenize("ab java cd javascript");
        let ordered: Vec<&str> = tokens.longest_first().into_iter().map(Token::as_str).collect();
        assert_eq!(ordered, vec!["javascript", "java", "ab", "cd"]);
    }

    #[test]
    fn test_char_len_counts_characters_not_bytes() {
        let tokens = tokenize("café");
        assert_eq!(tokens.iter().next().unwrap().char_len(), 4);
    }
}
