// Drive search query detection
use once_cell::sync::Lazy;
use regex::Regex;

// Any match means the caller already wrote a Drive query expression.
static STRUCTURED_QUERY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r#"(?i)\b\w+\s*(=|!=|>|<)\s*['"].*?['"]"#,
        r"(?i)\b\w+\s*(=|!=|>|<)\s*\d+",
        r"(?i)\bcontains\b",
        r"(?i)\bin\s+parents\b",
        r"(?i)\bhas\s*\{",
        r"(?i)\btrashed\s*=\s*(true|false)\b",
        r"(?i)\bstarred\s*=\s*(true|false)\b",
        r#"(?i)['"][^'"]+['"]\s+in\s+parents"#,
        r"(?i)\bfullText\s+contains\b",
        r"(?i)\bname\s*(=|contains)\b",
        r"(?i)\bmimeType\s*(=|!=)\b",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("static Drive query pattern"))
    .collect()
});

/// True when `query` looks like a Drive query expression.
///
/// Detection is heuristic: plain prose that happens to use a keyword such as
/// "contains" is treated as structured and sent to Drive as-is.
pub fn is_structured_query(query: &str) -> bool {
    STRUCTURED_QUERY_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(query))
}

/// Escapes a value for use inside a single-quoted Drive query literal.
pub fn escape_query_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Children of `folder_id` that are not in the trash.
pub fn folder_children_query(folder_id: &str) -> String {
    format!("'{}' in parents and trashed=false", escape_query_literal(folder_id))
}

/// Turns caller input into a Drive `q` expression.
///
/// Structured expressions pass through untouched; free text becomes a
/// `fullText contains` clause with backslashes and single quotes escaped.
pub fn build_drive_query(query: &str) -> String {
    if is_structured_query(query) {
        query.to_string()
    } else {
        format!("fullText contains '{}'", escape_query_literal(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_structured_expressions() {
        for query in [
            "name = 'Budget'",
            "name contains 'plan'",
            "mimeType != 'application/vnd.google-apps.folder'",
            "'1AbC' in parents",
            "trashed = false",
            "starred=true",
            "fullText contains 'roadmap'",
            "properties has { key='x' and value='y' }",
            "quotaBytesUsed > 1000",
        ] {
            assert!(is_structured_query(query), "{query}");
        }
    }

    #[test]
    fn plain_text_is_not_structured() {
        for query in ["quarterly report", "meeting notes 2024", "O'Brien invoices"] {
            assert!(!is_structured_query(query), "{query}");
        }
    }

    #[test]
    fn keyword_in_prose_counts_as_structured() {
        assert!(is_structured_query("what the report contains"));
        assert_eq!(
            build_drive_query("what the report contains"),
            "what the report contains"
        );
    }

    #[test]
    fn structured_queries_pass_through() {
        assert_eq!(build_drive_query("name = 'Budget'"), "name = 'Budget'");
    }

    #[test]
    fn free_text_is_wrapped_and_escaped() {
        assert_eq!(
            build_drive_query("quarterly report"),
            "fullText contains 'quarterly report'"
        );
        assert_eq!(
            build_drive_query("O'Brien invoices"),
            r"fullText contains 'O\'Brien invoices'"
        );
    }

    #[test]
    fn backslashes_are_escaped_before_quotes() {
        assert_eq!(
            build_drive_query(r"C:\temp\"),
            r"fullText contains 'C:\\temp\\'"
        );
        assert_eq!(escape_query_literal(r"a\'b"), r"a\\\'b");
    }

    #[test]
    fn folder_query_excludes_trash_and_escapes_id() {
        assert_eq!(folder_children_query("root"), "'root' in parents and trashed=false");
        assert_eq!(
            folder_children_query("it's"),
            r"'it\'s' in parents and trashed=false"
        );
    }
}
