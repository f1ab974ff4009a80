// file: src/query/pattern.rs
// description: turns loosely formatted user input into a corpus query pattern
// reference: https://inl.github.io/BlackLab/guide/corpus-query-language.html

const QUOTE_CHARS: [char; 4] = ['“', '”', '"', '\''];
const DELIMITERS: [char; 4] = ['[', ']', '(', ')'];

/// Compile a raw user query.
///
/// Input that starts and ends with a bracket or parenthesis is taken to be a
/// query expression already and is returned as is. Several words become a
/// sequence of exact word matches, a single word becomes a quoted literal.
/// Brackets are not checked for balance.
pub fn compile(raw: &str) -> String {
    let mut query = raw.trim();
    for quote in QUOTE_CHARS {
        query = query.trim_matches(quote);
    }

    let first = query.chars().next();
    let last = query.chars().next_back();
    if let (Some(first), Some(last)) = (first, last)
        && DELIMITERS.contains(&first)
        && DELIMITERS.contains(&last)
    {
        return query.to_string();
    }

    if query.contains(' ') {
        return query
            .split_whitespace()
            .map(|word| format!("[word=\"{}\"]", word))
            .collect();
    }

    format!("\"{}\"", query)
}
