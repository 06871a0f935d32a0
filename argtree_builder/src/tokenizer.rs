#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Split a raw command line into tokens.
///
/// * Unquoted spaces separate tokens; runs of spaces never produce empty tokens.
/// * A double quote starts or ends a quoted section, inside which spaces are literal.
/// The opening quote ends any token accumulated before it; the closing quote always ends a token, so `""` produces an empty token.
/// * A backslash escapes the next character: `\a \b \f \n \r \t \v` map to their control characters, anything else is taken literally.
///
/// Unterminated quotes (and a trailing lone backslash) are not errors; whatever was accumulated becomes the final token.
///
/// ### Example
/// ```
/// # use argtree_builder as argtree;
/// use argtree::tokenize;
///
/// assert_eq!(
///     tokenize(r#"List "my dir" -n"#),
///     vec!["List".to_string(), "my dir".to_string(), "-n".to_string()]
/// );
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::default();
    let mut current = String::default();
    let mut escape = false;
    let mut quote = false;

    for c in line.chars() {
        if escape {
            escape = false;
            current.push(unescape(c));
        } else if c == '\\' {
            escape = true;
        } else if c == '"' {
            // A closing quote delimits even when nothing was accumulated.
            if quote || !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }

            quote = !quote;
        } else if c == ' ' && !quote {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Tokenized {line:?} into {tokens:?} (unterminated quote: {quote}).");
    }

    tokens
}

fn unescape(c: char) -> char {
    match c {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0c',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0b',
        other => other,
    }
}
