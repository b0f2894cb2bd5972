//! Content blob rules
//!
//! The store is line oriented on disk but handled as one string in memory.
//! Reading joins every line with a trailing `\n`; appending strips exactly one
//! of those back off and concatenates the new text with no separator.

/// Join stored lines, terminating each with a single newline.
pub fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    content
}

/// Remove one trailing newline, if there is one.
pub fn strip_trailing_separator(content: &str) -> &str {
    content.strip_suffix('\n').unwrap_or(content)
}

/// Compose the content written by an append.
///
/// Embedded newlines in `text` are kept as given. An empty line at the end of
/// `text` is lost on the next read, because the store cannot tell it apart
/// from the line terminator.
pub fn compose_append(previous: &str, text: &str) -> String {
    let mut content = strip_trailing_separator(previous).to_string();
    content.push_str(text);
    content
}
