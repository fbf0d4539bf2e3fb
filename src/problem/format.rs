use owo_colors::OwoColorize;
use relevance::language::LoadingError;

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    let mut result = format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    );
    if !error
        .details
        .is_empty()
    {
        result.push_str(&format!(" ({})", error.details));
    }
    result
}

// Helper functions for line/column calculation. Offsets are in characters.
pub fn calculate_line_number(content: &str, offset: usize) -> usize {
    content
        .chars()
        .take(offset)
        .filter(|&c| c == '\n')
        .count()
}

/// Column of a character offset, counted in whatever units `width` gives
/// each character (one per character, or UTF-16 code units for editors).
pub fn calculate_column_number(
    content: &str,
    offset: usize,
    width: impl Fn(char) -> usize,
) -> usize {
    let mut column = 0;
    for c in content
        .chars()
        .take(offset)
    {
        if c == '\n' {
            column = 0;
        } else {
            column += width(c);
        }
    }
    column
}

/// The character offset of a given line and column, clamped to the end of
/// that line (or of the text, if there are not that many lines). A column
/// falling inside a wide character lands after it.
pub fn calculate_offset(
    content: &str,
    line: usize,
    column: usize,
    width: impl Fn(char) -> usize,
) -> usize {
    let mut offset = 0;
    let mut current = 0;
    let mut chars = content.chars();

    while current < line {
        match chars.next() {
            Some('\n') => {
                current += 1;
                offset += 1;
            }
            Some(_) => offset += 1,
            None => return offset,
        }
    }

    let mut units = 0;
    while units < column {
        match chars.next() {
            Some('\n') | None => break,
            Some(c) => {
                units += width(c);
                offset += 1;
            }
        }
    }

    offset
}
