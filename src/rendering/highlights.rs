//! Showing highlight spans over the text they were computed from

use owo_colors::OwoColorize;

use crate::analysis::Source;
use crate::language::{Class, Highlight};

fn class_at(highlights: &[Highlight], offset: usize) -> Option<Class> {
    highlights
        .iter()
        .find(|h| h.start <= offset && offset < h.end)
        .map(|h| h.class)
}

fn paint_run(class: Option<Class>, content: &str) -> String {
    match class {
        None => content.to_string(),
        Some(Class::Matched) => content // orange background
            .black()
            .on_truecolor(0xff, 0xa5, 0x00)
            .to_string(),
        Some(Class::Unmatched) => content
            .white()
            .on_red()
            .to_string(),
    }
}

/// Render the text with each highlight span painted in its class colour.
pub fn paint(text: &str, highlights: &[Highlight]) -> String {
    let mut output = String::new();
    let mut run = String::new();
    let mut current = None;

    for (i, c) in text
        .chars()
        .enumerate()
    {
        let class = class_at(highlights, i);
        if class != current && !run.is_empty() {
            output.push_str(&paint_run(current, &run));
            run.clear();
        }
        current = class;
        run.push(c);
    }
    output.push_str(&paint_run(current, &run));

    output
}

/// One line per span: its class, its range, and the text it covers.
pub fn describe(text: &str, highlights: &[Highlight]) -> String {
    let source = Source::new(text);
    let mut output = String::new();

    for highlight in highlights {
        let class = match highlight.class {
            Class::Matched => "matched",
            Class::Unmatched => "unmatched",
        };
        output.push_str(&format!(
            "{:<9} {}..{} {:?}\n",
            class,
            highlight.start,
            highlight.end,
            source.slice(highlight.span())
        ));
    }

    output
}
