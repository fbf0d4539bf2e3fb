//! Renderers for colourizing relevance expressions

use owo_colors::OwoColorize;

use crate::formatting::*;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Indent => content.to_string(),
            Syntax::Newline => "\n".to_string(),
            Syntax::Keyword => content // keyword - #0000ff (blue)
                .color(owo_colors::Rgb(0x00, 0x00, 0xff))
                .bold()
                .to_string(),
            Syntax::Structure => content
                .color(owo_colors::Rgb(153, 153, 153))
                .bold()
                .to_string(),
            Syntax::Operator => content // keyword.operator - #0000ff (blue)
                .color(owo_colors::Rgb(0x00, 0x00, 0xff))
                .to_string(),
            Syntax::String => content // string - #008080 (teal)
                .color(owo_colors::Rgb(0x00, 0x80, 0x80))
                .to_string(),
            Syntax::Numeric => content // constant.numeric - #800080 (purple)
                .color(owo_colors::Rgb(0x80, 0x00, 0x80))
                .to_string(),
            Syntax::Comment => content // comment - #008000 (green)
                .color(owo_colors::Rgb(0x00, 0x80, 0x00))
                .to_string(),
            Syntax::Marker => content // Q: A: T: I: - #ff0000 (red)
                .color(owo_colors::Rgb(0xff, 0x00, 0x00))
                .bold()
                .to_string(),
            Syntax::Error => content // E: lines, white on red
                .white()
                .on_red()
                .to_string(),
        }
    }
}
