use crate::rich_text::{Annotations, RichText};

/// Two trailing spaces force a visual line break in Markdown.
const HARD_BREAK: &str = "  \n";

/// Render an ordered span sequence to Markdown.
///
/// Pure and total: spans concatenate left-to-right, unknown span kinds
/// contribute nothing, and identical input always yields identical output.
pub fn to_markdown(spans: &[RichText]) -> String {
    let mut output = String::new();
    for span in spans {
        match span {
            RichText::Text {
                text, annotations, ..
            } => push_text(&text.content, annotations, &mut output),
            RichText::Equation { equation } => {
                output.push_str(" $ ");
                output.push_str(&equation.expression);
                output.push_str(" $ ");
            }
            RichText::Unsupported => {}
        }
    }
    output
}

/// Concatenate the literal content of text spans, ignoring annotations.
///
/// Equation and unsupported spans contribute nothing. The result is meant
/// for substring matching, never for display.
pub fn to_plain_text(spans: &[RichText]) -> String {
    spans
        .iter()
        .filter_map(|span| match span {
            RichText::Text { text, .. } => Some(text.content.as_str()),
            _ => None,
        })
        .collect()
}

fn push_text(content: &str, annotations: &Annotations, output: &mut String) {
    // A `>` at a line start would otherwise turn into a blockquote.
    let content = content.replace('>', "\\>");

    if annotations.code {
        if content.contains('\n') {
            output.push_str("\n```\n");
            output.push_str(&content);
            output.push_str("\n```\n");
        } else {
            output.push('`');
            output.push_str(&content);
            output.push('`');
        }
        // Code wins over the remaining flags, even when they are also set.
        return;
    }

    let mut content = content.replace('\n', HARD_BREAK);
    let mut prefix = "";
    let mut suffix = "";

    // Emphasis markers must sit directly against non-space characters, so
    // boundary whitespace is peeled off and re-attached outside the markers.
    if annotations.bold || annotations.italic || annotations.strikethrough {
        if content.starts_with(' ') {
            prefix = " ";
            content = content.trim_start().to_string();
        }
        if content.ends_with(' ') {
            suffix = " ";
            content = content.trim_end().to_string();
        }
        if content.ends_with(HARD_BREAK) {
            suffix = HARD_BREAK;
            content.truncate(content.len() - HARD_BREAK.len());
        }
    }

    if annotations.bold {
        content = format!("**{}**", content);
    }
    if annotations.italic {
        content = format!("*{}*", content);
    }
    if annotations.strikethrough {
        content = format!("~~{}~~", content);
    }

    output.push_str(prefix);
    output.push_str(&content);
    output.push_str(suffix);
}
