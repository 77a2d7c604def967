//! Renders record markdown for the terminal: styled headings, wrapped
//! paragraphs, bullets, and dimmed code blocks.

use colored::Colorize;
use console::Term;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use unicode_width::UnicodeWidthStr;

const MAX_WIDTH: usize = 100;

pub(crate) fn terminal_width() -> usize {
    let (_, cols) = Term::stdout().size();
    (cols as usize).clamp(40, MAX_WIDTH)
}

/// Renders a markdown body to an ANSI-styled string.
pub(crate) fn render_markdown(source: &str) -> String {
    render_to_width(source, terminal_width())
}

fn render_to_width(source: &str, width: usize) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(source, options);

    let mut out = String::new();
    let mut block = String::new();
    let mut heading: Option<HeadingLevel> = None;
    let mut in_code_block = false;
    let mut in_table = false;
    let mut list_index: Option<u64> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some(level);
                block.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                let styled = match heading.take() {
                    Some(HeadingLevel::H1) => block.bold().underline().to_string(),
                    Some(HeadingLevel::H2) => block.bold().to_string(),
                    _ => block.bold().dimmed().to_string(),
                };
                out.push_str(&styled);
                out.push_str("\n\n");
                block.clear();
            }
            Event::Start(Tag::Paragraph) => block.clear(),
            Event::End(TagEnd::Paragraph) => {
                if in_table {
                    continue;
                }
                out.push_str(&wrap(&block, width, ""));
                out.push_str("\n\n");
                block.clear();
            }
            Event::Start(Tag::List(start)) => list_index = start,
            Event::End(TagEnd::List(_)) => {
                list_index = None;
                out.push('\n');
            }
            Event::Start(Tag::Item) => block.clear(),
            Event::End(TagEnd::Item) => {
                let marker = match list_index {
                    Some(ref mut n) => {
                        let m = format!("{}. ", n);
                        *n += 1;
                        m
                    }
                    None => "• ".to_string(),
                };
                // Continuations line up under the item text, so the
                // indent follows the marker's display width ("10. " is
                // wider than "• ").
                let indent = " ".repeat(marker.width());
                out.push_str(&marker);
                out.push_str(&wrap(&block, width.saturating_sub(marker.width()), &indent));
                out.push('\n');
                block.clear();
            }
            Event::Start(Tag::CodeBlock(_)) => {
                in_code_block = true;
                block.clear();
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                for line in block.lines() {
                    out.push_str(&format!("    {}\n", line.dimmed()));
                }
                out.push('\n');
                block.clear();
            }
            Event::Start(Tag::Table(_)) => {
                in_table = true;
                block.clear();
            }
            Event::End(TagEnd::Table) => {
                in_table = false;
                out.push('\n');
            }
            Event::End(TagEnd::TableHead) | Event::End(TagEnd::TableRow) => {
                out.push_str(&block.trim_end_matches(" | ").to_string());
                out.push('\n');
                block.clear();
            }
            Event::End(TagEnd::TableCell) => block.push_str(" | "),
            Event::Text(text) => block.push_str(&text),
            Event::Code(code) => {
                block.push('`');
                block.push_str(&code);
                block.push('`');
            }
            Event::SoftBreak => block.push(if in_code_block { '\n' } else { ' ' }),
            Event::HardBreak => block.push('\n'),
            Event::Rule => {
                out.push_str(&"─".repeat(width.min(40)).dimmed().to_string());
                out.push_str("\n\n");
            }
            _ => {}
        }
    }

    while out.ends_with('\n') {
        out.pop();
    }
    out.push('\n');
    out
}

/// Greedy word wrap using display widths; continuation lines get the
/// given indent.
fn wrap(text: &str, width: usize, indent: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate_width = line.width() + 1 + word.width();
        if !line.is_empty() && candidate_width > width {
            lines.push(line);
            line = String::new();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join(&format!("\n{}", indent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let wrapped = wrap("one two three four five six", 10, "");
        for line in wrapped.lines() {
            assert!(line.width() <= 10, "line too wide: {:?}", line);
        }
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("short text", 80, ""), "short text");
    }

    #[test]
    fn wrapped_ordered_items_align_under_their_marker() {
        let source = "10. alpha beta gamma delta epsilon zeta eta theta iota kappa";
        let rendered = render_to_width(source, 40);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("10. alpha"));
        assert!(lines.len() > 1, "item did not wrap: {:?}", rendered);
        assert!(lines[1].starts_with("    "));
        assert!(!lines[1].starts_with("     "));
    }

    #[test]
    fn render_keeps_all_body_text() {
        let rendered = render_markdown("# Title\n\nBody text.\n\n- item one\n- item two");
        assert!(rendered.contains("Title"));
        assert!(rendered.contains("Body text."));
        assert!(rendered.contains("item one"));
        assert!(rendered.contains("• item two") || rendered.contains("item two"));
    }
}
