//! Markdown to terminal rendering.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Render `markdown` into any writer.
pub fn render_to<W: Write>(markdown: &str, out: &mut W) -> io::Result<()> {
    out.write_all(render_string(markdown).as_bytes())
}

/// Render `markdown` into a string of styled terminal text.
pub fn render_string(markdown: &str) -> String {
    let body = strip_front_matter(markdown);
    let mut renderer = Renderer::default();
    for event in Parser::new_ext(body, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH) {
        renderer.event(event);
    }
    renderer.finish()
}

/// Drop a leading `---` ... `---` metadata block.
pub fn strip_front_matter(text: &str) -> &str {
    let Some(rest) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return text;
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        offset += line.len();
        if line.trim_end() == "---" {
            return &rest[offset..];
        }
    }
    text
}

#[derive(Default)]
struct Renderer {
    out: String,
    heading: Option<HeadingLevel>,
    strong: usize,
    emphasis: usize,
    strikethrough: usize,
    code_block: bool,
    link: Option<String>,
    // One entry per open list: next number, or None for bullets.
    lists: Vec<Option<u64>>,
}

impl Renderer {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if self.code_block {
                    for line in text.lines() {
                        self.out.push_str("    ");
                        self.out.push_str(&line.yellow().to_string());
                        self.out.push('\n');
                    }
                } else {
                    let styled = self.style(&text).to_string();
                    self.out.push_str(&styled);
                }
            }
            Event::Code(code) => self.out.push_str(&code.yellow().to_string()),
            Event::SoftBreak => self.out.push(' '),
            Event::HardBreak => self.out.push('\n'),
            Event::Rule => {
                self.blank_line();
                self.out.push_str(&"─".repeat(40).dimmed().to_string());
                self.out.push('\n');
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.blank_line();
                self.heading = Some(level);
            }
            Tag::Paragraph => {
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            Tag::CodeBlock(_) => {
                self.blank_line();
                self.code_block = true;
            }
            Tag::List(start) => {
                if self.lists.is_empty() {
                    self.blank_line();
                } else {
                    self.newline();
                }
                self.lists.push(start);
            }
            Tag::Item => {
                self.newline();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{n}.");
                        *n += 1;
                        marker
                    }
                    _ => "•".to_string(),
                };
                self.out.push_str(&"  ".repeat(depth + 1));
                self.out.push_str(&marker);
                self.out.push(' ');
            }
            Tag::Strong => self.strong += 1,
            Tag::Emphasis => self.emphasis += 1,
            Tag::Strikethrough => self.strikethrough += 1,
            Tag::Link { dest_url, .. } => self.link = Some(dest_url.to_string()),
            Tag::Table(_) => self.blank_line(),
            Tag::TableHead | Tag::TableRow => self.newline(),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.heading = None;
                self.out.push('\n');
            }
            TagEnd::Paragraph | TagEnd::Item => self.newline(),
            TagEnd::CodeBlock => self.code_block = false,
            TagEnd::List(_) => {
                self.lists.pop();
                self.newline();
            }
            TagEnd::Strong => self.strong = self.strong.saturating_sub(1),
            TagEnd::Emphasis => self.emphasis = self.emphasis.saturating_sub(1),
            TagEnd::Strikethrough => self.strikethrough = self.strikethrough.saturating_sub(1),
            TagEnd::Link => {
                if let Some(dest) = self.link.take() {
                    if !dest.is_empty() && !dest.starts_with('#') {
                        self.out.push_str(&format!(" ({})", dest.dimmed()));
                    }
                }
            }
            TagEnd::TableCell => self.out.push_str("  "),
            TagEnd::TableHead | TagEnd::TableRow => self.newline(),
            _ => {}
        }
    }

    fn style(&self, text: &str) -> ColoredString {
        let mut s = text.normal();
        if let Some(level) = self.heading {
            s = match level {
                HeadingLevel::H1 => s.bold().cyan().underline(),
                HeadingLevel::H2 => s.bold().cyan(),
                _ => s.bold(),
            };
        }
        if self.strong > 0 {
            s = s.bold();
        }
        if self.emphasis > 0 {
            s = s.italic();
        }
        if self.strikethrough > 0 {
            s = s.strikethrough();
        }
        if self.link.is_some() {
            s = s.blue();
        }
        s
    }

    fn newline(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn blank_line(&mut self) {
        self.newline();
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }

    fn finish(self) -> String {
        let mut out = self.out.trim_end().to_string();
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(markdown: &str) -> String {
        colored::control::set_override(false);
        render_string(markdown)
    }

    #[test]
    fn test_strip_front_matter() {
        let doc = "---\nsubcategory: \"EC2\"\nlayout: \"aws\"\n---\n\n# Resource: aws_instance\n";
        assert_eq!(strip_front_matter(doc), "\n# Resource: aws_instance\n");
    }

    #[test]
    fn test_strip_front_matter_absent_or_unclosed() {
        assert_eq!(strip_front_matter("# Title\n"), "# Title\n");
        assert_eq!(strip_front_matter("---\nno end\n"), "---\nno end\n");
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let out = plain("---\ntitle: x\n---\n# Resource: aws_vpc\n\nProvides a VPC.\n");
        assert_eq!(out, "Resource: aws_vpc\n\nProvides a VPC.\n");
    }

    #[test]
    fn test_lists() {
        let out = plain("* `cidr_block` - (Optional) The CIDR.\n* `tags` - Tags.\n\n1. one\n2. two\n");
        assert!(out.contains("  • cidr_block - (Optional) The CIDR.\n"));
        assert!(out.contains("  • tags - Tags.\n"));
        assert!(out.contains("  1. one\n  2. two\n"));
    }

    #[test]
    fn test_code_block_indented() {
        let out = plain("```terraform\nresource \"aws_vpc\" \"main\" {\n}\n```\n");
        assert_eq!(out, "    resource \"aws_vpc\" \"main\" {\n    }\n");
    }

    #[test]
    fn test_links_show_destination() {
        let out = plain("See [the guide](https://example.com/guide) and [below](#arguments).\n");
        assert_eq!(out, "See the guide (https://example.com/guide) and below.\n");
    }

    #[test]
    fn test_render_to_writer() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        render_to("## Argument Reference\n", &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Argument Reference\n");
    }
}
