//! Markdown + TeX rendering for question content.
//!
//! Question text, options, and explanations are markdown with embedded TeX
//! segments: `$...$` inline, `$$...$$` display. TeX is split out before the
//! markdown pass and emitted as escaped `<span>`/`<div>` math nodes for the
//! client-side typesetter — the server never interprets TeX itself.
//!
//! Unterminated delimiters degrade to literal text. Nothing here errors.

use pulldown_cmark::{html, Options, Parser};

#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Text(&'a str),
    InlineMath(&'a str),
    DisplayMath(&'a str),
}

/// Splits text into markdown and TeX segments. `$$` is matched before `$` so
/// display blocks are not consumed as a pair of empty inline segments.
fn split_math(mut rest: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    loop {
        let Some(dollar) = rest.find('$') else {
            if !rest.is_empty() {
                segments.push(Segment::Text(rest));
            }
            break;
        };
        if dollar > 0 {
            segments.push(Segment::Text(&rest[..dollar]));
        }
        let after = &rest[dollar..];
        if let Some(body) = after.strip_prefix("$$") {
            match body.find("$$") {
                Some(end) => {
                    segments.push(Segment::DisplayMath(&body[..end]));
                    rest = &body[end + 2..];
                }
                None => {
                    // Unterminated display block: keep the dollars as text.
                    segments.push(Segment::Text(after));
                    break;
                }
            }
        } else {
            let body = &after[1..];
            match body.find('$') {
                Some(end) => {
                    segments.push(Segment::InlineMath(&body[..end]));
                    rest = &body[end + 1..];
                }
                None => {
                    segments.push(Segment::Text(after));
                    break;
                }
            }
        }
    }
    segments
}

/// Renders markdown+TeX content to an HTML fragment.
///
/// TeX segments are replaced with private-use placeholders so the markdown
/// parser sees one continuous text, then substituted back into the HTML —
/// this keeps inline math inside its surrounding sentence/paragraph flow.
pub fn render_rich(text: &str) -> String {
    let segments = split_math(text);

    let mut plain = String::with_capacity(text.len());
    let mut math_nodes: Vec<String> = Vec::new();
    for segment in segments {
        match segment {
            Segment::Text(t) => plain.push_str(t),
            Segment::InlineMath(tex) => {
                plain.push_str(&placeholder(math_nodes.len()));
                math_nodes.push(format!(
                    "<span class=\"math math-inline\">{}</span>",
                    escape_html(tex)
                ));
            }
            Segment::DisplayMath(tex) => {
                plain.push_str(&placeholder(math_nodes.len()));
                math_nodes.push(format!(
                    "<div class=\"math math-display\">{}</div>",
                    escape_html(tex)
                ));
            }
        }
    }

    let mut rendered = markdown_to_html(&plain);
    for (i, node) in math_nodes.iter().enumerate() {
        rendered = rendered.replace(&placeholder(i), node);
    }
    unwrap_single_paragraph(rendered)
}

/// HTML-escapes plain text (titles, TeX bodies, option letters from the DB).
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn markdown_to_html(text: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let parser = Parser::new_ext(text, options);
    let mut out = String::with_capacity(text.len() + 32);
    html::push_html(&mut out, parser);
    out
}

/// Placeholder for a TeX segment. U+E000 is private-use: the markdown parser
/// passes it through untouched and it cannot occur in real question text.
fn placeholder(index: usize) -> String {
    format!("\u{e000}math{index}\u{e000}")
}

/// Single short fragments ("Paris", "$x^2$") come back from the markdown pass
/// wrapped in one `<p>`; strip it so options and key entries stay inline.
fn unwrap_single_paragraph(rendered: String) -> String {
    let trimmed = rendered.trim_end();
    if let Some(inner) = trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
    {
        if !inner.contains("<p>") {
            return inner.to_string();
        }
    }
    rendered
}
