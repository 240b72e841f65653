// src/shared/content_store/portable_text.rs
//
// Rich-text bodies arrive as an ordered array of typed blocks. Only the
// shapes the studio can produce are interpreted; unknown block types and
// marks pass through as plain content rather than failing the render.

use serde_json::Value;

use crate::shared::content_store::image::{Fit, ImageUrlBuilder};

const BODY_IMAGE_WIDTH: u32 = 1200;
const BODY_IMAGE_HEIGHT: u32 = 700;

pub fn to_html(blocks: &[Value], images: &ImageUrlBuilder) -> String {
    let mut out = String::new();
    // Consecutive list items are grouped under one list element.
    let mut open_list: Option<(&'static str, String)> = None;

    for block in blocks {
        let block_type = block.get("_type").and_then(Value::as_str).unwrap_or("");
        match block_type {
            "block" => {
                let inner = render_children(block);
                if let Some(kind) = block.get("listItem").and_then(Value::as_str) {
                    let tag = if kind == "number" { "ol" } else { "ul" };
                    let item = format!("<li>{inner}</li>");
                    match open_list.as_mut() {
                        Some((open_tag, items)) if *open_tag == tag => items.push_str(&item),
                        _ => {
                            flush_list(&mut out, &mut open_list);
                            open_list = Some((tag, item));
                        }
                    }
                } else {
                    flush_list(&mut out, &mut open_list);
                    let style = block.get("style").and_then(Value::as_str).unwrap_or("normal");
                    let tag = tag_for_style(style);
                    out.push_str(&format!("<{tag}>{inner}</{tag}>"));
                }
            }
            "image" => {
                flush_list(&mut out, &mut open_list);
                let asset_ref = block
                    .get("asset")
                    .and_then(|asset| asset.get("_ref"))
                    .and_then(Value::as_str);
                if let Some(src) = asset_ref
                    .and_then(|r| images.url(r, BODY_IMAGE_WIDTH, BODY_IMAGE_HEIGHT, Fit::Max))
                {
                    let alt = block.get("alt").and_then(Value::as_str).unwrap_or("");
                    out.push_str(&format!(
                        "<img src=\"{}\" alt=\"{}\">",
                        escape(&src),
                        escape(alt)
                    ));
                }
            }
            _ => {}
        }
    }

    flush_list(&mut out, &mut open_list);
    out
}

fn flush_list(out: &mut String, open_list: &mut Option<(&'static str, String)>) {
    if let Some((tag, items)) = open_list.take() {
        out.push_str(&format!("<{tag}>{items}</{tag}>"));
    }
}

fn tag_for_style(style: &str) -> &'static str {
    match style {
        "h1" => "h1",
        "h2" => "h2",
        "h3" => "h3",
        "h4" => "h4",
        "blockquote" => "blockquote",
        _ => "p",
    }
}

fn render_children(block: &Value) -> String {
    let mark_defs = block
        .get("markDefs")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let mut out = String::new();
    let Some(children) = block.get("children").and_then(Value::as_array) else {
        return out;
    };

    for span in children {
        let text = span.get("text").and_then(Value::as_str).unwrap_or("");
        let mut rendered = escape(text);

        if let Some(marks) = span.get("marks").and_then(Value::as_array) {
            // Later marks wrap innermost.
            for mark in marks.iter().rev() {
                let Some(mark) = mark.as_str() else { continue };
                rendered = apply_mark(mark, rendered, mark_defs);
            }
        }

        out.push_str(&rendered);
    }

    out
}

fn apply_mark(mark: &str, inner: String, mark_defs: &[Value]) -> String {
    match mark {
        "strong" => format!("<strong>{inner}</strong>"),
        "em" => format!("<em>{inner}</em>"),
        "code" => format!("<code>{inner}</code>"),
        "underline" => format!("<u>{inner}</u>"),
        "strike-through" => format!("<s>{inner}</s>"),
        key => match link_href(key, mark_defs) {
            Some(href) => format!("<a href=\"{}\" rel=\"noreferrer\">{inner}</a>", escape(href)),
            None => inner,
        },
    }
}

fn link_href<'a>(key: &str, mark_defs: &'a [Value]) -> Option<&'a str> {
    mark_defs.iter().find_map(|def| {
        let matches_key = def.get("_key").and_then(Value::as_str) == Some(key);
        let is_link = def.get("_type").and_then(Value::as_str) == Some("link");
        if matches_key && is_link {
            def.get("href").and_then(Value::as_str)
        } else {
            None
        }
    })
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
