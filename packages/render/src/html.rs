//! HTML serialization of virtual nodes.

use crate::vdom::VNode;

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "wbr",
];

/// Options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// One element per line with indentation
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "  ".to_string(),
        }
    }
}

impl HtmlOptions {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }
}

struct Context {
    options: HtmlOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn start_line(&mut self) {
        if self.options.pretty {
            for _ in 0..self.depth {
                self.buffer.push_str(&self.options.indent);
            }
        }
    }

    fn end_line(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Serialize compactly
pub fn to_html(node: &VNode) -> String {
    to_html_with(node, HtmlOptions::default())
}

pub fn to_html_with(node: &VNode, options: HtmlOptions) -> String {
    let mut ctx = Context::new(options);
    write_node(node, &mut ctx);
    ctx.get_output()
}

/// Full standalone document around `body`
pub fn to_document(title: &str, body: &[VNode], options: HtmlOptions) -> String {
    let mut ctx = Context::new(options);

    for line in ["<!DOCTYPE html>", "<html lang=\"en\">"] {
        ctx.start_line();
        ctx.add(line);
        ctx.end_line();
    }
    ctx.indent();

    ctx.start_line();
    ctx.add("<head>");
    ctx.end_line();
    ctx.indent();
    ctx.start_line();
    ctx.add("<meta charset=\"UTF-8\">");
    ctx.end_line();
    ctx.start_line();
    ctx.add("<title>");
    ctx.add(&escape_text(title));
    ctx.add("</title>");
    ctx.end_line();
    ctx.dedent();
    ctx.start_line();
    ctx.add("</head>");
    ctx.end_line();

    ctx.start_line();
    ctx.add("<body>");
    ctx.end_line();
    ctx.indent();
    for node in body {
        write_node(node, &mut ctx);
    }
    ctx.dedent();
    ctx.start_line();
    ctx.add("</body>");
    ctx.end_line();

    ctx.dedent();
    ctx.start_line();
    ctx.add("</html>");
    ctx.end_line();

    ctx.get_output()
}

fn write_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Text { content } => {
            ctx.start_line();
            ctx.add(&escape_text(content));
            ctx.end_line();
        }

        VNode::Icon { icon } => {
            ctx.start_line();
            ctx.add(icon.svg());
            ctx.end_line();
        }

        VNode::Element {
            tag,
            attributes,
            children,
        } => {
            ctx.start_line();
            ctx.add("<");
            ctx.add(tag);
            for (key, value) in attributes {
                ctx.add(" ");
                ctx.add(key);
                if !value.is_empty() {
                    ctx.add("=\"");
                    ctx.add(&escape_attr(value));
                    ctx.add("\"");
                }
            }
            ctx.add(">");

            if VOID_ELEMENTS.contains(&tag.as_str()) {
                ctx.end_line();
                return;
            }

            // Keep single text children inline so pretty output stays readable
            if let [VNode::Text { content }] = children.as_slice() {
                ctx.add(&escape_text(content));
            } else if !children.is_empty() {
                ctx.end_line();
                ctx.indent();
                for child in children {
                    write_node(child, ctx);
                }
                ctx.dedent();
                ctx.start_line();
            }

            ctx.add("</");
            ctx.add(tag);
            ctx.add(">");
            ctx.end_line();
        }
    }
}

/// Escape text content
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
