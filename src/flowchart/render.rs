//! Mermaid source emission.

use super::ast::{Edge, EdgeStyle, Flowchart, Node, Shape, Statement};

/// Graph declaration every diagram starts with.
pub const HEADER: &str = "graph TD";

const INDENT: &str = "    ";

/// Knobs for [`render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Replace `"` in labels with the Mermaid entity `#quot;`. Off by default:
    /// labels are embedded verbatim.
    pub escape_quotes: bool,
}

/// Render a flowchart as Mermaid source, one newline-terminated statement per
/// line. Statements inside groups are indented by depth.
#[must_use]
pub fn render(chart: &Flowchart, options: &RenderOptions) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    let mut depth = 0usize;
    for statement in &chart.statements {
        if matches!(statement, Statement::GroupEnd) {
            depth = depth.saturating_sub(1);
        }
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push_str(&render_statement(statement, options));
        out.push('\n');
        if matches!(statement, Statement::GroupStart { .. }) {
            depth += 1;
        }
    }

    out
}

fn render_statement(statement: &Statement, options: &RenderOptions) -> String {
    match statement {
        Statement::Node(node) => render_node(node, options),
        Statement::Edge(edge) => render_edge(edge, options),
        Statement::GroupStart { id, title } if title.is_empty() => format!("subgraph {id}"),
        Statement::GroupStart { id, title } => format!("subgraph {id}[\"{}\"]", text(title, options)),
        Statement::GroupEnd => "end".to_owned(),
    }
}

fn render_node(node: &Node, options: &RenderOptions) -> String {
    let id = node.id;
    let t = text(&node.label, options);
    match node.shape {
        Shape::Terminal => format!("{id}((\"{t}\"))"),
        Shape::Process => format!("{id}[\"{t}\"]"),
        Shape::Rounded => format!("{id}(\"{t}\")"),
        Shape::Subroutine => format!("{id}[[\"{t}\"]]"),
        Shape::InputOutput => format!("{id}[/\"{t}\"/]"),
        Shape::Cylinder => format!("{id}[(\"{t}\")]"),
        Shape::Display => format!("{id}>\"{t}\"]"),
        Shape::Decision => format!("{id}{{\"{t}\"}}"),
        Shape::Note => format!("{id}([\"{t}\"])"),
    }
}

fn render_edge(edge: &Edge, options: &RenderOptions) -> String {
    let (from, to) = (edge.from, edge.to);
    match (edge.style, edge.label.as_deref()) {
        (EdgeStyle::Solid, None) => format!("{from} --> {to}"),
        (EdgeStyle::Solid, Some(label)) => format!("{from} -- {} --> {to}", text(label, options)),
        (EdgeStyle::Dotted, None) => format!("{from} -.-> {to}"),
        (EdgeStyle::Dotted, Some(label)) => format!("{from} -. {} .-> {to}", text(label, options)),
    }
}

fn text(raw: &str, options: &RenderOptions) -> String {
    if options.escape_quotes {
        raw.replace('"', "#quot;")
    } else {
        raw.to_owned()
    }
}
