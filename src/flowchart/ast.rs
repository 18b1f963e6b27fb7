//! Statement types for generated flowcharts.

use std::fmt;

/// A generated flowchart: the ordered statements produced from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flowchart {
    pub statements: Vec<Statement>,
}

impl Flowchart {
    /// Iterate over node declarations in emission order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Node(node) => Some(node),
            _ => None,
        })
    }

    /// Iterate over edges in emission order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Edge(edge) => Some(edge),
            _ => None,
        })
    }

    /// Find the first node declared with exactly this label.
    #[must_use]
    pub fn node_by_label(&self, label: &str) -> Option<&Node> {
        self.nodes().find(|n| n.label == label)
    }
}

/// One line of diagram source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Node(Node),
    Edge(Edge),
    GroupStart { id: GroupId, title: String },
    GroupEnd,
}

/// Node identifier, rendered as `N<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// Subgraph identifier, rendered as `G<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}

/// A flowchart vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub shape: Shape,
}

/// Node shape kinds, one per family of flowchart symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `((text))` start, end and connectors
    Terminal,
    /// `[text]` plain process step
    Process,
    /// `(text)` subprocess
    Rounded,
    /// `[[text]]` subroutine and multi-document
    Subroutine,
    /// `[/text/]` input and output
    InputOutput,
    /// `[(text)]` databases and stored data
    Cylinder,
    /// `>text]` display
    Display,
    /// `{text}` decisions and merges
    Decision,
    /// `([text])` comments and notes
    Note,
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub label: Option<String>,
    pub style: EdgeStyle,
}

/// Line style for edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    /// `-->`
    Solid,
    /// `-.->` used for annotation links
    Dotted,
}
