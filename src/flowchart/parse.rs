//! Line-oriented graph builder.
//!
//! Walks the document once, resolving each line against the directive
//! vocabulary and threading parse state (previous node, decision node,
//! parallel anchors, open groups, label index) through a [`Builder`] that
//! lives only for the duration of one call.

use std::collections::HashMap;

use super::ast::{Edge, EdgeStyle, Flowchart, GroupId, Node, NodeId, Shape, Statement};
use super::directive::{Branch, Directive, Matched, clean_label, match_directive, normalize_label};

/// Build a flowchart from directive text.
///
/// Never fails: unrecognized lines are skipped, unresolved `GO TO` targets
/// are dropped, and groups left open at the end of input are closed.
#[must_use]
pub fn parse(input: &str) -> Flowchart {
    let mut builder = Builder::default();
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        builder.line(line);
    }
    builder.finish()
}

/// Where the incoming edge of a freshly minted node comes from.
#[derive(Debug, Clone, Copy)]
enum Link {
    /// Solid edge from the previous node, if there is one.
    Previous,
    /// Labelled edge from the current decision node.
    Branch(Branch),
}

#[derive(Debug, Default)]
struct Builder {
    statements: Vec<Statement>,
    node_count: u32,
    group_count: u32,
    previous: Option<NodeId>,
    decision: Option<NodeId>,
    /// Innermost anchor last.
    parallel_anchors: Vec<NodeId>,
    open_groups: usize,
    labels: HashMap<String, NodeId>,
}

impl Builder {
    fn line(&mut self, line: &str) {
        let Some(matched) = match_directive(line) else {
            tracing::debug!(line, "skipping unrecognized line");
            return;
        };
        tracing::trace!(keyword = matched.keyword, "directive");
        self.dispatch(matched, Link::Previous);
    }

    /// Apply one directive. Shared by top-level lines and branch bodies.
    fn dispatch(&mut self, matched: Matched<'_>, link: Link) {
        let rest = matched.rest;
        match matched.directive {
            Directive::Node(shape) => {
                let id = self.mint(rest, shape);
                self.link(link, id);
                self.previous = Some(id);
            }
            Directive::Decision => {
                let id = self.mint(rest, Shape::Decision);
                self.link(link, id);
                self.decision = Some(id);
                self.previous = Some(id);
            }
            Directive::Branch(branch) => self.branch(branch, rest),
            Directive::Comment => {
                let id = self.mint(rest, Shape::Note);
                self.link_styled(link, id, EdgeStyle::Dotted);
            }
            Directive::GoTo => self.go_to(rest, link),
            Directive::ParallelStart => {
                let id = self.mint(rest, Shape::Process);
                self.link(link, id);
                self.parallel_anchors.push(id);
                self.previous = None;
            }
            Directive::ParallelPath => {
                let id = self.mint(rest, Shape::Process);
                match self.parallel_anchors.last().copied() {
                    Some(anchor) => self.edge(anchor, id, None, EdgeStyle::Solid),
                    None => self.link(link, id),
                }
                self.previous = Some(id);
            }
            Directive::ParallelEnd => {
                let id = self.mint(rest, Shape::Process);
                self.link(link, id);
                self.parallel_anchors.pop();
                self.previous = Some(id);
            }
            Directive::GroupStart => {
                self.group_count += 1;
                let id = GroupId(self.group_count);
                self.statements
                    .push(Statement::GroupStart { id, title: clean_label(rest) });
                self.open_groups += 1;
            }
            Directive::GroupEnd => {
                if self.open_groups == 0 {
                    tracing::debug!("ignoring GROUP END without an open group");
                    return;
                }
                self.statements.push(Statement::GroupEnd);
                self.open_groups -= 1;
            }
        }
    }

    /// `YES:` / `NO:` body. A body that itself starts with a directive is
    /// dispatched as that directive with the branch edge as its incoming
    /// link; anything else (including a nested `YES:`/`NO:`) is literal step
    /// text.
    fn branch(&mut self, branch: Branch, rest: &str) {
        let link = Link::Branch(branch);
        if let Some(nested) = match_directive(rest).filter(|m| m.directive.nests_in_branch()) {
            self.dispatch(nested, link);
            return;
        }
        let id = self.mint(rest, Shape::Process);
        self.link(link, id);
        self.previous = Some(id);
    }

    /// Edge to an earlier node. Inside a branch the edge leaves the decision
    /// node with the branch label. Previous is left untouched.
    fn go_to(&mut self, rest: &str, link: Link) {
        let target = normalize_label(rest);
        let Some(to) = self.labels.get(&target).copied() else {
            tracing::debug!(target = %target, "GO TO target not found; dropping");
            return;
        };
        if self.source(link).is_none() {
            tracing::debug!(target = %target, "GO TO without a source node; dropping");
            return;
        }
        self.link(link, to);
    }

    fn mint(&mut self, raw: &str, shape: Shape) -> NodeId {
        self.node_count += 1;
        let id = NodeId(self.node_count);
        let label = clean_label(raw);
        if !label.is_empty() {
            self.labels.insert(label.to_lowercase(), id);
        }
        self.statements.push(Statement::Node(Node { id, label, shape }));
        id
    }

    /// Source node and edge label for an incoming link.
    fn source(&self, link: Link) -> Option<(NodeId, Option<&'static str>)> {
        match link {
            Link::Previous => self.previous.map(|from| (from, None)),
            Link::Branch(branch) => self.decision.map(|from| (from, Some(branch.label()))),
        }
    }

    fn link(&mut self, link: Link, to: NodeId) {
        self.link_styled(link, to, EdgeStyle::Solid);
    }

    fn link_styled(&mut self, link: Link, to: NodeId, style: EdgeStyle) {
        if let Some((from, label)) = self.source(link) {
            self.edge(from, to, label, style);
        }
    }

    fn edge(&mut self, from: NodeId, to: NodeId, label: Option<&str>, style: EdgeStyle) {
        self.statements.push(Statement::Edge(Edge { from, to, label: label.map(ToOwned::to_owned), style }));
    }

    fn finish(mut self) -> Flowchart {
        if self.open_groups > 0 {
            tracing::debug!(open = self.open_groups, "closing groups left open at end of input");
        }
        for _ in 0..self.open_groups {
            self.statements.push(Statement::GroupEnd);
        }
        Flowchart { statements: self.statements }
    }
}
