//! Uniform traversal over the block tree.
//!
//! A visitor chooses its item type; the default methods walk children and
//! concatenate their results. Transforms use `Item = String` and are joined
//! by [`render`]; the analyses use tuple or unit items and collect into
//! their own state instead.

use crate::blocks::{InnerBlock, Node, OuterBlock};
use crate::line::RawLine;
use crate::logical::LogicalLine;

pub trait Visitor {
    type Item;

    fn raw_line(&mut self, line: &RawLine) -> Vec<Self::Item>;

    fn logical_line(&mut self, line: &LogicalLine) -> Vec<Self::Item> {
        let mut out = Vec::new();
        for child in &line.children {
            out.extend(self.raw_line(child));
        }
        out
    }

    fn inner_block(&mut self, block: &InnerBlock) -> Vec<Self::Item> {
        self.visit_children(&block.children)
    }

    fn outer_block(&mut self, block: &OuterBlock) -> Vec<Self::Item> {
        self.visit_children(&block.children)
    }

    fn visit(&mut self, node: &Node) -> Vec<Self::Item> {
        match node {
            Node::Raw(line) => self.raw_line(line),
            Node::Logical(line) => self.logical_line(line),
            Node::Inner(block) => self.inner_block(block),
            Node::Outer(block) => self.outer_block(block),
        }
    }

    fn visit_children(&mut self, nodes: &[Node]) -> Vec<Self::Item> {
        let mut out = Vec::new();
        for node in nodes {
            out.extend(self.visit(node));
        }
        out
    }
}

/// Run a string-producing visitor over a whole block and join the pieces.
pub fn render<V: Visitor<Item = String>>(visitor: &mut V, block: &OuterBlock) -> String {
    visitor.outer_block(block).concat()
}
