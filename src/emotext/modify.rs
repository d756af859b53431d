//! Sibling-list traversal with index override
//!
//! The coalescer works on one child vector at a time and needs to steer the
//! cursor after it splices: re-examine the current slot after a removal,
//! or jump past a multi-node replacement. [`modify_children`] provides that
//! contract; [`modify_tree`] applies it depth-first over a whole tree.

use super::ast::Node;

/// A rewrite pass over one sibling list.
///
/// `visit` is called with the live child vector and the index of the node
/// under inspection (always in bounds at call time). It may splice the
/// vector; returning `Some(next)` resumes iteration at `next`, returning
/// `None` advances to `index + 1`.
pub trait Modifier {
    fn visit(&self, siblings: &mut Vec<Node>, index: usize) -> Option<usize>;
}

impl<F> Modifier for F
where
    F: Fn(&mut Vec<Node>, usize) -> Option<usize>,
{
    fn visit(&self, siblings: &mut Vec<Node>, index: usize) -> Option<usize> {
        self(siblings, index)
    }
}

/// Run one pass of `modifier` over the children of `parent`.
///
/// The cursor honors the modifier's continuation: the driver never rewinds
/// on its own, and re-checks the length on every step since the list may
/// shrink or grow under it.
pub fn modify_children<M: Modifier>(modifier: &M, parent: &mut Node) {
    let Some(children) = parent.children_mut() else {
        return;
    };

    let mut index = 0;
    while index < children.len() {
        match modifier.visit(children, index) {
            Some(next) => index = next,
            None => index += 1,
        }
    }
}

/// Apply `modifier` to every sibling list in the tree, document order,
/// parents before their surviving children.
pub fn modify_tree<M: Modifier>(modifier: &M, node: &mut Node) {
    modify_children(modifier, node);

    if let Some(children) = node.children_mut() {
        for child in children.iter_mut() {
            modify_tree(modifier, child);
        }
    }
}
