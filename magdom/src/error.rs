use thiserror::Error;

use crate::node::NodeId;

/// Errors raised by tree mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("node {0} does not exist")]
    NodeNotFound(NodeId),
    #[error("cannot insert {child} into {parent}: it would create a cycle")]
    HierarchyRequest { parent: NodeId, child: NodeId },
    #[error("{child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },
    #[error("text node {0} cannot have children")]
    TextParent(NodeId),
}
