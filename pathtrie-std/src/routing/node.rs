//! Directory nodes of the path trie.

use pathtrie_core::Wildcard;
use std::collections::HashMap;

/// Identity of a node, used for the non-owning parent link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u64);

/// Hands out fresh [`NodeId`]s. The root is always id 0.
#[derive(Debug, Default)]
pub(crate) struct NodeIds {
    next: u64,
}

impl NodeIds {
    fn root(&mut self) -> NodeId {
        self.next = 1;
        NodeId(0)
    }

    fn next(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

/// One segment level of the trie.
///
/// Children are owned by their parent's map, so removing an entry drops the
/// whole subtree below it. A node's children are all concrete, or exactly
/// one `*`, or exactly one `**`; `wildcard_child` records which.
#[derive(Debug)]
pub(crate) struct DirNode<V> {
    id: NodeId,
    name: String,
    /// `Some` iff a registered path ends here.
    pub(crate) value: Option<V>,
    pub(crate) children: HashMap<String, DirNode<V>>,
    wildcard_child: Option<Wildcard>,
    parent: Option<NodeId>,
    /// Registered paths passing through this node. Unused on the root.
    pub(crate) ref_count: usize,
}

impl<V> DirNode<V> {
    pub(crate) fn root(ids: &mut NodeIds) -> Self {
        Self::new(ids.root(), "/".to_string(), None)
    }

    fn new(id: NodeId, name: String, parent: Option<NodeId>) -> Self {
        Self {
            id,
            name,
            value: None,
            children: HashMap::new(),
            wildcard_child: None,
            parent,
            ref_count: 0,
        }
    }

    /// The `*` or `**` child, if this node has one.
    pub(crate) fn wildcard(&self) -> Option<(Wildcard, &DirNode<V>)> {
        let kind = self.wildcard_child?;
        self.children.get(kind.token()).map(|child| (kind, child))
    }

    /// Whether a child named `segment` may live under this node without
    /// mixing wildcard and concrete siblings.
    pub(crate) fn accepts(&self, segment: &str) -> bool {
        match Wildcard::from_segment(segment) {
            Some(kind) => self.children.is_empty() || self.wildcard_child == Some(kind),
            None => self.wildcard_child.is_none(),
        }
    }

    /// Descend into `segment`, creating the child if missing.
    ///
    /// Callers must have checked [`accepts`](Self::accepts) first.
    pub(crate) fn child_or_insert(&mut self, segment: &str, ids: &mut NodeIds) -> &mut DirNode<V> {
        if let Some(kind) = Wildcard::from_segment(segment) {
            self.wildcard_child = Some(kind);
        }
        let parent = self.id;
        self.children
            .entry(segment.to_string())
            .or_insert_with(|| DirNode::new(ids.next(), segment.to_string(), Some(parent)))
    }

    /// Remove the child named `segment` together with its subtree.
    pub(crate) fn detach_child(&mut self, segment: &str) -> Option<DirNode<V>> {
        let child = self.children.remove(segment)?;
        debug_assert_eq!(child.parent, Some(self.id));
        debug_assert_eq!(child.name, segment);
        if Wildcard::from_segment(segment).is_some() {
            self.wildcard_child = None;
        }
        Some(child)
    }

    /// Follow `segments` literally (wildcard tokens match only themselves).
    pub(crate) fn descendant_mut<S: AsRef<str>>(&mut self, segments: &[S]) -> Option<&mut DirNode<V>> {
        let mut node = self;
        for segment in segments {
            node = node.children.get_mut(segment.as_ref())?;
        }
        Some(node)
    }

    /// Number of nodes below this one.
    pub(crate) fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&DirNode<V>> = self.children.values().collect();
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.values());
        }
        count
    }

    /// Length of the longest chain of nodes below this one.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&DirNode<V>, usize)> =
            self.children.values().map(|child| (child, 1)).collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.children.values().map(|child| (child, depth + 1)));
        }
        height
    }
}

// Dropping a deep chain through the nested maps would recurse once per
// segment; unlink children onto a heap stack instead.
impl<V> Drop for DirNode<V> {
    fn drop(&mut self) {
        let mut pending: Vec<DirNode<V>> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
