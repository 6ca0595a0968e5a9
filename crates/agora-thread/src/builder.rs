//! Comment tree builder
//!
//! Rebuilds the reply tree from a flat result set in O(n) time and space.
//! The input contract comes from the storage layer: comments arrive sorted
//! by creation time ascending, and a parent is always created before its
//! children. That makes one forward pass sufficient: by the time a child
//! is visited, its parent has already been indexed.

use agora_core::{ActorId, Comment, CommentId};
use agora_engagement::{Like, TargetRef};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One node of a rebuilt comment tree.
///
/// `likes_count` and `is_liked` are a per-viewer projection computed at
/// build time; nodes live for one request and are never cached across
/// requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentNode {
    /// The comment itself
    pub comment: Comment,
    /// Live like count for this comment
    pub likes_count: u64,
    /// Whether the requesting viewer likes this comment (false without a viewer)
    pub is_liked: bool,
    /// Direct replies, in creation order
    pub replies: Vec<CommentNode>,
}

/// Builder for threaded comment trees.
pub struct ThreadBuilder;

impl ThreadBuilder {
    /// Build the reply forest for a flat, time-ordered comment set.
    ///
    /// Returns root nodes only, children nested, sibling order at every
    /// level matching the input order. A comment whose `parent` id is not
    /// in the input set becomes a root rather than an error, so callers
    /// can pass a filtered subset (e.g. one sub-thread).
    ///
    /// `likes` supplies the projection data; like rows that do not point
    /// at comments in the input are ignored.
    pub fn build(flat: &[Comment], likes: &[Like], viewer: Option<ActorId>) -> Vec<CommentNode> {
        let mut likes_count: HashMap<CommentId, u64> = HashMap::new();
        let mut liked_by_viewer: HashSet<CommentId> = HashSet::new();
        for like in likes {
            if let TargetRef::Comment(comment_id) = like.target {
                *likes_count.entry(comment_id).or_insert(0) += 1;
                if viewer == Some(like.actor) {
                    liked_by_viewer.insert(comment_id);
                }
            }
        }

        // Forward pass: index every comment, then attach each one to its
        // parent's child list or to the root set.
        let index: HashMap<CommentId, usize> = flat
            .iter()
            .enumerate()
            .map(|(position, comment)| (comment.id, position))
            .collect();

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); flat.len()];
        let mut roots: Vec<usize> = Vec::new();
        for (position, comment) in flat.iter().enumerate() {
            match comment.parent.and_then(|parent| index.get(&parent).copied()) {
                // A comment cannot reply to itself; treat that shape as a root.
                Some(parent_position) if parent_position != position => {
                    children[parent_position].push(position);
                }
                _ => roots.push(position),
            }
        }

        // Assemble bottom-up. Children always sit later in the input than
        // their parent, so walking positions in reverse completes every
        // subtree before its root is taken.
        let mut nodes: Vec<Option<CommentNode>> = flat
            .iter()
            .map(|comment| {
                Some(CommentNode {
                    likes_count: likes_count.get(&comment.id).copied().unwrap_or(0),
                    is_liked: liked_by_viewer.contains(&comment.id),
                    comment: comment.clone(),
                    replies: Vec::new(),
                })
            })
            .collect();

        for position in (0..flat.len()).rev() {
            let replies: Vec<CommentNode> = children[position]
                .iter()
                .filter_map(|&child| nodes[child].take())
                .collect();
            if let Some(node) = nodes[position].as_mut() {
                node.replies = replies;
            }
        }

        roots
            .into_iter()
            .filter_map(|position| nodes[position].take())
            .collect()
    }
}
