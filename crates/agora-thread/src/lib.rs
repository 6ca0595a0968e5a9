//! Agora Thread - Threaded Comment Trees
//!
//! Converts the flat, time-ordered comment set a single storage query
//! returns into a nested reply tree, in one forward pass. This is the read
//! side of comment threading: the tree is rebuilt per request, carries the
//! requesting viewer's like projection, and is discarded afterward.
//!
//! # Example
//!
//! ```ignore
//! use agora_thread::ThreadBuilder;
//!
//! let comments = store.fetch_comments_for_post(post_id).await?;
//! let likes = /* comment likes for the post */;
//! let roots = ThreadBuilder::build(&comments, &likes, Some(viewer));
//! ```

pub mod builder;

// Re-export primary types
pub use builder::{CommentNode, ThreadBuilder};
