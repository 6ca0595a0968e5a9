//! Agora Core - Shared Feed Data Model
//!
//! This crate provides the identifiers and entity types shared by the
//! engagement and threading layers:
//!
//! - Identifiers: `ActorId`, `PostId`, `CommentId` - opaque Uuid newtypes
//! - Entities: `Actor`, `Post`, `Comment`
//!
//! # Architecture
//!
//! This is the leaf crate of the workspace. It carries no business logic:
//! like/ledger semantics live in `agora-engagement`, tree reconstruction in
//! `agora-thread`. Derived quantities (like counts, karma) are never stored
//! on these types; they are always recomputed by the layers above.

pub mod identifiers;
pub mod model;

// Re-export primary types
pub use identifiers::{ActorId, CommentId, PostId};
pub use model::{Actor, Comment, Post};
