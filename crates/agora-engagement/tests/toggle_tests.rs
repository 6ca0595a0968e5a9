//! Integration tests for the like toggle core
//!
//! Exercises the full toggle path against the in-memory reference store:
//! reward policy, ledger round-trips, serialization of concurrent toggles,
//! and failure-path atomicity.

use agora_core::{Actor, ActorId, Comment, Post, PostId};
use agora_engagement::{
    EngagementError, KarmaAggregator, LedgerRef, LikeToggleService, MemoryStore, TargetRef,
};
use assert_matches::assert_matches;
use futures::future::join_all;
use std::sync::Arc;
use time::OffsetDateTime;

// ============================================================================
// Test Helpers
// ============================================================================

fn ts() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

struct Fixture {
    store: Arc<MemoryStore>,
    service: LikeToggleService<MemoryStore>,
    author: ActorId,
    reader: ActorId,
    post: TargetRef,
    comment: TargetRef,
}

async fn fixture() -> Fixture {
    let store = Arc::new(MemoryStore::new());

    let author = Actor::new("author", ts());
    let reader = Actor::new("reader", ts());
    let author_id = author.id;
    let reader_id = reader.id;
    store.insert_actor(author).await;
    store.insert_actor(reader).await;

    let post = Post::new(author_id, "a post", ts());
    let post_id = post.id;
    store.insert_post(post).await;

    let comment = Comment::root(post_id, author_id, "a comment", ts());
    let comment_id = comment.id;
    store.insert_comment(comment).await;

    Fixture {
        service: LikeToggleService::new(store.clone()),
        store,
        author: author_id,
        reader: reader_id,
        post: TargetRef::Post(post_id),
        comment: TargetRef::Comment(comment_id),
    }
}

// ============================================================================
// Reward policy
// ============================================================================

#[tokio::test]
async fn test_single_toggle_likes_a_post() {
    let fx = fixture().await;

    let outcome = fx.service.toggle(fx.reader, fx.post).await.unwrap();
    assert!(outcome.liked);
    assert_eq!(outcome.likes_count, 1);
    assert_eq!(outcome.author_karma, 5);
}

#[tokio::test]
async fn test_single_toggle_likes_a_comment() {
    let fx = fixture().await;

    let outcome = fx.service.toggle(fx.reader, fx.comment).await.unwrap();
    assert!(outcome.liked);
    assert_eq!(outcome.likes_count, 1);
    assert_eq!(outcome.author_karma, 1);
}

#[tokio::test]
async fn test_self_like_credits_the_author() {
    let fx = fixture().await;

    // Nothing in the policy forbids liking your own post.
    let outcome = fx.service.toggle(fx.author, fx.post).await.unwrap();
    assert!(outcome.liked);
    assert_eq!(outcome.author_karma, 5);
}

// ============================================================================
// Toggle semantics and the append-only ledger
// ============================================================================

#[tokio::test]
async fn test_double_toggle_round_trips_through_the_ledger() {
    let fx = fixture().await;

    let first = fx.service.toggle(fx.reader, fx.post).await.unwrap();
    assert!(first.liked);

    let second = fx.service.toggle(fx.reader, fx.post).await.unwrap();
    assert!(!second.liked);
    assert_eq!(second.likes_count, 0);
    assert_eq!(second.author_karma, 0);

    // The reversal is a second opposite-signed entry, not a deletion.
    let ledger = fx.store.ledger().await;
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.iter().map(|e| e.amount).sum::<i64>(), 0);
    assert!(fx.store.likes().await.is_empty());
}

#[tokio::test]
async fn test_third_toggle_likes_again() {
    let fx = fixture().await;

    for _ in 0..2 {
        fx.service.toggle(fx.reader, fx.post).await.unwrap();
    }
    let third = fx.service.toggle(fx.reader, fx.post).await.unwrap();

    assert!(third.liked);
    assert_eq!(third.likes_count, 1);
    assert_eq!(third.author_karma, 5);
    assert_eq!(fx.store.ledger().await.len(), 3);
}

#[tokio::test]
async fn test_ledger_references_tag_the_like_lifecycle() {
    let fx = fixture().await;

    fx.service.toggle(fx.reader, fx.post).await.unwrap();
    let liked_row = fx.store.likes().await[0];

    fx.service.toggle(fx.reader, fx.post).await.unwrap();
    let ledger = fx.store.ledger().await;

    assert_eq!(ledger[0].reference, LedgerRef::Liked(liked_row.id));
    assert_eq!(ledger[1].reference, LedgerRef::Unliked(liked_row.id));
    assert_eq!(ledger[0].amount, 5);
    assert_eq!(ledger[1].amount, -5);
}

#[tokio::test]
async fn test_post_and_comment_likes_are_independent() {
    let fx = fixture().await;

    fx.service.toggle(fx.reader, fx.post).await.unwrap();
    let outcome = fx.service.toggle(fx.reader, fx.comment).await.unwrap();

    // Comment count does not include the post like; karma sums both.
    assert_eq!(outcome.likes_count, 1);
    assert_eq!(outcome.author_karma, 6);
}

// ============================================================================
// Failure paths
// ============================================================================

#[tokio::test]
async fn test_missing_target_writes_nothing() {
    let fx = fixture().await;
    let missing = TargetRef::Post(PostId::from_u128(404));

    let err = fx.service.toggle(fx.reader, missing).await.unwrap_err();
    assert_matches!(err, EngagementError::TargetNotFound { .. });

    assert!(fx.store.likes().await.is_empty());
    assert!(fx.store.ledger().await.is_empty());
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_concurrent_same_key_toggles_serialize() {
    const TOGGLES: usize = 9;
    let fx = fixture().await;
    let service = Arc::new(fx.service);

    let tasks: Vec<_> = (0..TOGGLES)
        .map(|_| {
            let service = service.clone();
            let reader = fx.reader;
            let post = fx.post;
            tokio::spawn(async move { service.toggle(reader, post).await })
        })
        .collect();
    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    // An odd number of serialized toggles must land on "liked".
    let likes = fx.store.likes().await;
    assert_eq!(likes.len(), 1);

    let ledger = fx.store.ledger().await;
    assert_eq!(ledger.len(), TOGGLES);
    let karma = KarmaAggregator::total_karma(&ledger, fx.author);
    assert_eq!(karma, 5);

    // Entries must strictly alternate +5 / -5: any other shape means two
    // toggles interleaved.
    for (i, entry) in ledger.iter().enumerate() {
        let expected = if i % 2 == 0 { 5 } else { -5 };
        assert_eq!(entry.amount, expected, "entry {i} out of order");
    }
}

#[tokio::test]
async fn test_concurrent_even_count_round_trips() {
    const TOGGLES: usize = 8;
    let fx = fixture().await;
    let service = Arc::new(fx.service);

    let tasks: Vec<_> = (0..TOGGLES)
        .map(|_| {
            let service = service.clone();
            let reader = fx.reader;
            let comment = fx.comment;
            tokio::spawn(async move { service.toggle(reader, comment).await })
        })
        .collect();
    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    assert!(fx.store.likes().await.is_empty());
    let ledger = fx.store.ledger().await;
    assert_eq!(ledger.len(), TOGGLES);
    assert_eq!(KarmaAggregator::total_karma(&ledger, fx.author), 0);
}

#[tokio::test]
async fn test_distinct_actors_each_count_once() {
    let fx = fixture().await;
    let service = Arc::new(fx.service);

    let mut readers = Vec::new();
    for i in 0..4 {
        let reader = Actor::new(format!("reader-{i}"), ts());
        readers.push(reader.id);
        fx.store.insert_actor(reader).await;
    }

    let tasks: Vec<_> = readers
        .iter()
        .map(|&reader| {
            let service = service.clone();
            let post = fx.post;
            tokio::spawn(async move { service.toggle(reader, post).await })
        })
        .collect();
    let outcomes: Vec<_> = join_all(tasks)
        .await
        .into_iter()
        .map(|r| r.unwrap().unwrap())
        .collect();

    assert!(outcomes.iter().all(|o| o.liked));
    assert_eq!(fx.store.likes().await.len(), 4);
    let ledger = fx.store.ledger().await;
    assert_eq!(KarmaAggregator::total_karma(&ledger, fx.author), 20);
}

// ============================================================================
// Read-side aggregation over live toggles
// ============================================================================

#[tokio::test]
async fn test_leaderboard_reflects_committed_toggles() {
    let fx = fixture().await;

    fx.service.toggle(fx.reader, fx.post).await.unwrap();
    fx.service.toggle(fx.reader, fx.comment).await.unwrap();

    let ledger = fx.store.ledger().await;
    let actors = fx.store.actors().await;
    let now = OffsetDateTime::now_utc();

    let rows = KarmaAggregator::leaderboard(&ledger, &actors, now, 5);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].actor, fx.author);
    assert_eq!(rows[0].handle, "author");
    assert_eq!(rows[0].karma_24h, 6);
    assert_eq!(rows[0].total_karma, 6);
}
