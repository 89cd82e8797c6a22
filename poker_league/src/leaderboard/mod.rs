//! Ranked leaderboard projection.

use crate::store::{Document, Store};
use crate::users::UserId;
use serde::Serialize;
use std::cmp::Reverse;
use std::sync::Arc;

/// Default number of entries served.
pub const DEFAULT_TOP_N: usize = 50;

/// One leaderboard row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position in the truncated ranking, not competition rank
    pub rank: usize,
    pub user_id: UserId,
    pub nickname: String,
    pub rating: i64,
    pub total_games: u32,
    pub wins: u32,
}

/// Leaderboard
#[derive(Clone)]
pub struct Leaderboard {
    store: Arc<Store>,
}

impl Leaderboard {
    /// Create a new leaderboard
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Top `n` users by descending rating.
    pub async fn top_n(&self, n: usize) -> Vec<LeaderboardEntry> {
        rank_users(&self.store.snapshot().await, n)
    }
}

/// Rank users from a document snapshot.
///
/// The sort is stable, so users with equal ratings keep the order they
/// were first seen in.
pub fn rank_users(doc: &Document, n: usize) -> Vec<LeaderboardEntry> {
    let mut users: Vec<_> = doc.users.iter().collect();
    users.sort_by_key(|u| Reverse(u.stats.rating));
    users
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, u)| LeaderboardEntry {
            rank: i + 1,
            user_id: u.id,
            nickname: u.nickname.clone(),
            rating: u.stats.rating,
            total_games: u.stats.total_games,
            wins: u.stats.wins,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::User;

    fn user_with_rating(id: UserId, rating: i64) -> User {
        let mut user = User::new(id, Some(&format!("user{id}")));
        user.stats.rating = rating;
        user
    }

    #[test]
    fn test_sorted_by_descending_rating() {
        let doc = Document {
            users: vec![
                user_with_rating(1, 900),
                user_with_rating(2, 1200),
                user_with_rating(3, 1050),
            ],
            ..Default::default()
        };

        let top = rank_users(&doc, DEFAULT_TOP_N);
        let ids: Vec<_> = top.iter().map(|e| e.user_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_insertion_order_and_rank_is_positional() {
        let doc = Document {
            users: vec![
                user_with_rating(1, 1200),
                user_with_rating(2, 1200),
                user_with_rating(3, 900),
            ],
            ..Default::default()
        };

        let top = rank_users(&doc, DEFAULT_TOP_N);
        assert_eq!(top[0].user_id, 1);
        assert_eq!(top[1].user_id, 2);
        assert_eq!(top[2].user_id, 3);
        // Positional ranks, even for the tied pair.
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[1].rank, 2);
        assert_eq!(top[2].rank, 3);
    }

    #[test]
    fn test_truncates_to_cap() {
        let doc = Document {
            users: (1..=10).map(|i| user_with_rating(i, 1000 + i)).collect(),
            ..Default::default()
        };

        let top = rank_users(&doc, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].user_id, 10);
    }

    #[test]
    fn test_empty_document_yields_empty_board() {
        assert!(rank_users(&Document::default(), 50).is_empty());
    }
}
