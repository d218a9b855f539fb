use uuid::Uuid;

/// Directed edge: `follower_id` follows `following_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FollowEdge {
    pub follower_id: Uuid,
    pub following_id: Uuid,
}

impl FollowEdge {
    pub fn new(follower_id: Uuid, following_id: Uuid) -> Self {
        Self {
            follower_id,
            following_id,
        }
    }

    pub fn is_self_follow(&self) -> bool {
        self.follower_id == self.following_id
    }
}

/// Aggregates derived from the edge set at read time; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FollowCounts {
    pub following_count: i64,
    pub followers_count: i64,
}
