use {crate::tracking::TrackingSnapshot, std::collections::VecDeque};

/// Tracking snapshots delivered during current frame.
///
/// Snapshots leave the feed in arrival order and each is handed out once.
#[derive(Debug, Default)]
pub struct TrackingFeed {
    snapshots: VecDeque<TrackingSnapshot>,
}

impl TrackingFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: TrackingSnapshot) {
        self.snapshots.push_back(snapshot);
    }

    /// Number of snapshots not taken yet.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Takes all pending snapshots, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = TrackingSnapshot> + '_ {
        self.snapshots.drain(..)
    }

    /// Drops pending snapshots, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.snapshots.len();
        self.snapshots.clear();
        dropped
    }
}

#[cfg(test)]
mod tests {
    use {super::*, nalgebra as na};

    fn snapshot(body: u64) -> TrackingSnapshot {
        TrackingSnapshot::new(body, na::Isometry3::identity())
    }

    #[test]
    fn drains_in_arrival_order() {
        let mut feed = TrackingFeed::new();
        feed.push(snapshot(3));
        feed.push(snapshot(1));
        feed.push(snapshot(2));
        assert_eq!(feed.len(), 3);

        let bodies: Vec<_> = feed.drain().map(|snapshot| snapshot.body).collect();
        assert_eq!(bodies, [3, 1, 2]);
        assert!(feed.is_empty());
        assert_eq!(feed.drain().count(), 0);
    }

    #[test]
    fn clear_counts_dropped() {
        let mut feed = TrackingFeed::new();
        feed.push(snapshot(0));
        feed.push(snapshot(0));

        assert_eq!(feed.clear(), 2);
        assert_eq!(feed.clear(), 0);
    }
}
