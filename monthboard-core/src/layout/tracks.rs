//! First-fit track allocation.
//!
//! A track is a vertical lane index. `TrackBoard` assigns each interval
//! (any set of points) the lowest track that is free on every point it
//! covers, then marks those points occupied. This is greedy
//! interval-graph coloring: deterministic for a fixed insertion order,
//! not globally optimal. Callers needing reproducible output must sort
//! their intervals before allocating.
//!
//! The board knows nothing about calendars; the month view uses it with
//! `P = NaiveDate`.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct TrackBoard<P> {
    occupied: HashMap<P, Vec<usize>>,
}

impl<P: Eq + Hash + Clone> TrackBoard<P> {
    pub fn new() -> Self {
        TrackBoard {
            occupied: HashMap::new(),
        }
    }

    /// Assign the lowest track free on every point, and occupy it there.
    ///
    /// An empty point set conflicts with nothing and gets track 0.
    pub fn allocate(&mut self, points: &[P]) -> usize {
        let mut track = 0;
        while points
            .iter()
            .any(|p| self.occupied.get(p).is_some_and(|t| t.contains(&track)))
        {
            track += 1;
        }

        for point in points {
            self.occupied.entry(point.clone()).or_default().push(track);
        }
        track
    }

    /// Number of tracks occupied at `point`.
    pub fn occupancy(&self, point: &P) -> usize {
        self.occupied.get(point).map_or(0, Vec::len)
    }

    /// Vertical depth to reserve at `point`: one past the highest
    /// occupied track. Exceeds `occupancy` when lower tracks happen to be
    /// free there.
    pub fn depth(&self, point: &P) -> usize {
        self.occupied
            .get(point)
            .and_then(|tracks| tracks.iter().max())
            .map_or(0, |highest| highest + 1)
    }

    /// Occupied tracks at `point`, unordered.
    pub fn tracks_at(&self, point: &P) -> &[usize] {
        match self.occupied.get(point) {
            Some(tracks) => tracks.as_slice(),
            None => &[],
        }
    }
}

impl<P: Eq + Hash + Clone> Default for TrackBoard<P> {
    fn default() -> Self {
        Self::new()
    }
}
