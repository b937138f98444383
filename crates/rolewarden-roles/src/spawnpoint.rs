//! The spawnpoint capability attached to first-person roles.

use std::fmt::Debug;

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::Vector3;

/// A spawn position with the horizontal rotation (yaw, in degrees) the
/// participant should face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub position: Vector3,
    pub horizontal_rotation: f32,
}

impl SpawnPoint {
    pub const fn new(position: Vector3, horizontal_rotation: f32) -> Self {
        Self {
            position,
            horizontal_rotation,
        }
    }
}

/// Produces spawnpoints on demand for a role.
///
/// Implemented by the game engine for each role that spawns at map
/// locations. Lookups can fail (e.g. the map hasn't generated the rooms
/// the role spawns in), in which case `None` is returned.
///
/// `Send + Sync` because role objects are shared across the tasks that
/// validate spawns.
pub trait SpawnpointHandler: Send + Sync + Debug {
    /// Picks a spawnpoint, or `None` if none is available right now.
    fn try_get_spawnpoint(&self) -> Option<SpawnPoint>;
}

/// A spawnpoint handler backed by a fixed list of points.
///
/// Each lookup picks one of the points uniformly at random. An empty
/// list never yields a spawnpoint.
#[derive(Debug, Clone, Default)]
pub struct SpawnpointList {
    points: Vec<SpawnPoint>,
}

impl SpawnpointList {
    pub fn new(points: Vec<SpawnPoint>) -> Self {
        Self { points }
    }

    /// A list holding exactly one point, so every lookup returns it.
    pub fn single(point: SpawnPoint) -> Self {
        Self::new(vec![point])
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl SpawnpointHandler for SpawnpointList {
    fn try_get_spawnpoint(&self) -> Option<SpawnPoint> {
        self.points.choose(&mut rand::rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_yields_nothing() {
        let list = SpawnpointList::default();
        assert!(list.is_empty());
        assert_eq!(list.try_get_spawnpoint(), None);
    }

    #[test]
    fn test_lookup_picks_from_list() {
        let a = SpawnPoint::new(Vector3::new(0.0, 1.0, 0.0), 0.0);
        let b = SpawnPoint::new(Vector3::new(5.0, 1.0, 5.0), 180.0);
        let list = SpawnpointList::new(vec![a, b]);
        for _ in 0..20 {
            let picked = list.try_get_spawnpoint().unwrap();
            assert!(picked == a || picked == b);
        }
    }
}
