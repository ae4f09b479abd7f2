use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::location::Location;
use crate::position::Position;
use crate::types::{ObjectId, Orientation, PlacementId, TypeCode};

// ============================================================================
// World - owner of every placed object instance
// ============================================================================

/// Registry of placed objects, keyed by generational [`PlacementId`].
///
/// A key stays valid until its placement is removed; a removed key never
/// observes a later insertion. Lookups are by key only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub placements: SlotMap<PlacementId, Location>,
}

impl World {
    pub fn new() -> Self {
        Self {
            placements: SlotMap::with_key(),
        }
    }

    /// Add a placement; returns the key that names it.
    pub fn add_location(&mut self, location: Location) -> PlacementId {
        let id = self.placements.insert(location);

        #[cfg(feature = "instrument")]
        tracing::info!(
            target: "placement",
            op = "insert",
            placement_id = id.to_u64(),
            object_id = location.id,
            kind = location.kind,
            orientation = location.orientation,
            x = location.position.x,
            y = location.position.y,
            plane = location.position.plane,
        );

        id
    }

    /// Get a placement by key.
    pub fn get_location(&self, id: PlacementId) -> Option<&Location> {
        self.placements.get(id)
    }

    /// Get a mutable reference to a placement.
    pub fn get_location_mut(&mut self, id: PlacementId) -> Option<&mut Location> {
        self.placements.get_mut(id)
    }

    /// Remove a placement, returning the record if the key was live.
    pub fn remove_location(&mut self, id: PlacementId) -> Option<Location> {
        let removed = self.placements.remove(id);

        #[cfg(feature = "instrument")]
        if let Some(location) = removed {
            tracing::info!(
                target: "placement",
                op = "remove",
                placement_id = id.to_u64(),
                object_id = location.id,
            );
        }

        removed
    }

    /// Iterate over all live placements.
    pub fn iter(&self) -> impl Iterator<Item = (PlacementId, &Location)> {
        self.placements.iter()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Serializable snapshot view
// ============================================================================

/// Flattened view of one placement for render/UI boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementSnapshot {
    pub id: u64,
    pub object: ObjectId,
    #[serde(rename = "type")]
    pub kind: TypeCode,
    pub orientation: Orientation,
    pub position: Position,
}

/// Point-in-time copy of every placement in the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub placements: Vec<PlacementSnapshot>,
}

impl World {
    /// Flattened copy of the current contents.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            placements: self
                .placements
                .iter()
                .map(|(id, loc)| PlacementSnapshot {
                    id: id.to_u64(),
                    object: loc.id,
                    kind: loc.kind,
                    orientation: loc.orientation,
                    position: loc.position,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_locations() {
        let mut world = World::new();
        assert!(world.is_empty());

        let door = world.add_location(Location::new(1276, 0, 1, Position::new(3253, 3420, 0)));
        let tree = world.add_location(Location::new(1278, 10, 0, Position::new(3190, 3425, 0)));

        assert_eq!(world.len(), 2);
        assert_eq!(world.get_location(door).unwrap().id, 1276);
        assert_eq!(world.get_location(tree).unwrap().kind, 10);
    }

    #[test]
    fn test_get_mut_rewrites_in_place() {
        let mut world = World::new();
        let id = world.add_location(Location::new(0, 0, 0, Position::default()));

        world.get_location_mut(id).unwrap().orientation = 2;

        assert_eq!(world.get_location(id).unwrap().orientation, 2);
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn test_remove_returns_record_once() {
        let mut world = World::new();
        let loc = Location::new(4151, 22, 0, Position::new(3093, 3244, 0));
        let id = world.add_location(loc);

        assert_eq!(world.remove_location(id), Some(loc));
        assert_eq!(world.remove_location(id), None);
        assert!(world.get_location(id).is_none());
        assert!(world.is_empty());
    }

    #[test]
    fn test_snapshot_flattens_fields() {
        let mut world = World::new();
        let id = world.add_location(Location::new(42, 7, 1, Position::new(1, 2, 3)));

        let snap = world.snapshot();
        assert_eq!(snap.placements.len(), 1);
        let p = &snap.placements[0];
        assert_eq!(p.id, id.to_u64());
        assert_eq!(p.object, 42);
        assert_eq!(p.kind, 7);
        assert_eq!(p.orientation, 1);
        assert_eq!(p.position, Position::new(1, 2, 3));
    }
}
