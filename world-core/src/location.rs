//! The placed-object record: which object, which variant, how it faces, and
//! where it stands.

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::{ObjectId, Orientation, TypeCode};

/// One placed object instance in the game world.
///
/// A plain record: every field is public and freely reassignable, no
/// combination of values is rejected, and no field constrains another. The
/// meaning of the three codes lives in external asset tooling; this type only
/// carries them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Object-definition id.
    pub id: ObjectId,
    /// Sub-type/variant code. Serialized under its external name, `type`.
    #[serde(rename = "type")]
    pub kind: TypeCode,
    /// Rotation/facing code.
    pub orientation: Orientation,
    /// Tile the object stands on.
    pub position: Position,
}

impl Location {
    /// Build a record with exactly the given values. No validation, cannot
    /// fail.
    pub const fn new(
        id: ObjectId,
        kind: TypeCode,
        orientation: Orientation,
        position: Position,
    ) -> Self {
        Self {
            id,
            kind,
            orientation,
            position,
        }
    }

    /// Same placement with a different facing.
    pub const fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            orientation,
            position: self.position,
        }
    }

    /// Same placement standing on a different tile.
    pub const fn with_position(self, position: Position) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            orientation: self.orientation,
            position,
        }
    }
}
