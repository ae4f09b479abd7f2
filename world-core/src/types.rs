use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

// ============================================================================
// Field codes - the raw integers a placement record carries
// ============================================================================

/// Object-definition id. The definition it names lives in external asset
/// tooling; the record only carries the number.
pub type ObjectId = i32;

/// Sub-type/variant code. Encoding is external; the well-known ranges are
/// classified by [`ObjectGroup`].
pub type TypeCode = i32;

/// Rotation/facing code. Encoding is external.
pub type Orientation = i32;

// ============================================================================
// PlacementId - generational key for placed instances
// ============================================================================

new_key_type! {
    pub struct PlacementId;
}

impl PlacementId {
    /// Stable `u64` form for snapshots and event fields.
    pub fn to_u64(self) -> u64 {
        self.0.as_ffi()
    }

    pub fn from_u64(raw: u64) -> Self {
        slotmap::KeyData::from_ffi(raw).into()
    }
}

// ============================================================================
// ObjectGroup - classification of the well-known type-code ranges
// ============================================================================

/// Coarse grouping of a [`TypeCode`].
///
/// Codes outside the known ranges classify to `None`; the record itself
/// accepts any code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectGroup {
    Wall,
    WallDecoration,
    Scenery,
    Roof,
    GroundDecoration,
}

impl ObjectGroup {
    pub fn from_code(code: TypeCode) -> Option<ObjectGroup> {
        match code {
            0..=3 => Some(ObjectGroup::Wall),
            4..=8 => Some(ObjectGroup::WallDecoration),
            9..=11 => Some(ObjectGroup::Scenery),
            12..=21 => Some(ObjectGroup::Roof),
            22 => Some(ObjectGroup::GroundDecoration),
            _ => None,
        }
    }
}
