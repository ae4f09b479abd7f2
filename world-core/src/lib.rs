// Game-world object placement model
//
// Module structure:
// - types     Type codes, object groups, placement keys
// - position  Tile coordinates and distance checks
// - location  The placed-object record
// - world     Placement registry and snapshot views

mod location;
mod position;
mod types;
mod world;

pub use location::*;
pub use position::*;
pub use types::*;
pub use world::*;
