//! Domain model
//!
//! Plain records for the match state the server streams each tick and the
//! move commands sent back. Nullable fields are `Option`; how absence is
//! spelled on the wire is the codec's business, not the model's.

mod context;
mod game;
mod hockeyist;
mod moves;
mod player;
mod puck;
mod world;

pub use context::*;
pub use game::*;
pub use hockeyist::*;
pub use moves::*;
pub use player::*;
pub use puck::*;
pub use world::*;
