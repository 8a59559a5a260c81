//! Tick-driven grid simulations for three arcade mini-games: tile matching,
//! maze chase and snake. Rendering and device input live with the host.
#![no_std]

extern crate alloc;

pub use avatar::*;
pub use engine::*;
pub use error::*;
pub use maze_chase::*;
pub use random::*;
pub use reward::*;
pub use session::*;
pub use snake::*;
pub use tick::*;
pub use tile_match::*;
pub use types::*;

mod avatar;
mod engine;
mod error;
mod maze_chase;
mod random;
mod reward;
mod session;
mod snake;
mod tick;
mod tile_match;
mod types;
