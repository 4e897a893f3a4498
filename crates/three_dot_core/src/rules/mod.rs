//! Game rules for the 3 Dot game.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the engine, the invariants and the contracts can all
//! compose them.

pub mod adjacency;
pub mod draw;
pub mod win;

pub use adjacency::{Direction, has_occupied_neighbor};
pub use draw::{is_draw, is_full};
pub use win::{has_line_of_three, winning_line};
