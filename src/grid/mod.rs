//! Grid movement helper, independent of the traversal engine.

pub mod board;

pub use board::{next_moves, Board, Direction, Position, BLOCKED_CELL};
