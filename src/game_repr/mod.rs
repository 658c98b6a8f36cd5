mod moves;
mod piece;
mod piece_moves;
mod position;
mod square;

#[cfg(test)]
mod tests;

pub use moves::*;
pub use piece::*;
pub use position::*;
pub use square::*;
