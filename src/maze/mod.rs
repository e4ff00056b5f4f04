pub mod cell;
pub mod sets;

pub use cell::Cell;
pub use sets::RowSets;
