pub mod atom;
pub mod cell;
pub mod grid;
