pub mod activity;
pub mod grid;
pub mod palette;
