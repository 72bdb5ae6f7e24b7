pub mod filter_drop_down;
pub mod graph;
