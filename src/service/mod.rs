//! Application services over the catalog store.

pub mod tracker;

pub use tracker::Tracker;
