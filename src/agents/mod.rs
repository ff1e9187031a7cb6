//! Concrete resource agents shipped with the crate.

mod node_attribute;

pub use node_attribute::NodeAttribute;
