pub mod container;
pub mod intersect;
pub mod predicate;
pub mod scalar;
pub mod segment;
