//! Port definitions - interfaces between layers

pub mod outbound;
