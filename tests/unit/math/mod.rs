pub mod seed;
pub mod sequence;
