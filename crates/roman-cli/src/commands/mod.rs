pub mod convert;
pub mod normalize;
pub mod symbols;
