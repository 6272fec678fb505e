pub mod live;
pub mod resolver;
pub mod segments;
