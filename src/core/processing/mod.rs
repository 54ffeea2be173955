pub mod compose;
pub mod crop;
pub mod geometry;
pub mod mask;
pub mod pipeline;
pub mod resize;
