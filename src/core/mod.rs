//! Core processing building blocks: bleed geometry, cropping, corner masks,
//! alpha composition and resampling. These are internal primitives consumed by
//! the high-level `api` module.
pub mod params;
pub mod processing;
