//! I/O layer: image decoding, card image discovery and output naming, and
//! `writers` for PNG output and JSON batch reports.
pub mod discovery;
pub use discovery::{collect_card_images, default_output_dir, ensure_output_dir};

pub mod naming;
pub use naming::{clean_file_stem, output_path_for};

pub mod reader;
pub use reader::open_image;

pub mod writers;
