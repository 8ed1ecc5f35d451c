//! Artifact export

mod progress_image;

pub use progress_image::render_progress_image;
