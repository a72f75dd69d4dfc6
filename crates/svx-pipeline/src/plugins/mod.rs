//! The standard tag plugins.
//!
//! Each plugin handles exactly one custom tag and knows nothing about the
//! others; they communicate only through the document's requirement
//! registry. All four scan only the root's direct children.

mod gallery;
mod google_reviews;
mod image;
mod mini_gallery;

pub use gallery::GalleryPlugin;
pub use google_reviews::GoogleReviewsPlugin;
pub use image::ImagePlugin;
pub use mini_gallery::MiniGalleryPlugin;
