//! Page components for Lumen.

mod landing;

pub use landing::Landing;
