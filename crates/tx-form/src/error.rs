use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Selected image is empty {location}")]
    EmptyImage { location: ErrorLocation },

    #[error("Unrecognized image format for {name} {location}")]
    UnsupportedFormat {
        name: String,
        location: ErrorLocation,
    },
}

impl ImageError {
    /// Creates EmptyImage error at caller location.
    #[track_caller]
    pub fn empty_image() -> Self {
        Self::EmptyImage {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates UnsupportedFormat error at caller location.
    #[track_caller]
    pub fn unsupported_format(name: Option<&str>) -> Self {
        Self::UnsupportedFormat {
            name: name.unwrap_or("selected image").to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageError>;
