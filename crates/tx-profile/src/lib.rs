pub mod error;
pub mod keys;
pub mod loaded_profile;
pub mod repository;


pub use error::{ProfileError, Result};
pub use keys::{CURRENT_USER_KEY, user_key};
pub use loaded_profile::LoadedProfile;
pub use repository::ProfileRepository;
