pub mod anchor;
pub mod username_extractor;

pub use anchor::Anchor;
pub use username_extractor::{username_from_profile_url, ExtractionStrategy, UsernameExtractor};
