pub mod frequency;
pub mod pages;
pub mod result;

pub use frequency::CharacterFrequency;
pub use pages::ManuscriptPages;
pub use result::{ByteSizes, TextCountResult};
