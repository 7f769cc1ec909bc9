mod front_matter;
mod message;

pub use front_matter::FrontMatter;
pub use message::{Message, Role};
