// Docs module - topic to documentation file resolution
#![allow(unused_imports)]

pub mod error;
pub mod resolver;
pub mod types;

pub use error::{DocsError, Result};
pub use resolver::{TOPIC_ALIASES, TopicResolver};
pub use types::DocumentLookup;
