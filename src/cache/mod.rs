mod memory;

pub use memory::{CacheLookup, TranslationCache};
