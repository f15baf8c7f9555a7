// EphemeralDB Storage Layer
//
// Bucket store interface and its in-memory implementation

pub mod trait_;
pub mod memory;

pub use memory::{MemoryStore, create_memory_store};
pub use trait_::*;
