//! Non-persistent repository provider

mod memory;

pub use memory::InMemoryStorage;
