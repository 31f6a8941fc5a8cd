//! # amity-storage
//!
//! In-memory implementation of [`amity_core::traits::IQuizStore`]. The
//! hosted document backend stays behind the trait; this store backs tests
//! and offline use.

pub mod memory_store;

pub use memory_store::MemoryStore;
