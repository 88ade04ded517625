//! Push/pull iteration patterns: yield-style generators, a lazy pull
//! adapter, and worked examples.
//!
//! The library formalizes the one idea the demonstration programs keep
//! coming back to: a producer that *pushes* elements into a consumer
//! callback until told to stop, and an adapter that turns such a producer
//! back into something the consumer can *pull* from one element at a time.

pub mod cleanup;
pub mod db;
pub mod list;
pub mod pull;
pub mod seq;

pub use cleanup::Cleanup;
pub use pull::{Pull, Pull2};
pub use seq::{Seq, Seq2};
