//! Provider implementations backed by the host environment.

pub mod random;

pub use random::ThreadRandom;
