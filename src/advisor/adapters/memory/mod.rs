//! In-memory adapters for advice tests.

mod generative;

pub use generative::ScriptedGenerativeClient;
