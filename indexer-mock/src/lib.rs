/// Indexer Mock Server Library
///
/// Serves a scripted in-memory indexer over the txwatch TCP framing, for
/// running a watcher against a real socket during development.

pub mod server;

pub use server::{load_indexer, run_server};
