/// State management module
///
/// This module handles all sort session state, including:
/// - Scanning the source folder and preparing destinations (queue.rs)
/// - Shared data structures (data.rs)
/// - The key-driven sort state machine (session.rs)

pub mod data;
pub mod queue;
pub mod session;
