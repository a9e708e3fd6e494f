// Typing-session core shared by the terminal front end, the integration
// tests and the benchmarks. Nothing in here touches the terminal.

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod session;
