#[cfg(feature = "cli")]
pub mod repl;
pub mod session;
pub mod views;
