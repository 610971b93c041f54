pub mod config;
pub mod names;
pub mod locate;
pub mod passage;
pub mod merge;
pub mod render;
pub mod highlighter;
pub mod wasm;

pub use config::*;
pub use names::*;
pub use locate::*;
pub use passage::*;
pub use merge::*;
pub use render::*;
pub use highlighter::*;
pub use wasm::*;

#[cfg(test)]
mod tests;
