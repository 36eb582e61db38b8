//! Backend-agnostic GPU types.

mod common;
mod texture;

pub use common::{ClearValue, Viewport};
pub use texture::{TextureFormat, TextureLayout, TextureUsage};
