//! Content loading.
//!
//! Elements and spells are data, not code. `ContentLoader` reads a JSON
//! document into a `ContentLibrary`, skipping and reporting any entry it
//! cannot build rather than failing the whole load.
//!
//! ## Key Types
//!
//! - `ContentLibrary`: element registry plus spell catalog, shared by sessions
//! - `ContentLoader`: best-effort loader producing a `LoadReport`
//! - `AttributeValue` / `EffectAttributes`: effect attribute coercion

mod attributes;
mod library;
mod loader;

pub use attributes::{AttributeValue, EffectAttributes};
pub use library::ContentLibrary;
pub use loader::{ContentLoader, LoadReport};
