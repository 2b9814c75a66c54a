//! Elemental type system.
//!
//! - `Element`: a named type with strong/weak/compatible relations
//! - `ElementRegistry`: name lookup for loaded elements
//!
//! Elements are created once at load time and shared by `Arc` across every
//! spell, effect and mage that references them.

mod element;
mod registry;

pub use element::Element;
pub use registry::ElementRegistry;
