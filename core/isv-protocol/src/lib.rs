#![no_std] // WASM compatibility

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod display;
pub mod error;
pub mod morphology;
pub mod paradigm;
pub mod script;

// Re-export core types for convenience
pub use display::CaseOrder;
pub use error::ProtocolError;
pub use morphology::*;
pub use paradigm::*;
pub use script::{Flavor, Script};

pub mod model;
pub use model::*;
