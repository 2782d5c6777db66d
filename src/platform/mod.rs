//! Platform abstraction layer
//!
//! Turns browser events into plain data the simulation can read:
//! - Keyboard arrows as held left/right intent
//! - Pointer movement as a one-shot paddle placement sample

pub mod input;

pub use input::InputState;
