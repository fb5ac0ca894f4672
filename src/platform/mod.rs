//! Platform abstraction layer
//!
//! Host-independent pieces of the frame loop:
//! - Held-key table fed from key events, polled by the simulation
//! - Frame rate measurement

pub mod input;
pub mod timing;

pub use input::{Key, KeyEvent, KeyState};
pub use timing::FpsCounter;
