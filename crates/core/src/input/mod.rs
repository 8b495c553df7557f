//! Amount input state machine.
//!
//! Holds the primary/secondary amounts and the raw typed text, and updates
//! them in response to discrete UI events. Every error degrades to keeping
//! the last valid state.

pub mod event;
pub mod state;

pub use event::{InputEvent, InputOutcome, InputView};
pub use state::{AmountInput, InputSettings};
