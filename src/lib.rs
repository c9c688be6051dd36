//! # emu8
//!
//! A CHIP-8 interpreter. The heart of it is [`execute`], which decodes a single
//! opcode and applies it to a caller-owned [`State`]. [`Chip8`] wraps that in a
//! fetch/execute driver with timers, a keypad and rewind.
//!
//! ```
//! use emu8::{execute, State};
//!
//! let mut state = State::new();
//! state.v[0x0] = 0x12;
//! execute(0x3012, &mut state).unwrap();
//! assert_eq!(state.pc, 0x204);
//! ```

pub use chip8::Chip8;
pub use constants::CLOCK_SPEED;
pub use error::Error;
pub use instruction::{decode, execute, Operation};
pub use opcode::Opcode;
pub use state::{Display, State};

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod opcode;
mod operations;
pub mod state;
