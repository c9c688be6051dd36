use std::ops::Range;

use crate::constants::{
    DISPLAY_LENGTH, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET, STACK_SIZE,
};
use crate::error::Error;

/// The display is stored flat and row-major; a pixel is either 0 or 1.
pub type Display = [u8; DISPLAY_LENGTH];

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, always the address of the next opcode
///
/// Pointer
/// - (sp) an 8-bit stack pointer; the index of the next free stack slot
///
/// Timers
/// - 2 8-bit timers (delay & sound)
/// - Decremented at 60Hz by whoever drives the machine, never by instructions
///
/// ## Memory
/// - 16 slot stack of return addresses
/// - 4096 bytes of addressable memory
/// - 64x32 display buffer
///
/// ## Input
/// - the pressed status of keys 0..F
/// - Emulation halts until a key's value is written to `register_needing_key`
///
/// Nothing here is global; every machine owns its own State and hands it to
/// [`execute`](crate::execute) by mutable reference.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub display: Display,
    pub draw_flag: bool,
    pub pressed_keys: [bool; 16],
    pub register_needing_key: Option<u8>,
}

impl State {
    pub fn new() -> Self {
        // 0x000 - 0x050 holds the sprite sheet
        let mut memory = [0; MEMORY_SIZE];
        memory[0..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            display: [0; DISPLAY_LENGTH],
            draw_flag: false,
            pressed_keys: [false; 16],
            register_needing_key: None,
        }
    }

    /// The range `start..start + len` of memory, if all of it exists.
    /// An empty span never fails; it sits at `start` or the end of memory.
    pub fn memory_span(&self, start: u16, len: usize) -> Result<Range<usize>, Error> {
        let start = usize::from(start);
        if len == 0 {
            let start = start.min(MEMORY_SIZE);
            return Ok(start..start);
        }
        let end = start + len;
        if end > MEMORY_SIZE {
            return Err(Error::MemoryOutOfBounds {
                address: end - 1,
            });
        }
        Ok(start..end)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
