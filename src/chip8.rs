use std::collections::VecDeque;
use std::io::Read;

use log::{debug, trace, warn};

use crate::constants::{MAX_SAVED_STATES, MEMORY_SIZE, PROGRAM_START};
use crate::error::Error;
use crate::instruction::execute;
use crate::state::{Display, State};

const RETURN: u16 = 0x00EE;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - `previous_states` for rewinding
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing and reversing the CPU
/// - advancing its timers
/// - inspecting its display for rendering by some frontend
pub struct Chip8 {
    state: State,
    previous_states: VecDeque<State>,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
            previous_states: VecDeque::with_capacity(MAX_SAVED_STATES),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Load a rom into memory at the start of program space
    ///
    /// # Arguments
    /// * `reader` a reader that contains a ROM
    ///
    /// Returns the size of the ROM in bytes.
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<usize, Error> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;

        let max = MEMORY_SIZE - PROGRAM_START as usize;
        if rom.len() > max {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max,
            });
        }

        let start = PROGRAM_START as usize;
        self.state.memory[start..start + rom.len()].copy_from_slice(&rom);
        debug!("loaded {} byte rom at {:#06X}", rom.len(), start);
        Ok(rom.len())
    }

    /// Returns the display if it should be redrawn
    pub fn frame(&self) -> Option<&Display> {
        if self.state.draw_flag {
            Some(&self.state.display)
        } else {
            None
        }
    }

    /// Marks the current frame as rendered
    pub fn clear_draw_flag(&mut self) {
        self.state.draw_flag = false;
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        if key > 0xF {
            warn!("ignoring press of unknown key {:#X}", key);
            return;
        }
        self.state.pressed_keys[key as usize] = true;
        if let Some(register) = self.state.register_needing_key.take() {
            if register > 0xF {
                warn!("dropping key {:#X} meant for unknown register {:#X}", key, register);
                return;
            }
            self.state.v[register as usize] = key;
        }
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 4-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        if key > 0xF {
            warn!("ignoring release of unknown key {:#X}", key);
            return;
        }
        self.state.pressed_keys[key as usize] = false;
    }

    /// Advances the CPU by a single cycle
    /// - does nothing while awaiting a keypress
    /// - gets and executes the next opcode
    ///
    /// A failed instruction leaves the state as it was before the cycle.
    pub fn step(&mut self) -> Result<(), Error> {
        if self.state.register_needing_key.is_some() {
            return Ok(());
        }

        let op = self.get_op()?;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X} sp{}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc,
            self.state.sp
        );

        let previous = self.state.clone();
        execute(op, &mut self.state)?;
        if op == RETURN {
            // Returns land on the call that saved the address; resume after it
            self.state.pc = self.state.pc.wrapping_add(0x2);
        }
        self.save_state(previous);
        Ok(())
    }

    /// Reverses the CPU by a single cycle if possible
    /// - if there are previous_states, pops the last one and restores it
    pub fn rewind(&mut self) {
        if let Some(state) = self.previous_states.pop_front() {
            self.state = state;
            self.state.draw_flag = true;
        }
    }

    /// Puts a state in previous_states
    /// - if there are already MAX_SAVED_STATES saved then the oldest is dropped
    fn save_state(&mut self, state: State) {
        if self.previous_states.len() == MAX_SAVED_STATES {
            self.previous_states.pop_back();
        }
        self.previous_states.push_front(state);
    }

    /// Counts both timers down toward 0; call at 60Hz
    pub fn tick_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Whether the buzzer should be sounding
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> Result<u16, Error> {
        let span = self.state.memory_span(self.state.pc, 2)?;
        let bytes = &self.state.memory[span];
        Ok(u16::from(bytes[0]) << 8 | u16::from(bytes[1]))
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
