use thiserror::Error;

/// Everything that can stop an instruction or the driver from making progress.
///
/// Instructions fail before they touch the state, so a caller can inspect the
/// machine exactly as it was when the offending opcode was fetched.
#[derive(Error, Debug)]
pub enum Error {
    /// `0NNN` would jump into native code on the original hardware
    #[error("opcode {0:#06X} calls machine code, which is not emulated")]
    UnsupportedInstruction(u16),

    #[error("opcode {0:#06X} is not a Chip-8 instruction")]
    UnmappedInstruction(u16),

    #[error("stack overflow calling from pc {pc:#06X}")]
    StackOverflow { pc: u16 },

    #[error("stack underflow returning from pc {pc:#06X}")]
    StackUnderflow { pc: u16 },

    #[error("memory access out of bounds at {address:#06X}")]
    MemoryOutOfBounds { address: usize },

    #[error("rom is {size} bytes but only {max} fit in memory")]
    RomTooLarge { size: usize, max: usize },

    #[error("failed to read rom")]
    Io(#[from] std::io::Error),
}
