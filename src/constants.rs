/// Bytes of addressable memory.
pub const MEMORY_SIZE: usize = 4096;

/// Where ROMs are loaded and execution begins.
pub const PROGRAM_START: u16 = 0x200;

/// Return addresses the call stack can hold.
/// Conflicting sources cite anywhere from 12 to 16 levels; we use 16.
pub const STACK_SIZE: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// The display buffer is flat and row-major, indexed as `y * DISPLAY_WIDTH + x`.
pub const DISPLAY_LENGTH: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// Nanoseconds per CPU cycle (500Hz).
pub const CLOCK_SPEED: u64 = 2_000_000;

/// Rate at which the delay and sound timers count down.
pub const TIMER_HZ: u64 = 60;

/// How many past states are kept around for rewinding.
pub const MAX_SAVED_STATES: usize = 600;

/// Bytes per glyph in the sprite sheet.
pub const SPRITE_HEIGHT: u16 = 5;

/// # Sprite Sheet
/// The hexadecimal digits 0..F, each 8 pixels wide and 5 tall.
/// They're stored at the very start of memory so glyph `n` lives at `n * 5`.
///
/// ```text
/// 0       1       2       ..
/// ****    ..*.    ****
/// *..*    .**.    ...*
/// *..*    ..*.    ****
/// *..*    ..*.    *...
/// ****    .***    ****
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
