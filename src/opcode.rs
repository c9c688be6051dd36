/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each. Their behavior is cased on some combination of:
/// - `(n, _, _, _)` broad categorization; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within a category
/// - `(_, _, n, n)` more specific behavior within a category
/// - `(_, n, n, n)` some fixed function that doesn't require variables (e.g. CLS; clear screen)
///
/// Nibbles not used to determine the operation often (but not always) carry important data.
/// - `(_, n, n, n)` represent a 12-bit address
/// - `(_, _, n, n)` encodes some data that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` refers either to the register Vx or a range of registers V0..Vx
/// - `(_, _, n, _)` refers to the the register Vy
///
/// Every accessor is total; any 16-bit value is a valid opcode to slice up.
pub trait Opcode {
    /// Returns the Opcode's component nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// The Opcode masked down to its lowest `n` nibbles.
    /// `n = 0` yields 0 and anything from 4 up yields the whole Opcode.
    fn last_n_quadbits(&self, n: u8) -> u16;

    /// The Opcode's second nibble, the Vx register index.
    /// `[_x__]`
    fn x(&self) -> u8;

    /// The Opcode's third nibble, the Vy register index.
    /// `[__y_]`
    fn y(&self) -> u8;

    /// The Opcode's fourth nibble.
    /// `[___n]`
    fn n(&self) -> u8;

    /// The Opcode's least significant byte.
    /// `[__kk]`
    fn kk(&self) -> u8;

    /// The Opcode without its most significant nibble.
    /// `[_adr]`
    fn addr(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        ((self >> 12) as u8, self.x(), self.y(), self.n())
    }

    fn last_n_quadbits(&self, n: u8) -> u16 {
        match n {
            0 => 0x0000,
            1..=3 => self & ((1u16 << (4 * n)) - 1),
            _ => *self,
        }
    }

    fn x(&self) -> u8 {
        ((self & 0x0F00) >> 8) as u8
    }

    fn y(&self) -> u8 {
        ((self & 0x00F0) >> 4) as u8
    }

    fn n(&self) -> u8 {
        self.last_n_quadbits(1) as u8
    }

    fn kk(&self) -> u8 {
        self.last_n_quadbits(2) as u8
    }

    fn addr(&self) -> u16 {
        self.last_n_quadbits(3)
    }
}
