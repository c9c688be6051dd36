use crate::constants::{DISPLAY_HEIGHT, DISPLAY_LENGTH, DISPLAY_WIDTH, SPRITE_HEIGHT, STACK_SIZE};
use crate::error::Error;
use crate::opcode::Opcode;
use crate::state::State;

/// Moves past the current instruction, or past the next one as well if `skip`.
fn advance(state: &mut State, skip: bool) {
    state.pc = state.pc.wrapping_add(if skip { 0x4 } else { 0x2 });
}

/// Vx op= value; VF = flag
/// VF is written last so it wins when x is F.
fn set_with_flag(op: u16, state: &mut State, value: u8, flag: bool) {
    state.v[op.x() as usize] = value;
    state.v[0xF] = flag as u8;
    advance(state, false);
}

/// clear
pub fn clr(_op: u16, state: &mut State) -> Result<(), Error> {
    state.display = [0; DISPLAY_LENGTH];
    state.draw_flag = true;
    advance(state, false);
    Ok(())
}

/// PC = STACK.pop()
/// Lands on the address the call saved; it is not bumped past it.
pub fn rts(_op: u16, state: &mut State) -> Result<(), Error> {
    if state.sp == 0 {
        return Err(Error::StackUnderflow { pc: state.pc });
    }
    if state.sp as usize > STACK_SIZE {
        return Err(Error::StackOverflow { pc: state.pc });
    }
    state.sp -= 1;
    state.pc = state.stack[state.sp as usize];
    Ok(())
}

/// PC = addr
pub fn jump(op: u16, state: &mut State) -> Result<(), Error> {
    state.pc = op.addr();
    Ok(())
}

/// STACK.push(PC); PC = addr
pub fn call(op: u16, state: &mut State) -> Result<(), Error> {
    if state.sp as usize >= STACK_SIZE {
        return Err(Error::StackOverflow { pc: state.pc });
    }
    state.stack[state.sp as usize] = state.pc;
    state.sp += 1;
    state.pc = op.addr();
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(op: u16, state: &mut State) -> Result<(), Error> {
    let skip = state.v[op.x() as usize] == op.kk();
    advance(state, skip);
    Ok(())
}

/// if Vx != kk then pc += 2
pub fn skne(op: u16, state: &mut State) -> Result<(), Error> {
    let skip = state.v[op.x() as usize] != op.kk();
    advance(state, skip);
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn skre(op: u16, state: &mut State) -> Result<(), Error> {
    let skip = state.v[op.x() as usize] == state.v[op.y() as usize];
    advance(state, skip);
    Ok(())
}

/// Vx = kk
pub fn load(op: u16, state: &mut State) -> Result<(), Error> {
    state.v[op.x() as usize] = op.kk();
    advance(state, false);
    Ok(())
}

/// Vx += kk
/// Overflow wraps and VF is left alone
pub fn add(op: u16, state: &mut State) -> Result<(), Error> {
    let x = op.x() as usize;
    state.v[x] = state.v[x].wrapping_add(op.kk());
    advance(state, false);
    Ok(())
}

/// Vx = Vy
pub fn mv(op: u16, state: &mut State) -> Result<(), Error> {
    state.v[op.x() as usize] = state.v[op.y() as usize];
    advance(state, false);
    Ok(())
}

/// Vx |= Vy
pub fn or(op: u16, state: &mut State) -> Result<(), Error> {
    state.v[op.x() as usize] |= state.v[op.y() as usize];
    advance(state, false);
    Ok(())
}

/// Vx &= Vy
pub fn and(op: u16, state: &mut State) -> Result<(), Error> {
    state.v[op.x() as usize] &= state.v[op.y() as usize];
    advance(state, false);
    Ok(())
}

/// Vx ^= Vy
pub fn xor(op: u16, state: &mut State) -> Result<(), Error> {
    state.v[op.x() as usize] ^= state.v[op.y() as usize];
    advance(state, false);
    Ok(())
}

/// Vx += Vy; VF = overflow
pub fn addr(op: u16, state: &mut State) -> Result<(), Error> {
    let (res, over) = state.v[op.x() as usize].overflowing_add(state.v[op.y() as usize]);
    set_with_flag(op, state, res, over);
    Ok(())
}

/// Vx -= Vy; VF = !underflow
pub fn sub(op: u16, state: &mut State) -> Result<(), Error> {
    let (res, under) = state.v[op.x() as usize].overflowing_sub(state.v[op.y() as usize]);
    set_with_flag(op, state, res, !under);
    Ok(())
}

/// Vx >>= 1; VF = lost bit
pub fn shr(op: u16, state: &mut State) -> Result<(), Error> {
    let vx = state.v[op.x() as usize];
    set_with_flag(op, state, vx >> 1, vx & 0x1 == 0x1);
    Ok(())
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(op: u16, state: &mut State) -> Result<(), Error> {
    let (res, under) = state.v[op.y() as usize].overflowing_sub(state.v[op.x() as usize]);
    set_with_flag(op, state, res, !under);
    Ok(())
}

/// Vx <<= 1; VF = lost bit
pub fn shl(op: u16, state: &mut State) -> Result<(), Error> {
    let vx = state.v[op.x() as usize];
    set_with_flag(op, state, vx << 1, vx & 0x80 == 0x80);
    Ok(())
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: u16, state: &mut State) -> Result<(), Error> {
    let skip = state.v[op.x() as usize] != state.v[op.y() as usize];
    advance(state, skip);
    Ok(())
}

/// I = addr
pub fn loadi(op: u16, state: &mut State) -> Result<(), Error> {
    state.i = op.addr();
    advance(state, false);
    Ok(())
}

/// PC = V0 + addr
pub fn jumpi(op: u16, state: &mut State) -> Result<(), Error> {
    state.pc = u16::from(state.v[0x0]) + op.addr();
    Ok(())
}

/// Vx = rand_byte & kk
pub fn rand(op: u16, state: &mut State) -> Result<(), Error> {
    let rand_byte: u8 = rand::random();
    state.v[op.x() as usize] = rand_byte & op.kk();
    advance(state, false);
    Ok(())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the display with wrapping.
/// Sets VF if any pixels were erased
pub fn draw(op: u16, state: &mut State) -> Result<(), Error> {
    let sprite = state.memory_span(state.i, op.n() as usize)?;
    let origin_x = state.v[op.x() as usize] as usize;
    let origin_y = state.v[op.y() as usize] as usize;

    let mut collision = 0x0;
    for (row, address) in sprite.enumerate() {
        let sprite_byte = state.memory[address];
        let y = (origin_y + row) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            let x = (origin_x + bit) % DISPLAY_WIDTH;
            let pixel_value = (sprite_byte >> (7 - bit)) & 0x1;
            let pixel = &mut state.display[y * DISPLAY_WIDTH + x];
            collision |= pixel_value & *pixel;
            *pixel ^= pixel_value;
        }
    }

    state.v[0xF] = collision;
    state.draw_flag = true;
    advance(state, false);
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: u16, state: &mut State) -> Result<(), Error> {
    let key = (state.v[op.x() as usize] & 0xF) as usize;
    let skip = state.pressed_keys[key];
    advance(state, skip);
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: u16, state: &mut State) -> Result<(), Error> {
    let key = (state.v[op.x() as usize] & 0xF) as usize;
    let skip = !state.pressed_keys[key];
    advance(state, skip);
    Ok(())
}

/// Vx = DT
pub fn moved(op: u16, state: &mut State) -> Result<(), Error> {
    state.v[op.x() as usize] = state.delay_timer;
    advance(state, false);
    Ok(())
}

/// await keypress for Vx
pub fn keyd(op: u16, state: &mut State) -> Result<(), Error> {
    state.register_needing_key = Some(op.x());
    advance(state, false);
    Ok(())
}

/// DT = Vx
pub fn loads(op: u16, state: &mut State) -> Result<(), Error> {
    state.delay_timer = state.v[op.x() as usize];
    advance(state, false);
    Ok(())
}

/// ST = Vx
pub fn ld(op: u16, state: &mut State) -> Result<(), Error> {
    state.sound_timer = state.v[op.x() as usize];
    advance(state, false);
    Ok(())
}

/// I += Vx
pub fn addi(op: u16, state: &mut State) -> Result<(), Error> {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x() as usize]));
    advance(state, false);
    Ok(())
}

/// I = Vx * 5
/// Set I to the memory address of the glyph for the low nibble of Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: u16, state: &mut State) -> Result<(), Error> {
    state.i = u16::from(state.v[op.x() as usize] & 0xF) * SPRITE_HEIGHT;
    advance(state, false);
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: u16, state: &mut State) -> Result<(), Error> {
    let span = state.memory_span(state.i, 3)?;
    let vx = state.v[op.x() as usize];
    state.memory[span].copy_from_slice(&[vx / 100 % 10, vx / 10 % 10, vx % 10]);
    advance(state, false);
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: u16, state: &mut State) -> Result<(), Error> {
    let count = op.x() as usize + 1;
    let span = state.memory_span(state.i, count)?;
    state.memory[span].copy_from_slice(&state.v[..count]);
    advance(state, false);
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: u16, state: &mut State) -> Result<(), Error> {
    let count = op.x() as usize + 1;
    let span = state.memory_span(state.i, count)?;
    state.v[..count].copy_from_slice(&state.memory[span]);
    advance(state, false);
    Ok(())
}
