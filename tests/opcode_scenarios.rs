//! End-to-end checks of the opcode engine through the public API, one
//! scenario per instruction family.

use emu8::constants::DISPLAY_LENGTH;
use emu8::{decode, execute, Chip8, Error, Opcode, State};

#[test]
fn opcode_fields() {
    let command: u16 = 0x1234;
    assert_eq!(command.last_n_quadbits(0), 0x0000);
    assert_eq!(command.last_n_quadbits(2), 0x0034);
    assert_eq!(command.last_n_quadbits(4), 0x1234);
    assert_eq!(command.x(), 2);
    assert_eq!(command.y(), 3);
}

#[test]
fn call_machine_code_is_caught() {
    let mut state = State::new();
    let error = execute(0x0111, &mut state).unwrap_err();
    assert!(matches!(error, Error::UnsupportedInstruction(0x0111)));
    assert_eq!(error.to_string(), "opcode 0x0111 calls machine code, which is not emulated");
    assert_eq!(state.pc, 0x200);
}

#[test]
fn decode_rejects_before_running() {
    assert!(matches!(decode(0x0123), Err(Error::UnsupportedInstruction(0x0123))));
    assert!(matches!(decode(0xFFFF), Err(Error::UnmappedInstruction(0xFFFF))));
    assert!(decode(0x00E0).is_ok());
}

#[test]
fn clear_screen() {
    let mut state = State::new();
    state.display = [1; DISPLAY_LENGTH];
    execute(0x00E0, &mut state).unwrap();
    assert_eq!(state.display[..], [0; DISPLAY_LENGTH][..]);
}

#[test]
fn return_from_subroutine() {
    let mut state = State::new();
    state.stack[0] = 0x400;
    state.sp += 1;
    state.pc = 0x200;
    execute(0x00EE, &mut state).unwrap();
    assert_eq!(state.sp, 0);
    assert_eq!(state.pc, 0x400);
}

#[test]
fn jump_to_line() {
    let mut state = State::new();
    execute(0x1345, &mut state).unwrap();
    assert_eq!(state.pc, 0x345);
}

#[test]
fn call_subroutine() {
    let mut state = State::new();
    state.pc = 0x200;
    execute(0x2400, &mut state).unwrap();
    assert_eq!(state.pc, 0x400);
    assert_eq!(state.sp, 1);
    assert_eq!(state.stack[0], 0x200);
}

#[test]
fn skip_if_register_equal_to_constant() {
    let mut state = State::new();
    state.v[0] = 0x12;
    execute(0x3012, &mut state).unwrap();
    assert_eq!(state.pc, 0x204);

    let mut state = State::new();
    state.v[0] = 0x12;
    execute(0x3010, &mut state).unwrap();
    assert_eq!(state.pc, 0x202);
}

#[test]
fn skip_on_boundary_values() {
    for &value in &[0x00u8, 0xFF] {
        let mut state = State::new();
        state.v[0x5] = value;
        execute(0x3500 | u16::from(value), &mut state).unwrap();
        assert_eq!(state.pc, 0x204);

        let mut state = State::new();
        state.v[0x5] = value;
        execute(0x4500 | u16::from(!value), &mut state).unwrap();
        assert_eq!(state.pc, 0x204);
    }
}

#[test]
fn xor_registers() {
    let mut state = State::new();
    state.v[0] = 0x10;
    state.v[1] = 0x11;
    execute(0x8013, &mut state).unwrap();
    assert_eq!(state.v[0], 0x01);
}

#[test]
fn machines_are_independent() {
    let mut first = Chip8::new();
    let mut second = Chip8::new();
    first.load_rom(&mut &[0x60u8, 0xAA][..]).unwrap();
    second.load_rom(&mut &[0x61u8, 0xBB][..]).unwrap();
    first.step().unwrap();
    second.step().unwrap();
    assert_eq!(first.state().v[0x0], 0xAA);
    assert_eq!(first.state().v[0x1], 0x00);
    assert_eq!(second.state().v[0x0], 0x00);
    assert_eq!(second.state().v[0x1], 0xBB);
}

#[test]
fn runs_a_program_that_draws_digits() {
    // v0 = 7; i = glyph(v0); draw it at (v1, v1); loop forever
    let program: [u8; 8] = [0x60, 0x07, 0xF0, 0x29, 0xD1, 0x15, 0x12, 0x06];
    let mut chip8 = Chip8::new();
    chip8.load_rom(&mut &program[..]).unwrap();
    for _ in 0..4 {
        chip8.step().unwrap();
    }
    let frame = chip8.frame().expect("a draw should flag a frame");
    // top row of 7 is 0xF0
    assert_eq!(frame[0..5], [1, 1, 1, 1, 0]);
    assert_eq!(chip8.state().pc, 0x206);
    assert_eq!(chip8.state().v[0xF], 0);
}
