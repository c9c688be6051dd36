//! Property-based tests for the opcode engine.
//!
//! These use proptest to check that instructions hold their invariants across
//! every register, immediate and address combination.

use emu8::constants::{DISPLAY_LENGTH, STACK_SIZE};
use emu8::{execute, Error, Opcode, State};
use proptest::prelude::*;

fn state_with(vx: u8, vy: u8) -> State {
    let mut state = State::new();
    state.v[0x1] = vx;
    state.v[0x2] = vy;
    state
}

proptest! {
    #[test]
    fn last_n_quadbits_keeps_low_nibbles(op: u16, n in 0u8..=4) {
        let mask = if n == 4 { 0xFFFF } else { (1u32 << (4 * n)) as u16 - 1 };
        prop_assert_eq!(op.last_n_quadbits(n), op & mask);
        prop_assert_eq!(op.last_n_quadbits(4), op);
    }

    #[test]
    fn x_and_y_only_see_their_nibble(op: u16, noise: u16) {
        prop_assert_eq!(op.x(), ((op >> 8) & 0xF) as u8);
        prop_assert_eq!(op.y(), ((op >> 4) & 0xF) as u8);
        prop_assert_eq!((op & 0x0F00 | noise & !0x0F00).x(), op.x());
        prop_assert_eq!((op & 0x00F0 | noise & !0x00F0).y(), op.y());
    }

    #[test]
    fn clear_screen_blanks_any_display(pixels in proptest::collection::vec(0u8..=1, DISPLAY_LENGTH)) {
        let mut state = State::new();
        state.display.copy_from_slice(&pixels);
        execute(0x00E0, &mut state).unwrap();
        prop_assert!(state.display.iter().all(|&p| p == 0));
        execute(0x00E0, &mut state).unwrap();
        prop_assert!(state.display.iter().all(|&p| p == 0));
    }

    #[test]
    fn jump_ignores_previous_pc(pc: u16, addr in 0u16..0x1000) {
        let mut state = State::new();
        state.pc = pc;
        execute(0x1000 | addr, &mut state).unwrap();
        prop_assert_eq!(state.pc, addr);
    }

    #[test]
    fn call_then_return_restores_pc_and_depth(
        pc in 0u16..0x1000,
        addr in 0u16..0x1000,
        depth in 0u8..STACK_SIZE as u8,
    ) {
        let mut state = State::new();
        state.pc = pc;
        state.sp = depth;

        execute(0x2000 | addr, &mut state).unwrap();
        prop_assert_eq!(state.pc, addr);
        prop_assert_eq!(state.sp, depth + 1);
        prop_assert_eq!(state.stack[depth as usize], pc);

        execute(0x00EE, &mut state).unwrap();
        prop_assert_eq!(state.pc, pc);
        prop_assert_eq!(state.sp, depth);
    }

    #[test]
    fn skips_advance_by_four_exactly_when_true(vx: u8, vy: u8, kk: u8) {
        let cases: [(u16, bool); 4] = [
            (0x3100 | u16::from(kk), vx == kk),
            (0x4100 | u16::from(kk), vx != kk),
            (0x5120, vx == vy),
            (0x9120, vx != vy),
        ];
        for &(op, skips) in cases.iter() {
            let mut state = state_with(vx, vy);
            execute(op, &mut state).unwrap();
            prop_assert_eq!(state.pc, if skips { 0x204 } else { 0x202 });
        }
    }

    #[test]
    fn bitwise_family_reads_vx_and_vy_only(vx: u8, vy: u8) {
        let cases: [(u16, u8); 4] = [
            (0x8120, vy),
            (0x8121, vx | vy),
            (0x8122, vx & vy),
            (0x8123, vx ^ vy),
        ];
        for &(op, expected) in cases.iter() {
            let mut state = state_with(vx, vy);
            execute(op, &mut state).unwrap();
            prop_assert_eq!(state.v[0x1], expected);
            prop_assert_eq!(state.v[0x2], vy);
            prop_assert_eq!(state.v[0xF], 0);
            prop_assert_eq!(state.pc, 0x202);
        }
    }

    #[test]
    fn arithmetic_matches_wide_reference(vx: u8, vy: u8) {
        let (wx, wy) = (i32::from(vx), i32::from(vy));
        let cases: [(u16, i32, u8); 3] = [
            (0x8124, wx + wy, (wx + wy > 0xFF) as u8),
            (0x8125, wx - wy, (wx >= wy) as u8),
            (0x8127, wy - wx, (wy >= wx) as u8),
        ];
        for &(op, wide, flag) in cases.iter() {
            let mut state = state_with(vx, vy);
            execute(op, &mut state).unwrap();
            prop_assert_eq!(state.v[0x1], (wide & 0xFF) as u8);
            prop_assert_eq!(state.v[0xF], flag);
        }
    }

    #[test]
    fn shifts_push_lost_bit_into_vf(vx: u8) {
        let mut state = state_with(vx, 0);
        execute(0x8106, &mut state).unwrap();
        prop_assert_eq!(state.v[0x1], vx >> 1);
        prop_assert_eq!(state.v[0xF], vx & 0x1);

        let mut state = state_with(vx, 0);
        execute(0x810E, &mut state).unwrap();
        prop_assert_eq!(state.v[0x1], vx << 1);
        prop_assert_eq!(state.v[0xF], vx >> 7);
    }

    #[test]
    fn failed_instructions_leave_state_untouched(op: u16, i: u16, sp in 0u8..=STACK_SIZE as u8) {
        let mut state = State::new();
        state.i = i;
        state.sp = sp;
        let before = state.clone();
        if let Err(error) = execute(op, &mut state) {
            let known = matches!(
                error,
                Error::UnsupportedInstruction(_)
                    | Error::UnmappedInstruction(_)
                    | Error::StackOverflow { .. }
                    | Error::StackUnderflow { .. }
                    | Error::MemoryOutOfBounds { .. }
            );
            prop_assert!(known, "unexpected error {:?}", error);
            prop_assert_eq!(state, before);
        }
    }
}
