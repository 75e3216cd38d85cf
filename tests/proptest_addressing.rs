//! Property-based tests for addressing-mode evaluation: zero-page index
//! wrap, page-cross cycle penalties, and the indirect-JMP pointer bug.

use core6502::{CpuOptions, CPU, FlatMemory, SystemBus};
use proptest::prelude::*;

/// Helper to create a CPU with the reset vector at 0x8000.
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFC, 0x8000);
    CPU::new(memory)
}

proptest! {
    /// Zero page,X wraps within page zero for any base and index.
    #[test]
    fn prop_zero_page_x_wraps(base in any::<u8>(), x in any::<u8>()) {
        let mut cpu = setup_cpu();
        let effective = base.wrapping_add(x) as u16;

        cpu.bus_mut().load(0x8000, &[0xB5, base]); // LDA base,X
        cpu.bus_mut().write(effective, 0x5A);
        cpu.set_x(x);

        cpu.step();

        prop_assert_eq!(cpu.a(), 0x5A);
        prop_assert_eq!(cpu.cycles(), 4);
    }

    /// Absolute,X costs 4 cycles, or 5 exactly when the sum crosses a
    /// page.
    #[test]
    fn prop_absolute_x_page_cross_penalty(
        lo in any::<u8>(),
        hi in 0x10u8..=0x7E,
        x in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        let base = (hi as u16) << 8 | lo as u16;
        let effective = base.wrapping_add(x as u16);
        let crossed = (base ^ effective) & 0xFF00 != 0;

        cpu.bus_mut().load(0x8000, &[0xBD, lo, hi]); // LDA base,X
        cpu.bus_mut().write(effective, 0x77);
        cpu.set_x(x);

        cpu.step();

        prop_assert_eq!(cpu.a(), 0x77);
        prop_assert_eq!(cpu.cycles(), if crossed { 5 } else { 4 });
    }

    /// (zp),Y costs 5 cycles, or 6 exactly when adding Y crosses a page.
    #[test]
    fn prop_indirect_y_page_cross_penalty(
        ptr_lo in any::<u8>(),
        ptr_hi in 0x10u8..=0x7E,
        y in any::<u8>(),
        zp in 0x02u8..=0xFE,
    ) {
        let mut cpu = setup_cpu();
        let base = (ptr_hi as u16) << 8 | ptr_lo as u16;
        let effective = base.wrapping_add(y as u16);
        let crossed = (base ^ effective) & 0xFF00 != 0;

        cpu.bus_mut().load(0x8000, &[0xB1, zp]); // LDA (zp),Y
        cpu.bus_mut().write(zp as u16, ptr_lo);
        cpu.bus_mut().write(zp as u16 + 1, ptr_hi);
        cpu.bus_mut().write(effective, 0x33);
        cpu.set_y(y);

        cpu.step();

        prop_assert_eq!(cpu.a(), 0x33);
        prop_assert_eq!(cpu.cycles(), if crossed { 6 } else { 5 });
    }

    /// A zero-page pointer at $FF fetches its high byte from $00, never
    /// from page 1.
    #[test]
    fn prop_indirect_x_pointer_wraps(x in any::<u8>()) {
        let mut cpu = setup_cpu();
        let operand = 0xFFu8.wrapping_sub(x); // lands the pointer at $FF

        cpu.bus_mut().load(0x8000, &[0xA1, operand]); // LDA (operand,X)
        cpu.bus_mut().write(0x00FF, 0x00);
        cpu.bus_mut().write(0x0000, 0x40);
        cpu.bus_mut().write(0x0100, 0x66); // the wrong high byte
        cpu.bus_mut().write(0x4000, 0x99);
        cpu.set_x(x);

        cpu.step();

        prop_assert_eq!(cpu.a(), 0x99);
    }

    /// Indirect JMP through a $xxFF pointer reads its high byte from
    /// $xx00 on NMOS, and from $xx+1:00 with the CMOS fix.
    #[test]
    fn prop_indirect_jmp_page_wrap(page in 0x01u8..=0x7E) {
        let ptr = (page as u16) << 8 | 0xFF;

        let mut memory = FlatMemory::new();
        memory.write_word(0xFFFC, 0x8000);
        memory.load(0x8000, &[0x6C, 0xFF, page]); // JMP (ptr)
        memory.write(ptr, 0x34);
        memory.write((page as u16) << 8, 0x12);
        memory.write((page as u16 + 1) << 8, 0x56);

        let mut cpu = CPU::new(memory);
        cpu.step();
        prop_assert_eq!(cpu.pc(), 0x1234);

        // Same layout with the CMOS fix selected.
        let mut memory = FlatMemory::new();
        memory.write_word(0xFFFC, 0x8000);
        memory.load(0x8000, &[0x6C, 0xFF, page]);
        memory.write(ptr, 0x34);
        memory.write((page as u16) << 8, 0x12);
        memory.write((page as u16 + 1) << 8, 0x56);

        let mut cpu = CPU::with_options(
            memory,
            CpuOptions {
                cmos_indirect_jmp: true,
                ..CpuOptions::default()
            },
        );
        cpu.step();
        prop_assert_eq!(cpu.pc(), 0x5634);
    }
}
