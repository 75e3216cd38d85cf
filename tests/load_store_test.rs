//! Tests for the load and store instructions across their addressing
//! modes.

use core6502::{CPU, FlatMemory, SystemBus};

/// Helper to create a CPU with the reset vector at 0x8000.
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFC, 0x8000);
    CPU::new(memory)
}

// ========== Loads ==========

#[test]
fn test_lda_immediate_sets_a_and_flags() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().load(0x8000, &[0xA9, 0x42]);
    cpu.step();

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_lda_zero_sets_z_clears_n() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().load(0x8000, &[0xA9, 0x00]);
    cpu.set_flag_n(true);
    cpu.step();

    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lda_negative_sets_n_clears_z() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().load(0x8000, &[0xA9, 0x80]);
    cpu.set_flag_z(true);
    cpu.step();

    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_zero_page_x_wraps() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().load(0x8000, &[0xB5, 0xF0]); // LDA $F0,X
    cpu.bus_mut().write(0x0010, 0x99); // ($F0 + $20) & $FF = $10
    cpu.set_x(0x20);

    cpu.step();

    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_indirect_x_pointer_wraps_in_zero_page() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().load(0x8000, &[0xA1, 0xFE]); // LDA ($FE,X)
    cpu.set_x(0x01);
    // Pointer at $FF, high byte from $00: never from $0100.
    cpu.bus_mut().write(0x00FF, 0x00);
    cpu.bus_mut().write(0x0000, 0x40);
    cpu.bus_mut().write(0x4000, 0x77);

    cpu.step();

    assert_eq!(cpu.a(), 0x77);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_lda_indirect_y_page_cross() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().load(0x8000, &[0xB1, 0x40]); // LDA ($40),Y
    cpu.bus_mut().write(0x0040, 0xFF);
    cpu.bus_mut().write(0x0041, 0x30); // pointer -> $30FF
    cpu.bus_mut().write(0x3100, 0x55);
    cpu.set_y(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x55);
    assert_eq!(cpu.cycles(), 6); // 5 base + 1 page cross
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().load(0x8000, &[0xB6, 0x20]); // LDX $20,Y
    cpu.bus_mut().write(0x0025, 0x13);
    cpu.set_y(0x05);

    cpu.step();

    assert_eq!(cpu.x(), 0x13);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_ldy_absolute_x_page_cross() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().load(0x8000, &[0xBC, 0xFF, 0x20]); // LDY $20FF,X
    cpu.bus_mut().write(0x2100, 0x21);
    cpu.set_x(0x01);

    cpu.step();

    assert_eq!(cpu.y(), 0x21);
    assert_eq!(cpu.cycles(), 5);
}

// ========== Stores ==========

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().load(0x8000, &[0x85, 0x42]);
    cpu.set_a(0x37);

    cpu.step();

    assert_eq!(cpu.bus().read(0x0042), 0x37);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_sta_absolute_x_always_five_cycles() {
    let mut cpu = setup_cpu();

    // No page cross, but indexed stores pay the fixed extra cycle.
    cpu.bus_mut().load(0x8000, &[0x9D, 0x00, 0x20]); // STA $2000,X
    cpu.set_a(0x11);
    cpu.set_x(0x05);

    cpu.step();

    assert_eq!(cpu.bus().read(0x2005), 0x11);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_sta_indirect_y_always_six_cycles() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().load(0x8000, &[0x91, 0x40]); // STA ($40),Y
    cpu.bus_mut().write_word(0x0040, 0x3000);
    cpu.set_a(0x22);
    cpu.set_y(0x04);

    cpu.step();

    assert_eq!(cpu.bus().read(0x3004), 0x22);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_stores_do_not_touch_flags() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().load(0x8000, &[0x85, 0x10, 0x86, 0x11, 0x84, 0x12]);
    cpu.set_a(0x00);
    cpu.set_x(0x80);
    cpu.set_y(0xFF);
    let before = cpu.status();

    cpu.step();
    cpu.step();
    cpu.step();

    assert_eq!(cpu.status(), before);
    assert_eq!(cpu.bus().read(0x0010), 0x00);
    assert_eq!(cpu.bus().read(0x0011), 0x80);
    assert_eq!(cpu.bus().read(0x0012), 0xFF);
}
