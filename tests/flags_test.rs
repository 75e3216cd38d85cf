//! Tests for the flag set/clear instructions.

use core6502::{CPU, FlatMemory, SystemBus};

/// Helper to create a CPU with the reset vector at 0x8000.
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFC, 0x8000);
    CPU::new(memory)
}

#[test]
fn test_sec_clc() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x38, 0x18]);

    cpu.step();
    assert!(cpu.flag_c());

    cpu.step();
    assert!(!cpu.flag_c());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_sed_cld() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0xF8, 0xD8]);

    cpu.step();
    assert!(cpu.flag_d());

    cpu.step();
    assert!(!cpu.flag_d());
}

#[test]
fn test_sei_cli() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().load(0x8000, &[0x78, 0x58]);

    cpu.step();
    assert!(cpu.flag_i());

    cpu.step();
    assert!(!cpu.flag_i());
}

#[test]
fn test_clv() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x8000, 0xB8);
    cpu.set_flag_v(true);

    cpu.step();

    assert!(!cpu.flag_v());
}

#[test]
fn test_flag_ops_touch_only_their_bit() {
    let mut cpu = setup_cpu();
    cpu.bus_mut().write(0x8000, 0x38); // SEC
    cpu.set_flag_n(true);
    cpu.set_flag_z(true);

    cpu.step();

    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
    assert!(cpu.flag_z());
}
