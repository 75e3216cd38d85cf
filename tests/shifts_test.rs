//! Tests for ASL, LSR, ROL, and ROR in accumulator and memory forms.

use core6502::{CPU, FlatMemory, SystemBus};

/// Helper to create a CPU with the reset vector at 0x8000.
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFC, 0x8000);
    CPU::new(memory)
}

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().write(0x8000, 0x0A); // ASL A
    cpu.set_a(0x81);

    cpu.step();

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c()); // bit 7 shifted out
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_asl_memory() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().load(0x8000, &[0x06, 0x42]); // ASL $42
    cpu.bus_mut().write(0x0042, 0x40);

    cpu.step();

    assert_eq!(cpu.bus().read(0x0042), 0x80);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_lsr_accumulator_clears_n() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().write(0x8000, 0x4A); // LSR A
    cpu.set_a(0x01);
    cpu.set_flag_n(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c()); // bit 0 shifted out
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_rol_injects_carry() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().write(0x8000, 0x2A); // ROL A
    cpu.set_a(0x80);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c()); // old bit 7
}

#[test]
fn test_ror_injects_carry_into_bit7() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().write(0x8000, 0x6A); // ROR A
    cpu.set_a(0x01);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_c()); // old bit 0
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_memory_absolute_x() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().load(0x8000, &[0x7E, 0x00, 0x30]); // ROR $3000,X
    cpu.bus_mut().write(0x3004, 0x02);
    cpu.set_x(0x04);

    cpu.step();

    assert_eq!(cpu.bus().read(0x3004), 0x01);
    assert!(!cpu.flag_c());
    assert_eq!(cpu.cycles(), 7); // fixed cost, no conditional penalty
}

#[test]
fn test_rol_ror_round_trip() {
    let mut cpu = setup_cpu();

    cpu.bus_mut().load(0x8000, &[0x2A, 0x6A]); // ROL A / ROR A
    cpu.set_a(0xA5);
    cpu.set_flag_c(false);

    cpu.step();
    cpu.step();

    assert_eq!(cpu.a(), 0xA5);
    assert!(!cpu.flag_c());
}
