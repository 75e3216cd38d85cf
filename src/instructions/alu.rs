//! # ALU Instructions
//!
//! Arithmetic, logic, bit test, and compare operations. The add and
//! subtract cores are shared with the undocumented read-modify-write
//! combos (RRA, ISC, USBC), and the compare core with DCP and SBX.
//!
//! Decimal mode follows the NMOS part: the nibble fix-ups run after the
//! binary sum/difference, with Z taken from the binary result and carry
//! from the adjusted one.

use crate::status::Status;
use crate::{SystemBus, CPU};

/// ADC: add memory and carry to the accumulator. Updates N, V, Z, C.
pub(crate) fn adc<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    let m = cpu.bus.read(addr);
    add_with_carry(cpu, m);
}

/// SBC: subtract memory and borrow from the accumulator. Updates N, V,
/// Z, C.
pub(crate) fn sbc<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    let m = cpu.bus.read(addr);
    sub_with_borrow(cpu, m);
}

/// Shared ADC core: A + M + C, binary or BCD per the D flag.
pub(crate) fn add_with_carry<B: SystemBus>(cpu: &mut CPU<B>, m: u8) {
    let a = cpu.a;
    let carry_in = cpu.p.carry() as u32;
    let mut tmp = a as u32 + m as u32 + carry_in;

    // Z reflects the binary sum even in decimal mode.
    cpu.p.set_zero(tmp & 0xFF == 0);

    if cpu.p.decimal() {
        if (a & 0x0F) as u32 + (m & 0x0F) as u32 + carry_in > 9 {
            tmp += 6;
        }
        cpu.p.set_negative(tmp & 0x80 != 0);
        cpu.p
            .set_overflow((a ^ m) & 0x80 == 0 && (a as u32 ^ tmp) & 0x80 != 0);
        if tmp > 0x99 {
            tmp += 96;
        }
        cpu.p.set_carry(tmp > 0x99);
    } else {
        cpu.p.set_negative(tmp & 0x80 != 0);
        cpu.p
            .set_overflow((a ^ m) & 0x80 == 0 && (a as u32 ^ tmp) & 0x80 != 0);
        cpu.p.set_carry(tmp > 0xFF);
    }

    cpu.a = tmp as u8;
}

/// Shared SBC core: A - M - (1 - C), binary or BCD per the D flag.
///
/// N, V, and Z come from the binary difference; the nibble fix-ups only
/// adjust the stored result and the carry.
pub(crate) fn sub_with_borrow<B: SystemBus>(cpu: &mut CPU<B>, m: u8) {
    let a = cpu.a;
    let borrow = !cpu.p.carry() as u32;
    let mut tmp = (a as u32).wrapping_sub(m as u32).wrapping_sub(borrow);

    cpu.p.set_negative(tmp & 0x80 != 0);
    cpu.p.set_zero(tmp & 0xFF == 0);
    cpu.p
        .set_overflow((a as u32 ^ tmp) & 0x80 != 0 && (a ^ m) & 0x80 != 0);

    if cpu.p.decimal() {
        if ((a & 0x0F) as i16 - borrow as i16) < (m & 0x0F) as i16 {
            tmp = tmp.wrapping_sub(6);
        }
        if tmp > 0x99 {
            tmp = tmp.wrapping_sub(0x60);
        }
    }

    cpu.p.set_carry(tmp < 0x100);
    cpu.a = tmp as u8;
}

/// AND: bitwise AND into the accumulator. Updates N, Z.
pub(crate) fn and<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    let result = cpu.a & cpu.bus.read(addr);
    cpu.p.set_nz(result);
    cpu.a = result;
}

/// EOR: bitwise exclusive OR into the accumulator. Updates N, Z.
pub(crate) fn eor<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    let result = cpu.a ^ cpu.bus.read(addr);
    cpu.p.set_nz(result);
    cpu.a = result;
}

/// ORA: bitwise OR into the accumulator. Updates N, Z.
pub(crate) fn ora<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    let result = cpu.a | cpu.bus.read(addr);
    cpu.p.set_nz(result);
    cpu.a = result;
}

/// BIT: test accumulator against memory without changing either.
///
/// Z from A & M; N and V copied straight from bits 7 and 6 of the
/// operand.
pub(crate) fn bit<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    let m = cpu.bus.read(addr);
    cpu.p.set_zero(cpu.a & m == 0);
    cpu.p.set_negative(m & Status::NEGATIVE != 0);
    cpu.p.set_overflow(m & Status::OVERFLOW != 0);
}

/// CMP: compare accumulator with memory. Updates N, Z, C; A unchanged.
pub(crate) fn cmp<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    let m = cpu.bus.read(addr);
    let reg = cpu.a;
    compare(cpu, reg, m);
}

/// CPX: compare X with memory.
pub(crate) fn cpx<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    let m = cpu.bus.read(addr);
    let reg = cpu.x;
    compare(cpu, reg, m);
}

/// CPY: compare Y with memory.
pub(crate) fn cpy<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    let m = cpu.bus.read(addr);
    let reg = cpu.y;
    compare(cpu, reg, m);
}

/// Shared compare core: reg - M as a 9-bit quantity. C = no borrow, N and
/// Z from the low byte.
pub(crate) fn compare<B: SystemBus>(cpu: &mut CPU<B>, reg: u8, m: u8) {
    let result = reg.wrapping_sub(m);
    cpu.p.set_carry(reg >= m);
    cpu.p.set_nz(result);
}
