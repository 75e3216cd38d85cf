//! # Load and Store Instructions
//!
//! Loads copy memory into a register and set N/Z; stores copy a register
//! to memory and touch no flags.

use crate::{SystemBus, CPU};

/// LDA: load accumulator.
pub(crate) fn lda<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    let m = cpu.bus.read(addr);
    cpu.p.set_nz(m);
    cpu.a = m;
}

/// LDX: load X.
pub(crate) fn ldx<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    let m = cpu.bus.read(addr);
    cpu.p.set_nz(m);
    cpu.x = m;
}

/// LDY: load Y.
pub(crate) fn ldy<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    let m = cpu.bus.read(addr);
    cpu.p.set_nz(m);
    cpu.y = m;
}

/// STA: store accumulator.
pub(crate) fn sta<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    cpu.bus.write(addr, cpu.a);
}

/// STX: store X.
pub(crate) fn stx<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    cpu.bus.write(addr, cpu.x);
}

/// STY: store Y.
pub(crate) fn sty<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    cpu.bus.write(addr, cpu.y);
}
