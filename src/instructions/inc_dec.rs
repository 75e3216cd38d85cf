//! # Increment and Decrement Instructions
//!
//! Memory and index-register ±1 with 8-bit wrap. All update N and Z.

use crate::{SystemBus, CPU};

/// INC: increment memory.
pub(crate) fn inc<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    let result = cpu.bus.read(addr).wrapping_add(1);
    cpu.p.set_nz(result);
    cpu.bus.write(addr, result);
}

/// DEC: decrement memory.
pub(crate) fn dec<B: SystemBus>(cpu: &mut CPU<B>, addr: u16) {
    let result = cpu.bus.read(addr).wrapping_sub(1);
    cpu.p.set_nz(result);
    cpu.bus.write(addr, result);
}

/// INX: increment X.
pub(crate) fn inx<B: SystemBus>(cpu: &mut CPU<B>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.set_nz(cpu.x);
}

/// INY: increment Y.
pub(crate) fn iny<B: SystemBus>(cpu: &mut CPU<B>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.set_nz(cpu.y);
}

/// DEX: decrement X.
pub(crate) fn dex<B: SystemBus>(cpu: &mut CPU<B>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.set_nz(cpu.x);
}

/// DEY: decrement Y.
pub(crate) fn dey<B: SystemBus>(cpu: &mut CPU<B>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.set_nz(cpu.y);
}
