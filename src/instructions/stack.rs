//! # Stack Instructions
//!
//! Push and pull of the accumulator and the status register. PHP pushes P
//! with the break bit set (the phantom bit is real only in pushed
//! copies); PLP discards the pulled break bit and forces the constant
//! bit.

use crate::status::Status;
use crate::{SystemBus, CPU};

/// PHA: push accumulator.
pub(crate) fn pha<B: SystemBus>(cpu: &mut CPU<B>) {
    cpu.push(cpu.a);
}

/// PHP: push status with the break bit set.
pub(crate) fn php<B: SystemBus>(cpu: &mut CPU<B>) {
    let pushed = cpu.p.bits() | Status::BREAK;
    cpu.push(pushed);
}

/// PLA: pull accumulator; updates N and Z.
pub(crate) fn pla<B: SystemBus>(cpu: &mut CPU<B>) {
    cpu.a = cpu.pop();
    cpu.p.set_nz(cpu.a);
}

/// PLP: pull status; the stack copy's break bit is ignored and the
/// constant bit forced.
pub(crate) fn plp<B: SystemBus>(cpu: &mut CPU<B>) {
    let pulled = cpu.pop();
    cpu.p.set_from_stack(pulled);
}
