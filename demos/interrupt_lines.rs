//! Interrupt lines demo
//!
//! Shows a memory-mapped timer device asserting the /IRQ line through the
//! bus, the CPU vectoring into a handler, and the handler acknowledging
//! the device to release the line.

use core6502::{CPU, FlatMemory, SystemBus};

/// Flat RAM plus a one-register timer at $D000.
///
/// Reading $D000 reports the pending bit; writing any value acknowledges
/// the interrupt.
struct TimerBus {
    mem: FlatMemory,
    timer_pending: bool,
}

impl TimerBus {
    const TIMER_REG: u16 = 0xD000;

    fn new(mem: FlatMemory) -> Self {
        Self {
            mem,
            timer_pending: false,
        }
    }
}

impl SystemBus for TimerBus {
    fn read(&self, addr: u16) -> u8 {
        if addr == Self::TIMER_REG {
            self.timer_pending as u8
        } else {
            self.mem.read(addr)
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if addr == Self::TIMER_REG {
            self.timer_pending = false;
        } else {
            self.mem.write(addr, value);
        }
    }

    fn irq_asserted(&self) -> bool {
        self.timer_pending
    }
}

fn main() {
    println!("core6502 - Interrupt Lines Demo");
    println!("===============================\n");

    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFC, 0x8000);
    memory.write_word(0xFFFE, 0x9000);

    // Main program: increment X forever.
    memory.load(0x8000, &[0xE8, 0x4C, 0x00, 0x80]); // loop: INX / JMP loop

    // IRQ handler: acknowledge the timer, count the interrupt in Y, RTI.
    memory.load(
        0x9000,
        &[
            0x8D, 0x00, 0xD0, // STA $D000 (acknowledge)
            0xC8, // INY
            0x40, // RTI
        ],
    );

    let mut cpu = CPU::new(TimerBus::new(memory));

    println!("Running the main loop for a few instructions...");
    for _ in 0..4 {
        cpu.step();
    }
    println!("  X = {} (incremented by the main loop)", cpu.x());

    println!("\nTimer fires: /IRQ asserted through the bus");
    cpu.bus_mut().timer_pending = true;
    cpu.step(); // service + first handler instruction (the acknowledge)
    println!("  PC = 0x{:04X} (in the handler)", cpu.pc());
    println!(
        "  IRQ line now {} (handler acknowledged the device)",
        if cpu.bus().irq_asserted() {
            "asserted"
        } else {
            "released"
        }
    );

    cpu.step(); // INY
    cpu.step(); // RTI
    println!("\nAfter RTI:");
    println!("  Y = {} (interrupts handled)", cpu.y());
    println!("  PC = 0x{:04X} (back in the main loop)", cpu.pc());

    for _ in 0..2 {
        cpu.step();
    }
    println!("  X = {} (main loop resumed)", cpu.x());
    println!("\nTotal cycles: {}", cpu.cycles());
}
