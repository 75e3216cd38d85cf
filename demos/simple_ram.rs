//! Simple RAM demo
//!
//! Demonstrates CPU initialization and execution over FlatMemory:
//! - setting up the reset vector
//! - loading a small program
//! - stepping the CPU and inspecting registers, flags, and cycles

use core6502::{CPU, FlatMemory, SystemBus, OPCODE_TABLE};

fn main() {
    println!("core6502 - Simple RAM Demo");
    println!("==========================\n");

    // 64 KiB of flat RAM with the program at 0x8000.
    let mut memory = FlatMemory::new();
    memory.write_word(0xFFFC, 0x8000);

    // Classic countdown: load 5, loop DEX until zero, add 0x40.
    memory.load(
        0x8000,
        &[
            0xA2, 0x05, // LDX #$05
            0xCA, // loop: DEX
            0xD0, 0xFD, // BNE loop
            0xA9, 0x02, // LDA #$02
            0x69, 0x40, // ADC #$40
        ],
    );

    println!("Reset vector set to 0x8000, program loaded\n");

    let mut cpu = CPU::new(memory);

    println!("CPU initial state:");
    print_state(&cpu);

    println!("\nExecuting:");
    println!("----------");
    loop {
        let pc_before = cpu.pc();
        let opcode = cpu.bus().read(pc_before);
        let entry = &OPCODE_TABLE[opcode as usize];
        let cycles_before = cpu.cycles();

        cpu.step();

        println!(
            "  0x{:04X}  {:4} ({:?})  +{} cycles",
            pc_before,
            entry.mnemonic,
            entry.mode,
            cpu.cycles() - cycles_before
        );

        if cpu.pc() >= 0x8009 {
            break;
        }
    }

    println!("\nCPU final state:");
    print_state(&cpu);
}

fn print_state<B: SystemBus>(cpu: &CPU<B>) {
    println!("  PC: 0x{:04X}", cpu.pc());
    println!("  SP: 0x{:02X} (stack top: 0x01{:02X})", cpu.sp(), cpu.sp());
    println!("  A:  0x{:02X}  X: 0x{:02X}  Y: 0x{:02X}", cpu.a(), cpu.x(), cpu.y());
    println!(
        "  Status: 0x{:02X} (NV-BDIZC: {:08b})",
        cpu.status(),
        cpu.status()
    );
    println!("  Cycles: {}  Steps: {}", cpu.cycles(), cpu.steps());
}
