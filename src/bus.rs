//! # System Bus Abstraction
//!
//! The `SystemBus` trait decouples the CPU from whatever sits on the other
//! side of the address and data lines: flat RAM, ROM/RAM splits, banked
//! memory, memory-mapped peripherals. It also carries the state of the two
//! external interrupt lines, because on real hardware /IRQ and /NMI are
//! wired to the devices on the bus, not to the CPU's internals.
//!
//! ## Design Principles
//!
//! Faithful to 6502 hardware behavior:
//! - No bus errors: reads and writes always succeed
//! - Unmapped reads may return garbage (by convention 0xFF)
//! - Writes to ROM or unmapped regions may be silently ignored
//! - The CPU never interprets address semantics; peripheral mapping is
//!   entirely the host's concern

/// Bus trait giving the CPU access to memory, peripherals, and the
/// interrupt lines.
///
/// # Design
///
/// - `read(&self)`: immutable reference allows shared reads
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - `irq_asserted`/`nmi_asserted`: level of the external lines, polled by
///   the CPU between instructions; defaults report quiet lines
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use core6502::{FlatMemory, SystemBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing a ROM/RAM split
///
/// ```
/// use core6502::SystemBus;
///
/// struct RomRam {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl SystemBus for RomRam {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM are silently ignored.
///     }
/// }
/// ```
pub trait SystemBus {
    /// Reads a byte from the given 16-bit address.
    ///
    /// Must never panic; unmapped addresses may return garbage, matching
    /// hardware behavior.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the given 16-bit address.
    ///
    /// Must never panic; read-only and unmapped regions may drop the
    /// write.
    fn write(&mut self, addr: u16, value: u8);

    /// Level of the /IRQ line: `true` while any device holds it asserted.
    ///
    /// IRQ is level-sensitive and shared; the line stays asserted until
    /// every device has been acknowledged. The CPU polls this between
    /// instructions, so implementations should be O(1).
    fn irq_asserted(&self) -> bool {
        false
    }

    /// Level of the /NMI line: `true` while asserted.
    ///
    /// The CPU itself performs the edge detection; the bus only reports
    /// the current level.
    fn nmi_asserted(&self) -> bool {
        false
    }

    /// Reads a little-endian 16-bit word from `addr` and `addr + 1`.
    ///
    /// Off the instruction hot path: the CPU uses this for the reset and
    /// interrupt vector fetches, and hosts for test scaffolding.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian 16-bit word to `addr` and `addr + 1`.
    fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, value as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }
}

/// Simple 64 KiB flat memory: every address is writable RAM.
///
/// Useful for tests, demos, and hosts that handle ROM protection
/// elsewhere. The interrupt lines are never asserted.
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, SystemBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x8000); // reset vector
/// memory.load(0x8000, &[0xA9, 0x05]); // LDA #$05
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates flat memory with all bytes zeroed.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Copies `bytes` into memory starting at `base`, wrapping at the top
    /// of the address space.
    pub fn load(&mut self, base: u16, bytes: &[u8]) {
        let mut addr = base;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Fills `count` bytes starting at `base` with `value`, wrapping at
    /// the top of the address space.
    pub fn fill(&mut self, base: u16, count: u16, value: u8) {
        let mut addr = base;
        for _ in 0..count {
            self.data[addr as usize] = value;
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
