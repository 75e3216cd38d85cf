//! # Addressing Modes
//!
//! The 13 addressing modes of the 6502. Each mode determines how the CPU
//! interprets the operand bytes following an opcode and how it computes
//! the effective address; the evaluators themselves live on the CPU, since
//! they consume operand bytes from the program stream and read pointers
//! through the bus.

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by the instruction (CLC, RTS, NOP).
    Implicit,

    /// Operates directly on the accumulator (ASL A, LSR A).
    Accumulator,

    /// 8-bit constant follows the opcode (LDA #$10).
    Immediate,

    /// 8-bit address into page zero (LDA $80).
    ZeroPage,

    /// Zero-page address plus X, wrapping within page zero (LDA $80,X).
    ZeroPageX,

    /// Zero-page address plus Y, wrapping within page zero (LDX $80,Y).
    ZeroPageY,

    /// Signed 8-bit branch offset relative to the next instruction.
    Relative,

    /// Full 16-bit little-endian address (JMP $1234).
    Absolute,

    /// 16-bit address plus X; +1 cycle when the sum crosses a page.
    AbsoluteX,

    /// 16-bit address plus Y; +1 cycle when the sum crosses a page.
    AbsoluteY,

    /// Jump through a 16-bit pointer (JMP ($FFFC)); only JMP uses this.
    ///
    /// The NMOS part never carries the pointer-low increment into the high
    /// byte, so a pointer at $xxFF reads its high byte from $xx00.
    Indirect,

    /// (ZP + X) then dereference: pointer lives in page zero (LDA ($40,X)).
    IndirectX,

    /// ZP dereference then + Y (LDA ($40),Y); +1 cycle on page cross.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes the mode consumes after the opcode.
    pub fn operand_len(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}
