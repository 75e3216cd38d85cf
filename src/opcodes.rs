//! # Opcode Dispatch Table
//!
//! The complete 256-entry instruction descriptor table, the single source
//! of truth for decoding: which operation an opcode byte selects, its
//! addressing mode, its base cycle cost, and whether an indexed page cross
//! adds a cycle.
//!
//! The table covers:
//! - **151 documented instructions**: the official NMOS 6502 set
//! - **93 undocumented instructions**: the stable extended set (multi-mode
//!   NOPs, LAX, SAX, the RMW combos, and friends), executable only when
//!   the CPU is built with [`CpuOptions::undocumented`] enabled
//! - **12 JAM codes**: opcodes that hang a real NMOS part, modeled as
//!   latching the fatal illegal-opcode flag
//!
//! [`CpuOptions::undocumented`]: crate::CpuOptions

use crate::addressing::AddressingMode;

/// Operation selector for the dispatch match in the CPU core.
///
/// One variant per mnemonic: the 56 official operations, the 20 stable
/// undocumented ones, and [`Op::Jam`] for the freeze codes. Decoding an
/// opcode byte yields an `(Op, AddressingMode)` pair; the pair, not the
/// byte, drives execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    // Official operations.
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    // Undocumented operations.
    Alr,
    Anc,
    Ane,
    Arr,
    Dcp,
    Isc,
    Las,
    Lax,
    Lxa,
    Rla,
    Rra,
    Sax,
    Sbx,
    Sha,
    Shx,
    Shy,
    Slo,
    Sre,
    Tas,
    Usbc,
    /// Freeze code: halts the core by latching the illegal-opcode flag.
    Jam,
}

/// Instruction descriptor for a single opcode byte.
///
/// # Examples
///
/// ```
/// use core6502::{AddressingMode, Op, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.op, Op::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert!(!lda_imm.undocumented);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Operation to execute.
    pub op: Op,

    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,

    /// Mnemonic, as printed by monitors and trace logs.
    pub mnemonic: &'static str,

    /// Cycle cost before any page-cross or branch penalties.
    pub base_cycles: u8,

    /// Whether a page cross during effective-address computation adds one
    /// cycle. Stores and read-modify-write ops on indexed modes always pay
    /// the extra cycle; their entries carry it in `base_cycles` instead.
    pub page_penalty: bool,

    /// Outside the official NMOS instruction set. Executed only when the
    /// CPU's undocumented-opcode option is enabled; otherwise decoding one
    /// of these latches the fatal flag.
    pub undocumented: bool,
}

const fn official(
    op: Op,
    mode: AddressingMode,
    mnemonic: &'static str,
    base_cycles: u8,
    page_penalty: bool,
) -> Opcode {
    Opcode {
        op,
        mode,
        mnemonic,
        base_cycles,
        page_penalty,
        undocumented: false,
    }
}

const fn undoc(
    op: Op,
    mode: AddressingMode,
    mnemonic: &'static str,
    base_cycles: u8,
    page_penalty: bool,
) -> Opcode {
    Opcode {
        op,
        mode,
        mnemonic,
        base_cycles,
        page_penalty,
        undocumented: true,
    }
}

/// Freeze-code descriptor; also the fill value the table starts from.
const JAM: Opcode = Opcode {
    op: Op::Jam,
    mode: AddressingMode::Implicit,
    mnemonic: "JAM",
    base_cycles: 2,
    page_penalty: false,
    undocumented: true,
};

/// Complete 256-entry instruction descriptor table indexed by opcode byte.
///
/// Shared and immutable, built at compile time; every CPU instance decodes
/// through the same table, with the undocumented/CMOS toggles applied at
/// execution time rather than by mutating the table.
///
/// # Examples
///
/// ```
/// use core6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.base_cycles, 7);
/// ```
pub const OPCODE_TABLE: [Opcode; 256] = build_table();

const fn build_table() -> [Opcode; 256] {
    use AddressingMode::*;

    // Start from a table of freeze codes, then insert the real opcodes.
    // The twelve bytes left untouched are exactly the NMOS JAM codes
    // ($02, $12, $22, $32, $42, $52, $62, $72, $92, $B2, $D2, $F2).
    let mut t = [JAM; 256];

    t[0x69] = official(Op::Adc, Immediate, "ADC", 2, false);
    t[0x65] = official(Op::Adc, ZeroPage, "ADC", 3, false);
    t[0x75] = official(Op::Adc, ZeroPageX, "ADC", 4, false);
    t[0x6D] = official(Op::Adc, Absolute, "ADC", 4, false);
    t[0x7D] = official(Op::Adc, AbsoluteX, "ADC", 4, true);
    t[0x79] = official(Op::Adc, AbsoluteY, "ADC", 4, true);
    t[0x61] = official(Op::Adc, IndirectX, "ADC", 6, false);
    t[0x71] = official(Op::Adc, IndirectY, "ADC", 5, true);

    t[0x29] = official(Op::And, Immediate, "AND", 2, false);
    t[0x25] = official(Op::And, ZeroPage, "AND", 3, false);
    t[0x35] = official(Op::And, ZeroPageX, "AND", 4, false);
    t[0x2D] = official(Op::And, Absolute, "AND", 4, false);
    t[0x3D] = official(Op::And, AbsoluteX, "AND", 4, true);
    t[0x39] = official(Op::And, AbsoluteY, "AND", 4, true);
    t[0x21] = official(Op::And, IndirectX, "AND", 6, false);
    t[0x31] = official(Op::And, IndirectY, "AND", 5, true);

    t[0x0A] = official(Op::Asl, Accumulator, "ASL", 2, false);
    t[0x06] = official(Op::Asl, ZeroPage, "ASL", 5, false);
    t[0x16] = official(Op::Asl, ZeroPageX, "ASL", 6, false);
    t[0x0E] = official(Op::Asl, Absolute, "ASL", 6, false);
    t[0x1E] = official(Op::Asl, AbsoluteX, "ASL", 7, false);

    t[0x90] = official(Op::Bcc, Relative, "BCC", 2, false);
    t[0xB0] = official(Op::Bcs, Relative, "BCS", 2, false);
    t[0xF0] = official(Op::Beq, Relative, "BEQ", 2, false);

    t[0x24] = official(Op::Bit, ZeroPage, "BIT", 3, false);
    t[0x2C] = official(Op::Bit, Absolute, "BIT", 4, false);

    t[0x30] = official(Op::Bmi, Relative, "BMI", 2, false);
    t[0xD0] = official(Op::Bne, Relative, "BNE", 2, false);
    t[0x10] = official(Op::Bpl, Relative, "BPL", 2, false);

    t[0x00] = official(Op::Brk, Implicit, "BRK", 7, false);

    t[0x50] = official(Op::Bvc, Relative, "BVC", 2, false);
    t[0x70] = official(Op::Bvs, Relative, "BVS", 2, false);

    t[0x18] = official(Op::Clc, Implicit, "CLC", 2, false);
    t[0xD8] = official(Op::Cld, Implicit, "CLD", 2, false);
    t[0x58] = official(Op::Cli, Implicit, "CLI", 2, false);
    t[0xB8] = official(Op::Clv, Implicit, "CLV", 2, false);

    t[0xC9] = official(Op::Cmp, Immediate, "CMP", 2, false);
    t[0xC5] = official(Op::Cmp, ZeroPage, "CMP", 3, false);
    t[0xD5] = official(Op::Cmp, ZeroPageX, "CMP", 4, false);
    t[0xCD] = official(Op::Cmp, Absolute, "CMP", 4, false);
    t[0xDD] = official(Op::Cmp, AbsoluteX, "CMP", 4, true);
    t[0xD9] = official(Op::Cmp, AbsoluteY, "CMP", 4, true);
    t[0xC1] = official(Op::Cmp, IndirectX, "CMP", 6, false);
    t[0xD1] = official(Op::Cmp, IndirectY, "CMP", 5, true);

    t[0xE0] = official(Op::Cpx, Immediate, "CPX", 2, false);
    t[0xE4] = official(Op::Cpx, ZeroPage, "CPX", 3, false);
    t[0xEC] = official(Op::Cpx, Absolute, "CPX", 4, false);

    t[0xC0] = official(Op::Cpy, Immediate, "CPY", 2, false);
    t[0xC4] = official(Op::Cpy, ZeroPage, "CPY", 3, false);
    t[0xCC] = official(Op::Cpy, Absolute, "CPY", 4, false);

    t[0xC6] = official(Op::Dec, ZeroPage, "DEC", 5, false);
    t[0xD6] = official(Op::Dec, ZeroPageX, "DEC", 6, false);
    t[0xCE] = official(Op::Dec, Absolute, "DEC", 6, false);
    t[0xDE] = official(Op::Dec, AbsoluteX, "DEC", 7, false);

    t[0xCA] = official(Op::Dex, Implicit, "DEX", 2, false);
    t[0x88] = official(Op::Dey, Implicit, "DEY", 2, false);

    t[0x49] = official(Op::Eor, Immediate, "EOR", 2, false);
    t[0x45] = official(Op::Eor, ZeroPage, "EOR", 3, false);
    t[0x55] = official(Op::Eor, ZeroPageX, "EOR", 4, false);
    t[0x4D] = official(Op::Eor, Absolute, "EOR", 4, false);
    t[0x5D] = official(Op::Eor, AbsoluteX, "EOR", 4, true);
    t[0x59] = official(Op::Eor, AbsoluteY, "EOR", 4, true);
    t[0x41] = official(Op::Eor, IndirectX, "EOR", 6, false);
    t[0x51] = official(Op::Eor, IndirectY, "EOR", 5, true);

    t[0xE6] = official(Op::Inc, ZeroPage, "INC", 5, false);
    t[0xF6] = official(Op::Inc, ZeroPageX, "INC", 6, false);
    t[0xEE] = official(Op::Inc, Absolute, "INC", 6, false);
    t[0xFE] = official(Op::Inc, AbsoluteX, "INC", 7, false);

    t[0xE8] = official(Op::Inx, Implicit, "INX", 2, false);
    t[0xC8] = official(Op::Iny, Implicit, "INY", 2, false);

    t[0x4C] = official(Op::Jmp, Absolute, "JMP", 3, false);
    t[0x6C] = official(Op::Jmp, Indirect, "JMP", 5, false);

    t[0x20] = official(Op::Jsr, Absolute, "JSR", 6, false);

    t[0xA9] = official(Op::Lda, Immediate, "LDA", 2, false);
    t[0xA5] = official(Op::Lda, ZeroPage, "LDA", 3, false);
    t[0xB5] = official(Op::Lda, ZeroPageX, "LDA", 4, false);
    t[0xAD] = official(Op::Lda, Absolute, "LDA", 4, false);
    t[0xBD] = official(Op::Lda, AbsoluteX, "LDA", 4, true);
    t[0xB9] = official(Op::Lda, AbsoluteY, "LDA", 4, true);
    t[0xA1] = official(Op::Lda, IndirectX, "LDA", 6, false);
    t[0xB1] = official(Op::Lda, IndirectY, "LDA", 5, true);

    t[0xA2] = official(Op::Ldx, Immediate, "LDX", 2, false);
    t[0xA6] = official(Op::Ldx, ZeroPage, "LDX", 3, false);
    t[0xB6] = official(Op::Ldx, ZeroPageY, "LDX", 4, false);
    t[0xAE] = official(Op::Ldx, Absolute, "LDX", 4, false);
    t[0xBE] = official(Op::Ldx, AbsoluteY, "LDX", 4, true);

    t[0xA0] = official(Op::Ldy, Immediate, "LDY", 2, false);
    t[0xA4] = official(Op::Ldy, ZeroPage, "LDY", 3, false);
    t[0xB4] = official(Op::Ldy, ZeroPageX, "LDY", 4, false);
    t[0xAC] = official(Op::Ldy, Absolute, "LDY", 4, false);
    t[0xBC] = official(Op::Ldy, AbsoluteX, "LDY", 4, true);

    t[0x4A] = official(Op::Lsr, Accumulator, "LSR", 2, false);
    t[0x46] = official(Op::Lsr, ZeroPage, "LSR", 5, false);
    t[0x56] = official(Op::Lsr, ZeroPageX, "LSR", 6, false);
    t[0x4E] = official(Op::Lsr, Absolute, "LSR", 6, false);
    t[0x5E] = official(Op::Lsr, AbsoluteX, "LSR", 7, false);

    t[0xEA] = official(Op::Nop, Implicit, "NOP", 2, false);

    t[0x09] = official(Op::Ora, Immediate, "ORA", 2, false);
    t[0x05] = official(Op::Ora, ZeroPage, "ORA", 3, false);
    t[0x15] = official(Op::Ora, ZeroPageX, "ORA", 4, false);
    t[0x0D] = official(Op::Ora, Absolute, "ORA", 4, false);
    t[0x1D] = official(Op::Ora, AbsoluteX, "ORA", 4, true);
    t[0x19] = official(Op::Ora, AbsoluteY, "ORA", 4, true);
    t[0x01] = official(Op::Ora, IndirectX, "ORA", 6, false);
    t[0x11] = official(Op::Ora, IndirectY, "ORA", 5, true);

    t[0x48] = official(Op::Pha, Implicit, "PHA", 3, false);
    t[0x08] = official(Op::Php, Implicit, "PHP", 3, false);
    t[0x68] = official(Op::Pla, Implicit, "PLA", 4, false);
    t[0x28] = official(Op::Plp, Implicit, "PLP", 4, false);

    t[0x2A] = official(Op::Rol, Accumulator, "ROL", 2, false);
    t[0x26] = official(Op::Rol, ZeroPage, "ROL", 5, false);
    t[0x36] = official(Op::Rol, ZeroPageX, "ROL", 6, false);
    t[0x2E] = official(Op::Rol, Absolute, "ROL", 6, false);
    t[0x3E] = official(Op::Rol, AbsoluteX, "ROL", 7, false);

    t[0x6A] = official(Op::Ror, Accumulator, "ROR", 2, false);
    t[0x66] = official(Op::Ror, ZeroPage, "ROR", 5, false);
    t[0x76] = official(Op::Ror, ZeroPageX, "ROR", 6, false);
    t[0x6E] = official(Op::Ror, Absolute, "ROR", 6, false);
    t[0x7E] = official(Op::Ror, AbsoluteX, "ROR", 7, false);

    t[0x40] = official(Op::Rti, Implicit, "RTI", 6, false);
    t[0x60] = official(Op::Rts, Implicit, "RTS", 6, false);

    t[0xE9] = official(Op::Sbc, Immediate, "SBC", 2, false);
    t[0xE5] = official(Op::Sbc, ZeroPage, "SBC", 3, false);
    t[0xF5] = official(Op::Sbc, ZeroPageX, "SBC", 4, false);
    t[0xED] = official(Op::Sbc, Absolute, "SBC", 4, false);
    t[0xFD] = official(Op::Sbc, AbsoluteX, "SBC", 4, true);
    t[0xF9] = official(Op::Sbc, AbsoluteY, "SBC", 4, true);
    t[0xE1] = official(Op::Sbc, IndirectX, "SBC", 6, false);
    t[0xF1] = official(Op::Sbc, IndirectY, "SBC", 5, true);

    t[0x38] = official(Op::Sec, Implicit, "SEC", 2, false);
    t[0xF8] = official(Op::Sed, Implicit, "SED", 2, false);
    t[0x78] = official(Op::Sei, Implicit, "SEI", 2, false);

    // Indexed stores always pay the extra cycle; it is baked into the
    // base count rather than flagged as a conditional penalty.
    t[0x85] = official(Op::Sta, ZeroPage, "STA", 3, false);
    t[0x95] = official(Op::Sta, ZeroPageX, "STA", 4, false);
    t[0x8D] = official(Op::Sta, Absolute, "STA", 4, false);
    t[0x9D] = official(Op::Sta, AbsoluteX, "STA", 5, false);
    t[0x99] = official(Op::Sta, AbsoluteY, "STA", 5, false);
    t[0x81] = official(Op::Sta, IndirectX, "STA", 6, false);
    t[0x91] = official(Op::Sta, IndirectY, "STA", 6, false);

    t[0x86] = official(Op::Stx, ZeroPage, "STX", 3, false);
    t[0x96] = official(Op::Stx, ZeroPageY, "STX", 4, false);
    t[0x8E] = official(Op::Stx, Absolute, "STX", 4, false);

    t[0x84] = official(Op::Sty, ZeroPage, "STY", 3, false);
    t[0x94] = official(Op::Sty, ZeroPageX, "STY", 4, false);
    t[0x8C] = official(Op::Sty, Absolute, "STY", 4, false);

    t[0xAA] = official(Op::Tax, Implicit, "TAX", 2, false);
    t[0xA8] = official(Op::Tay, Implicit, "TAY", 2, false);
    t[0xBA] = official(Op::Tsx, Implicit, "TSX", 2, false);
    t[0x8A] = official(Op::Txa, Implicit, "TXA", 2, false);
    t[0x9A] = official(Op::Txs, Implicit, "TXS", 2, false);
    t[0x98] = official(Op::Tya, Implicit, "TYA", 2, false);

    // Undocumented opcodes. Cycle counts follow the published extended
    // tables; the multi-mode NOPs time exactly like the load they shadow.

    t[0x1A] = undoc(Op::Nop, Implicit, "NOP", 2, false);
    t[0x3A] = undoc(Op::Nop, Implicit, "NOP", 2, false);
    t[0x5A] = undoc(Op::Nop, Implicit, "NOP", 2, false);
    t[0x7A] = undoc(Op::Nop, Implicit, "NOP", 2, false);
    t[0xDA] = undoc(Op::Nop, Implicit, "NOP", 2, false);
    t[0xFA] = undoc(Op::Nop, Implicit, "NOP", 2, false);
    t[0x80] = undoc(Op::Nop, Immediate, "NOP", 2, false);
    t[0x82] = undoc(Op::Nop, Immediate, "NOP", 2, false);
    t[0x89] = undoc(Op::Nop, Immediate, "NOP", 2, false);
    t[0xC2] = undoc(Op::Nop, Immediate, "NOP", 2, false);
    t[0xE2] = undoc(Op::Nop, Immediate, "NOP", 2, false);
    t[0x04] = undoc(Op::Nop, ZeroPage, "NOP", 3, false);
    t[0x44] = undoc(Op::Nop, ZeroPage, "NOP", 3, false);
    t[0x64] = undoc(Op::Nop, ZeroPage, "NOP", 3, false);
    t[0x14] = undoc(Op::Nop, ZeroPageX, "NOP", 4, false);
    t[0x34] = undoc(Op::Nop, ZeroPageX, "NOP", 4, false);
    t[0x54] = undoc(Op::Nop, ZeroPageX, "NOP", 4, false);
    t[0x74] = undoc(Op::Nop, ZeroPageX, "NOP", 4, false);
    t[0xD4] = undoc(Op::Nop, ZeroPageX, "NOP", 4, false);
    t[0xF4] = undoc(Op::Nop, ZeroPageX, "NOP", 4, false);
    t[0x0C] = undoc(Op::Nop, Absolute, "NOP", 4, false);
    t[0x1C] = undoc(Op::Nop, AbsoluteX, "NOP", 4, true);
    t[0x3C] = undoc(Op::Nop, AbsoluteX, "NOP", 4, true);
    t[0x5C] = undoc(Op::Nop, AbsoluteX, "NOP", 4, true);
    t[0x7C] = undoc(Op::Nop, AbsoluteX, "NOP", 4, true);
    t[0xDC] = undoc(Op::Nop, AbsoluteX, "NOP", 4, true);
    t[0xFC] = undoc(Op::Nop, AbsoluteX, "NOP", 4, true);

    t[0xA7] = undoc(Op::Lax, ZeroPage, "LAX", 3, false);
    t[0xB7] = undoc(Op::Lax, ZeroPageY, "LAX", 4, false);
    t[0xAF] = undoc(Op::Lax, Absolute, "LAX", 4, false);
    t[0xBF] = undoc(Op::Lax, AbsoluteY, "LAX", 4, true);
    t[0xA3] = undoc(Op::Lax, IndirectX, "LAX", 6, false);
    t[0xB3] = undoc(Op::Lax, IndirectY, "LAX", 5, true);

    t[0x87] = undoc(Op::Sax, ZeroPage, "SAX", 3, false);
    t[0x97] = undoc(Op::Sax, ZeroPageY, "SAX", 4, false);
    t[0x8F] = undoc(Op::Sax, Absolute, "SAX", 4, false);
    t[0x83] = undoc(Op::Sax, IndirectX, "SAX", 6, false);

    t[0xC7] = undoc(Op::Dcp, ZeroPage, "DCP", 5, false);
    t[0xD7] = undoc(Op::Dcp, ZeroPageX, "DCP", 6, false);
    t[0xCF] = undoc(Op::Dcp, Absolute, "DCP", 6, false);
    t[0xDF] = undoc(Op::Dcp, AbsoluteX, "DCP", 7, false);
    t[0xDB] = undoc(Op::Dcp, AbsoluteY, "DCP", 7, false);
    t[0xC3] = undoc(Op::Dcp, IndirectX, "DCP", 8, false);
    t[0xD3] = undoc(Op::Dcp, IndirectY, "DCP", 8, false);

    t[0xE7] = undoc(Op::Isc, ZeroPage, "ISC", 5, false);
    t[0xF7] = undoc(Op::Isc, ZeroPageX, "ISC", 6, false);
    t[0xEF] = undoc(Op::Isc, Absolute, "ISC", 6, false);
    t[0xFF] = undoc(Op::Isc, AbsoluteX, "ISC", 7, false);
    t[0xFB] = undoc(Op::Isc, AbsoluteY, "ISC", 7, false);
    t[0xE3] = undoc(Op::Isc, IndirectX, "ISC", 8, false);
    t[0xF3] = undoc(Op::Isc, IndirectY, "ISC", 8, false);

    t[0x07] = undoc(Op::Slo, ZeroPage, "SLO", 5, false);
    t[0x17] = undoc(Op::Slo, ZeroPageX, "SLO", 6, false);
    t[0x0F] = undoc(Op::Slo, Absolute, "SLO", 6, false);
    t[0x1F] = undoc(Op::Slo, AbsoluteX, "SLO", 7, false);
    t[0x1B] = undoc(Op::Slo, AbsoluteY, "SLO", 7, false);
    t[0x03] = undoc(Op::Slo, IndirectX, "SLO", 8, false);
    t[0x13] = undoc(Op::Slo, IndirectY, "SLO", 8, false);

    t[0x27] = undoc(Op::Rla, ZeroPage, "RLA", 5, false);
    t[0x37] = undoc(Op::Rla, ZeroPageX, "RLA", 6, false);
    t[0x2F] = undoc(Op::Rla, Absolute, "RLA", 6, false);
    t[0x3F] = undoc(Op::Rla, AbsoluteX, "RLA", 7, false);
    t[0x3B] = undoc(Op::Rla, AbsoluteY, "RLA", 7, false);
    t[0x23] = undoc(Op::Rla, IndirectX, "RLA", 8, false);
    t[0x33] = undoc(Op::Rla, IndirectY, "RLA", 8, false);

    t[0x47] = undoc(Op::Sre, ZeroPage, "SRE", 5, false);
    t[0x57] = undoc(Op::Sre, ZeroPageX, "SRE", 6, false);
    t[0x4F] = undoc(Op::Sre, Absolute, "SRE", 6, false);
    t[0x5F] = undoc(Op::Sre, AbsoluteX, "SRE", 7, false);
    t[0x5B] = undoc(Op::Sre, AbsoluteY, "SRE", 7, false);
    t[0x43] = undoc(Op::Sre, IndirectX, "SRE", 8, false);
    t[0x53] = undoc(Op::Sre, IndirectY, "SRE", 8, false);

    t[0x67] = undoc(Op::Rra, ZeroPage, "RRA", 5, false);
    t[0x77] = undoc(Op::Rra, ZeroPageX, "RRA", 6, false);
    t[0x6F] = undoc(Op::Rra, Absolute, "RRA", 6, false);
    t[0x7F] = undoc(Op::Rra, AbsoluteX, "RRA", 7, false);
    t[0x7B] = undoc(Op::Rra, AbsoluteY, "RRA", 7, false);
    t[0x63] = undoc(Op::Rra, IndirectX, "RRA", 8, false);
    t[0x73] = undoc(Op::Rra, IndirectY, "RRA", 8, false);

    t[0x0B] = undoc(Op::Anc, Immediate, "ANC", 2, false);
    t[0x2B] = undoc(Op::Anc, Immediate, "ANC", 2, false);
    t[0x4B] = undoc(Op::Alr, Immediate, "ALR", 2, false);
    t[0x6B] = undoc(Op::Arr, Immediate, "ARR", 2, false);
    t[0xCB] = undoc(Op::Sbx, Immediate, "SBX", 2, false);
    t[0xEB] = undoc(Op::Usbc, Immediate, "USBC", 2, false);

    t[0xBB] = undoc(Op::Las, AbsoluteY, "LAS", 4, true);
    t[0x8B] = undoc(Op::Ane, Immediate, "ANE", 2, false);
    t[0xAB] = undoc(Op::Lxa, Immediate, "LXA", 2, false);

    t[0x9F] = undoc(Op::Sha, AbsoluteY, "SHA", 5, false);
    t[0x93] = undoc(Op::Sha, IndirectY, "SHA", 6, false);
    t[0x9E] = undoc(Op::Shx, AbsoluteY, "SHX", 5, false);
    t[0x9C] = undoc(Op::Shy, AbsoluteX, "SHY", 5, false);
    t[0x9B] = undoc(Op::Tas, AbsoluteY, "TAS", 5, false);

    t
}
