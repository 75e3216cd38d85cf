//! # CPU State and Execution
//!
//! The [`CPU`] struct holds the 6502 register file and drives the
//! fetch-decode-execute loop. It is generic over the memory system via the
//! [`SystemBus`] trait and owns nothing else: peripherals, ROM protection,
//! and address decoding are all on the other side of the bus.
//!
//! ## Execution Model
//!
//! - [`CPU::step`] executes one instruction, servicing any pending
//!   interrupt first, and reports whether the core is still alive.
//! - [`CPU::run`] executes until a cycle or instruction budget is spent.
//! - [`CPU::run_eternally`] executes until a JAM or power-off stops the
//!   core.
//!
//! Interrupts are sampled only at instruction boundaries: NMI is
//! edge-triggered with an in-service inhibit cleared by RTI, IRQ is
//! level-triggered and masked by the I flag. Every instruction is atomic
//! from the core's point of view.
//!
//! ## Cycle Accounting
//!
//! A 64-bit counter accumulates each instruction's base cycles plus the
//! page-cross penalty on eligible addressing modes plus branch penalties
//! (+1 taken, +1 more across a page). Interrupt entry accounts 7 cycles.
//! An optional per-cycle hook observes a by-value [`Snapshot`] once per
//! elapsed cycle, which hosts use for wall-clock pacing.

use crate::addressing::AddressingMode;
use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer, undocumented,
};
use crate::opcodes::{Op, OPCODE_TABLE};
use crate::status::Status;
use crate::SystemBus;

/// NMI vector location ($FFFA/$FFFB).
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector location ($FFFC/$FFFD).
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector location ($FFFE/$FFFF).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base of the hardware stack page.
const STACK_BASE: u16 = 0x0100;

/// Cycles accounted for hardware interrupt entry, per the NMOS datasheet.
const INTERRUPT_CYCLES: u64 = 7;

/// By-value view of the register file handed to the per-cycle hook.
///
/// Copied out of the CPU so the hook can never alias live state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    /// Packed status byte.
    pub status: u8,
    /// Total elapsed cycles as of this tick.
    pub cycles: u64,
}

/// Callback invoked once per elapsed CPU cycle.
pub type CycleHook = Box<dyn FnMut(Snapshot)>;

/// Budget unit for [`CPU::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMethod {
    /// The budget is a number of clock cycles.
    CycleCount,
    /// The budget is a number of completed instructions.
    InstructionCount,
}

/// Construction-time options selecting opcode-set variants and reset
/// register values.
///
/// # Examples
///
/// ```
/// use core6502::{CpuOptions, CPU, FlatMemory, SystemBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write_word(0xFFFC, 0x0200);
///
/// let opts = CpuOptions {
///     undocumented: true,
///     ..CpuOptions::default()
/// };
/// let cpu = CPU::with_options(mem, opts);
/// assert_eq!(cpu.pc(), 0x0200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuOptions {
    /// Execute the stable undocumented opcodes instead of trapping them.
    pub undocumented: bool,

    /// Use the 65C02-corrected indirect JMP instead of reproducing the
    /// NMOS page-wrap bug.
    pub cmos_indirect_jmp: bool,

    /// Accumulator value after reset.
    pub reset_a: u8,

    /// X register value after reset.
    pub reset_x: u8,

    /// Y register value after reset.
    pub reset_y: u8,
}

impl Default for CpuOptions {
    fn default() -> Self {
        Self {
            undocumented: false,
            cmos_indirect_jmp: false,
            reset_a: 0x00,
            reset_x: 0x00,
            reset_y: 0x00,
        }
    }
}

/// 6502 CPU state and execution context.
///
/// # Type Parameters
///
/// * `B` - System bus implementation (must implement [`SystemBus`])
///
/// # Examples
///
/// ```
/// use core6502::{CPU, FlatMemory, SystemBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x8000); // reset vector
/// memory.load(0x8000, &[0xA9, 0x05, 0x69, 0x03]); // LDA #$05 / ADC #$03
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
///
/// cpu.step();
/// cpu.step();
/// assert_eq!(cpu.a(), 0x08);
/// assert_eq!(cpu.cycles(), 4);
/// ```
pub struct CPU<B: SystemBus> {
    /// Accumulator.
    pub(crate) a: u8,

    /// X index register.
    pub(crate) x: u8,

    /// Y index register.
    pub(crate) y: u8,

    /// Program counter.
    pub(crate) pc: u16,

    /// Stack pointer; the full stack address is $0100 + SP.
    pub(crate) sp: u8,

    /// Processor status.
    pub(crate) p: Status,

    /// Total cycles elapsed since reset.
    pub(crate) cycles: u64,

    /// Completed instructions since reset (interrupt entries count as part
    /// of the step they precede).
    steps: u64,

    /// System bus.
    pub(crate) bus: B,

    /// Fatal latch: a JAM or trapped opcode was decoded. Cleared by reset.
    pub(crate) jammed: bool,

    /// Cooperative stop requested by the host. Cleared by reset.
    power_off: bool,

    /// Host-driven /IRQ line, OR-ed with the bus's report.
    irq_line: bool,

    /// Host-driven /NMI line, OR-ed with the bus's report.
    nmi_line: bool,

    /// /NMI level at the previous sample, for edge detection.
    nmi_prev_level: bool,

    /// An NMI edge was seen and not yet serviced.
    nmi_pending: bool,

    /// An NMI handler is running; further NMIs wait for its RTI.
    pub(crate) nmi_in_service: bool,

    opts: CpuOptions,

    cycle_hook: Option<CycleHook>,
}

impl<B: SystemBus> CPU<B> {
    /// Creates a CPU with default options and resets it.
    ///
    /// Reset loads PC from the vector at $FFFC/$FFFD, sets SP to 0xFD,
    /// zeroes A/X/Y and the counters, and puts P in its power-on state.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, FlatMemory, SystemBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write_word(0xFFFC, 0x8000);
    ///
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// assert_eq!(cpu.cycles(), 0);
    /// ```
    pub fn new(bus: B) -> Self {
        Self::with_options(bus, CpuOptions::default())
    }

    /// Creates a CPU with explicit options and resets it.
    pub fn with_options(bus: B, opts: CpuOptions) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            p: Status::new(),
            cycles: 0,
            steps: 0,
            bus,
            jammed: false,
            power_off: false,
            irq_line: false,
            nmi_line: false,
            nmi_prev_level: false,
            nmi_pending: false,
            nmi_in_service: false,
            opts,
            cycle_hook: None,
        };
        cpu.reset();
        cpu
    }

    /// Installs a hook invoked once per elapsed cycle.
    pub fn set_cycle_hook(&mut self, hook: CycleHook) {
        self.cycle_hook = Some(hook);
    }

    /// Removes the per-cycle hook.
    pub fn clear_cycle_hook(&mut self) {
        self.cycle_hook = None;
    }

    /// Returns the CPU to its power-on state.
    ///
    /// Registers are reinitialized (A/X/Y from the options, SP = 0xFD, PC
    /// from the reset vector), the counters are zeroed, and the fatal and
    /// interrupt latches are cleared. The host-driven line state is
    /// released as well.
    pub fn reset(&mut self) {
        self.a = self.opts.reset_a;
        self.x = self.opts.reset_x;
        self.y = self.opts.reset_y;
        self.sp = 0xFD;
        self.p.reset();
        self.pc = self.bus.read_word(RESET_VECTOR);

        self.cycles = 0;
        self.steps = 0;
        self.jammed = false;
        self.power_off = false;
        self.irq_line = false;
        self.nmi_line = false;
        self.nmi_prev_level = false;
        self.nmi_pending = false;
        self.nmi_in_service = false;
    }

    /// Requests a cooperative stop at the next instruction boundary.
    pub fn power_off(&mut self) {
        self.power_off = true;
    }

    /// Drives the /IRQ line from the host (`true` = asserted). The
    /// effective level is this OR the bus's [`SystemBus::irq_asserted`].
    pub fn irq_line(&mut self, asserted: bool) {
        self.irq_line = asserted;
    }

    /// Drives the /NMI line from the host (`true` = asserted). The
    /// effective level is this OR the bus's [`SystemBus::nmi_asserted`].
    ///
    /// The assertion edge is latched here, so a pulse between two
    /// instruction boundaries is not lost. Bus-driven NMIs are sampled at
    /// boundaries only and must hold their level until then.
    pub fn nmi_line(&mut self, asserted: bool) {
        if asserted && !self.nmi_line {
            self.nmi_pending = true;
        }
        self.nmi_line = asserted;
    }

    /// Executes one instruction, servicing any pending interrupt first.
    ///
    /// Returns `true` while the core is alive; `false` once a JAM,
    /// trapped opcode, or power-off request has stopped it.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{CPU, FlatMemory, SystemBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write_word(0xFFFC, 0x8000);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert!(cpu.step());
    /// assert_eq!(cpu.cycles(), 2);
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> bool {
        if self.power_off || self.jammed {
            return false;
        }

        self.poll_interrupts();

        let opcode = self.bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        let entry = &OPCODE_TABLE[opcode as usize];

        if entry.undocumented && !self.opts.undocumented {
            // Trap without touching the operand bytes: PC stops just past
            // the offending opcode.
            self.jammed = true;
            let spent = entry.base_cycles as u64;
            self.cycles += spent;
            self.steps += 1;
            self.tick(spent);
            return false;
        }

        let (addr, page_crossed) = self.resolve(entry.mode);

        let mut spent = entry.base_cycles as u64;
        if entry.page_penalty && page_crossed {
            spent += 1;
        }
        spent += self.execute(entry.op, addr, entry.mode, page_crossed);

        self.cycles += spent;
        self.steps += 1;
        self.tick(spent);

        !self.jammed && !self.power_off
    }

    /// Executes until `budget` is exhausted, in cycles or instructions
    /// according to `method`. Returns the cycles actually consumed, which
    /// may overshoot a cycle budget by part of the final instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use core6502::{RunMethod, CPU, FlatMemory, SystemBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write_word(0xFFFC, 0x8000);
    /// mem.fill(0x8000, 16, 0xEA); // NOPs
    ///
    /// let mut cpu = CPU::new(mem);
    /// let spent = cpu.run(10, RunMethod::CycleCount);
    /// assert_eq!(spent, 10); // five 2-cycle NOPs
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run(&mut self, budget: u64, method: RunMethod) -> u64 {
        let start_cycles = self.cycles;
        match method {
            RunMethod::CycleCount => {
                let target = start_cycles.saturating_add(budget);
                while self.cycles < target {
                    if !self.step() {
                        break;
                    }
                }
            }
            RunMethod::InstructionCount => {
                let target = self.steps.saturating_add(budget);
                while self.steps < target {
                    if !self.step() {
                        break;
                    }
                }
            }
        }
        self.cycles - start_cycles
    }

    /// Executes until a JAM, trapped opcode, or power-off stops the core.
    pub fn run_eternally(&mut self) {
        while self.step() {}
    }

    // ========== Interrupt sequencing ==========

    /// Samples the interrupt lines and services at most one interrupt.
    ///
    /// Called at the top of every step. NMI is detected on the rising
    /// assertion edge and latched; the latch survives until serviced, and
    /// service is inhibited while a previous NMI handler has not yet
    /// returned. IRQ is a pure level check against the I flag. NMI wins
    /// when both are due.
    fn poll_interrupts(&mut self) {
        let nmi_level = self.nmi_line || self.bus.nmi_asserted();
        if nmi_level && !self.nmi_prev_level {
            self.nmi_pending = true;
        }
        self.nmi_prev_level = nmi_level;

        if self.nmi_pending && !self.nmi_in_service {
            self.nmi_pending = false;
            self.nmi_in_service = true;
            self.service_interrupt(NMI_VECTOR);
        } else if (self.irq_line || self.bus.irq_asserted()) && !self.p.interrupt() {
            self.service_interrupt(IRQ_VECTOR);
        }
    }

    /// Pushes the return context and jumps through `vector`.
    ///
    /// Hardware interrupts push P with the break bit clear; only BRK and
    /// PHP push it set.
    fn service_interrupt(&mut self, vector: u16) {
        self.push_word(self.pc);
        self.push(self.p.bits() & !Status::BREAK);
        self.p.set_interrupt(true);
        self.pc = self.bus.read_word(vector);
        self.cycles += INTERRUPT_CYCLES;
        self.tick(INTERRUPT_CYCLES);
    }

    // ========== Addressing-mode evaluation ==========

    /// Computes the effective address for `mode`, consuming operand bytes
    /// from the program stream.
    ///
    /// Returns the address (0 for implied/accumulator, where it is unused)
    /// and whether the computation crossed a page boundary relative to its
    /// base, for cycle-penalty accounting.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> (u16, bool) {
        match mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => (0, false),

            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                (addr, false)
            }

            AddressingMode::ZeroPage => (self.fetch() as u16, false),

            AddressingMode::ZeroPageX => {
                let base = self.fetch();
                (base.wrapping_add(self.x) as u16, false)
            }

            AddressingMode::ZeroPageY => {
                let base = self.fetch();
                (base.wrapping_add(self.y) as u16, false)
            }

            AddressingMode::Absolute => (self.fetch_word(), false),

            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.x as u16);
                (addr, page_crossed(base, addr))
            }

            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.y as u16);
                (addr, page_crossed(base, addr))
            }

            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                let lo = self.bus.read(ptr) as u16;
                // The NMOS part increments only the low pointer byte, so a
                // pointer at $xxFF wraps within its page. The CMOS option
                // selects the corrected carry.
                let hi_addr = if self.opts.cmos_indirect_jmp {
                    ptr.wrapping_add(1)
                } else {
                    (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF)
                };
                let hi = self.bus.read(hi_addr) as u16;
                ((hi << 8) | lo, false)
            }

            AddressingMode::IndirectX => {
                let zp = self.fetch().wrapping_add(self.x);
                let lo = self.bus.read(zp as u16) as u16;
                let hi = self.bus.read(zp.wrapping_add(1) as u16) as u16;
                ((hi << 8) | lo, false)
            }

            AddressingMode::IndirectY => {
                let zp = self.fetch();
                let lo = self.bus.read(zp as u16) as u16;
                let hi = self.bus.read(zp.wrapping_add(1) as u16) as u16;
                let base = (hi << 8) | lo;
                let addr = base.wrapping_add(self.y as u16);
                (addr, page_crossed(base, addr))
            }

            AddressingMode::Relative => {
                let offset = self.fetch() as i8;
                let target = self.pc.wrapping_add_signed(offset as i16);
                (target, page_crossed(self.pc, target))
            }
        }
    }

    /// Dispatches the operation. Returns any extra cycles beyond the base
    /// count and the page-cross penalty: only taken branches produce
    /// them.
    fn execute(&mut self, op: Op, addr: u16, mode: AddressingMode, page_crossed: bool) -> u64 {
        match op {
            Op::Bcc => return branches::bcc(self, addr, page_crossed),
            Op::Bcs => return branches::bcs(self, addr, page_crossed),
            Op::Beq => return branches::beq(self, addr, page_crossed),
            Op::Bne => return branches::bne(self, addr, page_crossed),
            Op::Bmi => return branches::bmi(self, addr, page_crossed),
            Op::Bpl => return branches::bpl(self, addr, page_crossed),
            Op::Bvc => return branches::bvc(self, addr, page_crossed),
            Op::Bvs => return branches::bvs(self, addr, page_crossed),

            Op::Adc => alu::adc(self, addr),
            Op::Sbc => alu::sbc(self, addr),
            Op::And => alu::and(self, addr),
            Op::Eor => alu::eor(self, addr),
            Op::Ora => alu::ora(self, addr),
            Op::Bit => alu::bit(self, addr),
            Op::Cmp => alu::cmp(self, addr),
            Op::Cpx => alu::cpx(self, addr),
            Op::Cpy => alu::cpy(self, addr),

            Op::Asl => shifts::asl(self, addr, mode),
            Op::Lsr => shifts::lsr(self, addr, mode),
            Op::Rol => shifts::rol(self, addr, mode),
            Op::Ror => shifts::ror(self, addr, mode),

            Op::Lda => load_store::lda(self, addr),
            Op::Ldx => load_store::ldx(self, addr),
            Op::Ldy => load_store::ldy(self, addr),
            Op::Sta => load_store::sta(self, addr),
            Op::Stx => load_store::stx(self, addr),
            Op::Sty => load_store::sty(self, addr),

            Op::Inc => inc_dec::inc(self, addr),
            Op::Dec => inc_dec::dec(self, addr),
            Op::Inx => inc_dec::inx(self),
            Op::Iny => inc_dec::iny(self),
            Op::Dex => inc_dec::dex(self),
            Op::Dey => inc_dec::dey(self),

            Op::Jmp => control::jmp(self, addr),
            Op::Jsr => control::jsr(self, addr),
            Op::Rts => control::rts(self),
            Op::Rti => control::rti(self),
            Op::Brk => control::brk(self),
            Op::Nop => control::nop(self, addr, mode),

            Op::Clc => flags::clc(self),
            Op::Sec => flags::sec(self),
            Op::Cld => flags::cld(self),
            Op::Sed => flags::sed(self),
            Op::Cli => flags::cli(self),
            Op::Sei => flags::sei(self),
            Op::Clv => flags::clv(self),

            Op::Pha => stack::pha(self),
            Op::Php => stack::php(self),
            Op::Pla => stack::pla(self),
            Op::Plp => stack::plp(self),

            Op::Tax => transfer::tax(self),
            Op::Tay => transfer::tay(self),
            Op::Txa => transfer::txa(self),
            Op::Tya => transfer::tya(self),
            Op::Tsx => transfer::tsx(self),
            Op::Txs => transfer::txs(self),

            Op::Lax => undocumented::lax(self, addr),
            Op::Sax => undocumented::sax(self, addr),
            Op::Dcp => undocumented::dcp(self, addr),
            Op::Isc => undocumented::isc(self, addr),
            Op::Slo => undocumented::slo(self, addr),
            Op::Rla => undocumented::rla(self, addr),
            Op::Sre => undocumented::sre(self, addr),
            Op::Rra => undocumented::rra(self, addr),
            Op::Anc => undocumented::anc(self, addr),
            Op::Alr => undocumented::alr(self, addr),
            Op::Arr => undocumented::arr(self, addr),
            Op::Sbx => undocumented::sbx(self, addr),
            Op::Usbc => undocumented::usbc(self, addr),
            Op::Las => undocumented::las(self, addr),
            Op::Ane => undocumented::ane(self, addr),
            Op::Lxa => undocumented::lxa(self, addr),
            Op::Sha => undocumented::sha(self, addr),
            Op::Shx => undocumented::shx(self, addr),
            Op::Shy => undocumented::shy(self, addr),
            Op::Tas => undocumented::tas(self, addr),

            Op::Jam => self.jammed = true,
        }
        0
    }

    /// Invokes the per-cycle hook once for each of the `spent` cycles just
    /// accounted.
    fn tick(&mut self, spent: u64) {
        if self.cycle_hook.is_none() {
            return;
        }
        let mut snap = Snapshot {
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            pc: self.pc,
            status: self.p.bits(),
            cycles: 0,
        };
        let base = self.cycles - spent;
        if let Some(hook) = self.cycle_hook.as_mut() {
            for i in 0..spent {
                snap.cycles = base + i + 1;
                hook(snap);
            }
        }
    }

    /// Reads the byte at PC and advances PC.
    fn fetch(&mut self) -> u8 {
        let byte = self.bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Reads a little-endian word at PC and advances PC past it.
    fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch() as u16;
        let hi = self.fetch() as u16;
        (hi << 8) | lo
    }

    /// Reads the operand for `mode`: the accumulator for accumulator mode,
    /// the bus otherwise.
    pub(crate) fn read_operand(&self, addr: u16, mode: AddressingMode) -> u8 {
        if mode == AddressingMode::Accumulator {
            self.a
        } else {
            self.bus.read(addr)
        }
    }

    /// Writes the operand back for `mode`.
    pub(crate) fn write_operand(&mut self, addr: u16, mode: AddressingMode, value: u8) {
        if mode == AddressingMode::Accumulator {
            self.a = value;
        } else {
            self.bus.write(addr, value);
        }
    }

    // ========== Stack operations ==========

    /// Pushes a byte onto the hardware stack, wrapping within page 1.
    pub fn push(&mut self, byte: u8) {
        self.bus.write(STACK_BASE + self.sp as u16, byte);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls a byte off the hardware stack, wrapping within page 1.
    pub fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.bus.read(STACK_BASE + self.sp as u16)
    }

    /// Pushes a word, high byte first, matching JSR/interrupt order.
    pub fn push_word(&mut self, word: u16) {
        self.push((word >> 8) as u8);
        self.push(word as u8);
    }

    /// Pulls a word pushed by [`CPU::push_word`].
    pub fn pop_word(&mut self) -> u16 {
        let lo = self.pop() as u16;
        let hi = self.pop() as u16;
        (hi << 8) | lo
    }

    // ========== Register accessors ==========

    /// Accumulator value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Stack pointer value. The full stack address is $0100 + SP; the
    /// stack grows downward from $01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Packed status byte (`NV-BDIZC`); the constant bit always reads 1.
    pub fn status(&self) -> u8 {
        self.p.bits()
    }

    /// Typed view of the status register.
    pub fn p(&self) -> Status {
        self.p
    }

    /// Total cycles elapsed since reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Instructions completed since reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Whether the fatal illegal-opcode latch is set. Only reset clears
    /// it.
    pub fn jammed(&self) -> bool {
        self.jammed
    }

    /// Whether a host power-off request has stopped the core.
    pub fn powered_off(&self) -> bool {
        self.power_off
    }

    /// Shared access to the bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutable access to the bus, for hosts and tests that need to poke
    /// memory directly.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    // ========== Status flag getters ==========

    pub fn flag_n(&self) -> bool {
        self.p.negative()
    }

    pub fn flag_v(&self) -> bool {
        self.p.overflow()
    }

    pub fn flag_b(&self) -> bool {
        self.p.brk()
    }

    pub fn flag_d(&self) -> bool {
        self.p.decimal()
    }

    pub fn flag_i(&self) -> bool {
        self.p.interrupt()
    }

    pub fn flag_z(&self) -> bool {
        self.p.zero()
    }

    pub fn flag_c(&self) -> bool {
        self.p.carry()
    }

    // ========== Debugger/test setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the packed status byte; the constant bit is forced set.
    pub fn set_status(&mut self, value: u8) {
        self.p.set_bits(value);
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.p.set_negative(value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.p.set_overflow(value);
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.p.set_brk(value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.p.set_decimal(value);
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.p.set_interrupt(value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.p.set_zero(value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.p.set_carry(value);
    }
}

/// True when `a` and `b` are on different 256-byte pages.
fn page_crossed(a: u16, b: u16) -> bool {
    (a ^ b) & 0xFF00 != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write_word(0xFFFC, 0x8000);
        CPU::new(mem)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.steps(), 0);
        assert!(!cpu.jammed());
        assert!(!cpu.powered_off());

        // Power-on status: constant and break set, nothing else.
        assert_eq!(cpu.status(), 0b0011_0000);
    }

    #[test]
    fn test_configurable_reset_registers() {
        let mut mem = FlatMemory::new();
        mem.write_word(0xFFFC, 0x8000);

        let opts = CpuOptions {
            reset_a: 0x11,
            reset_x: 0x22,
            reset_y: 0x33,
            ..CpuOptions::default()
        };
        let cpu = CPU::with_options(mem, opts);

        assert_eq!(cpu.a(), 0x11);
        assert_eq!(cpu.x(), 0x22);
        assert_eq!(cpu.y(), 0x33);
    }

    #[test]
    fn test_stack_push_pop_wraps_in_page_one() {
        let mut cpu = setup_cpu();

        cpu.set_sp(0x00);
        cpu.push(0xAB);
        assert_eq!(cpu.bus().read(0x0100), 0xAB);
        assert_eq!(cpu.sp(), 0xFF);

        assert_eq!(cpu.pop(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_push_word_order() {
        let mut cpu = setup_cpu();

        cpu.push_word(0x1234);
        // High byte pushed first, so it sits at the higher address.
        assert_eq!(cpu.bus().read(0x01FD), 0x12);
        assert_eq!(cpu.bus().read(0x01FC), 0x34);
        assert_eq!(cpu.pop_word(), 0x1234);
    }

    #[test]
    fn test_step_latches_on_undocumented_when_disabled() {
        let mut cpu = setup_cpu();
        cpu.bus_mut().write(0x8000, 0x04); // NOP zp, undocumented

        assert!(!cpu.step());
        assert!(cpu.jammed());
        // Further stepping is refused until reset.
        assert!(!cpu.step());
        assert_eq!(cpu.steps(), 1);

        cpu.reset();
        assert!(!cpu.jammed());
    }

    #[test]
    fn test_reset_reloads_vector() {
        let mut cpu = setup_cpu();
        cpu.bus_mut().write_word(0xFFFC, 0xC000);
        cpu.reset();
        assert_eq!(cpu.pc(), 0xC000);
        assert_eq!(cpu.cycles(), 0);
    }
}
