//! The fetch-decode-dispatch loop. Every instruction touches this module, so
//! it holds the performance-critical path and the invariants that govern
//! segment-0 self-modification (LOADP).

use log::{info, trace};

use crate::error::VmError;
use crate::instruction::{Instruction, Opcode};
use crate::io::IoPort;
use crate::registers::Registers;
use crate::segment::SegmentStore;

/// An owned virtual machine: registers, segment store, and I/O port, with no
/// process-wide/global state. One `Vm` per process; dropping it releases
/// every still-mapped segment through ordinary `Drop`.
pub struct Vm<P: IoPort> {
    registers: Registers,
    store: SegmentStore,
    io: P,
    pc: u32,
}

impl<P: IoPort> Vm<P> {
    pub fn new(program: Vec<u32>, io: P) -> Vm<P> {
        Vm {
            registers: Registers::new(),
            store: SegmentStore::new(program),
            io,
            pc: 0,
        }
    }

    /// Read a register's current value. Intended for tests; the dispatch
    /// loop itself indexes `self.registers` directly.
    pub fn register(&self, i: u32) -> u32 {
        self.registers[i]
    }

    /// Consume the VM and return its I/O port, e.g. to inspect a test
    /// double's captured output after a run.
    pub fn into_io(self) -> P {
        self.io
    }

    /// Run until `HALT` or a fatal fault. Returns `Ok(())` on a clean halt.
    pub fn run(&mut self) -> Result<(), VmError> {
        let mut executed = 0_u64;
        loop {
            let word = self.store.fetch(self.pc);
            let instr = Instruction::decode(word)?;
            executed += 1;
            match self.step(instr)? {
                Step::Continue => self.pc += 1,
                Step::Jump(target) => self.pc = target,
                Step::Halt => {
                    info!("{executed} instructions executed");
                    return Ok(());
                }
            }
        }
    }

    fn step(&mut self, instr: Instruction) -> Result<Step, VmError> {
        let r = &mut self.registers;
        match instr.opcode {
            Opcode::CMov => {
                if r[instr.c] != 0 {
                    r[instr.a] = r[instr.b];
                }
            }
            Opcode::SLoad => {
                r[instr.a] = self.store.load(r[instr.b], r[instr.c]);
            }
            Opcode::SStore => {
                self.store.store(r[instr.a], r[instr.b], r[instr.c]);
            }
            Opcode::Add => {
                r[instr.a] = r[instr.b].wrapping_add(r[instr.c]);
            }
            Opcode::Mul => {
                r[instr.a] = r[instr.b].wrapping_mul(r[instr.c]);
            }
            Opcode::Div => {
                if r[instr.c] == 0 {
                    return Err(VmError::DivisionByZero);
                }
                r[instr.a] = r[instr.b] / r[instr.c];
            }
            Opcode::Nand => {
                r[instr.a] = !(r[instr.b] & r[instr.c]);
            }
            Opcode::Halt => return Ok(Step::Halt),
            Opcode::Map => {
                let handle = self.store.map(r[instr.c]);
                trace!("MAP size={} -> handle={handle}", r[instr.c]);
                r[instr.b] = handle;
            }
            Opcode::Unmap => {
                trace!("UNMAP handle={}", r[instr.c]);
                self.store.unmap(r[instr.c]);
            }
            Opcode::Out => {
                self.io.output(r[instr.c])?;
            }
            Opcode::In => {
                r[instr.c] = self.io.input()?;
            }
            Opcode::LoadProgram => {
                let source = r[instr.b];
                if source != 0 {
                    trace!("LOADP replacing segment 0 from handle={source}");
                    self.store.replace_zero(source);
                }
                return Ok(Step::Jump(r[instr.c]));
            }
            Opcode::Lv => {
                r[instr.a] = instr.immediate;
            }
        }
        Ok(Step::Continue)
    }
}

enum Step {
    Continue,
    Jump(u32),
    Halt,
}
