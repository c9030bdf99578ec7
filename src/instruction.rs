//! Splits a 32-bit instruction word into an opcode and its operand fields.
//! Field positions are read out through the bit codec so the layout has one
//! source of truth, shared with the test-only instruction-stream builder.

use crate::bits::get_u;
use crate::error::VmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Opcode {
    CMov = 0,
    SLoad = 1,
    SStore = 2,
    Add = 3,
    Mul = 4,
    Div = 5,
    Nand = 6,
    Halt = 7,
    Map = 8,
    Unmap = 9,
    Out = 10,
    In = 11,
    LoadProgram = 12,
    Lv = 13,
}

impl Opcode {
    fn from_field(field: u32) -> Result<Opcode, VmError> {
        Ok(match field {
            0 => Opcode::CMov,
            1 => Opcode::SLoad,
            2 => Opcode::SStore,
            3 => Opcode::Add,
            4 => Opcode::Mul,
            5 => Opcode::Div,
            6 => Opcode::Nand,
            7 => Opcode::Halt,
            8 => Opcode::Map,
            9 => Opcode::Unmap,
            10 => Opcode::Out,
            11 => Opcode::In,
            12 => Opcode::LoadProgram,
            13 => Opcode::Lv,
            other => return Err(VmError::UnknownOpcode(other)),
        })
    }
}

/// A decoded instruction. For every opcode except `Lv`, `a`/`b`/`c` hold the
/// three register operands and `immediate` is unused; for `Lv`, `a` holds
/// the destination register and `immediate` the 25-bit literal.
#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    pub opcode: Opcode,
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub immediate: u32,
}

impl Instruction {
    /// Decode `word`, the high 4 bits (28-31) being the opcode field.
    pub fn decode(word: u32) -> Result<Instruction, VmError> {
        let word = word as u64;
        let opcode = Opcode::from_field(get_u(word, 4, 28) as u32)?;
        if opcode == Opcode::Lv {
            Ok(Instruction {
                opcode,
                a: get_u(word, 3, 25) as u32,
                b: 0,
                c: 0,
                immediate: get_u(word, 25, 0) as u32,
            })
        } else {
            Ok(Instruction {
                opcode,
                a: get_u(word, 3, 6) as u32,
                b: get_u(word, 3, 3) as u32,
                c: get_u(word, 3, 0) as u32,
                immediate: 0,
            })
        }
    }
}
