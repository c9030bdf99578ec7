//! Instruction-stream builder: packs `(op, a, b, c)` / `(Lv, a, imm25)` into
//! UM instruction words and serializes a stream of them to big-endian bytes.
//! This is the external test-stream builder spec.md describes; it depends
//! only on the instruction encoding, not on the VM itself.

#![allow(dead_code)]

use um::bits::new_u;

pub const R0: u32 = 0;
pub const R1: u32 = 1;
pub const R2: u32 = 2;
pub const R3: u32 = 3;
pub const R4: u32 = 4;
pub const R5: u32 = 5;
pub const R6: u32 = 6;
pub const R7: u32 = 7;

fn three_register(op: u32, a: u32, b: u32, c: u32) -> u32 {
    let mut word = 0_u64;
    word = new_u(word, 4, 28, op as u64).unwrap();
    word = new_u(word, 3, 6, a as u64).unwrap();
    word = new_u(word, 3, 3, b as u64).unwrap();
    word = new_u(word, 3, 0, c as u64).unwrap();
    word as u32
}

pub fn cmov(a: u32, b: u32, c: u32) -> u32 {
    three_register(0, a, b, c)
}
pub fn sload(a: u32, b: u32, c: u32) -> u32 {
    three_register(1, a, b, c)
}
pub fn sstore(a: u32, b: u32, c: u32) -> u32 {
    three_register(2, a, b, c)
}
pub fn add(a: u32, b: u32, c: u32) -> u32 {
    three_register(3, a, b, c)
}
pub fn mul(a: u32, b: u32, c: u32) -> u32 {
    three_register(4, a, b, c)
}
pub fn div(a: u32, b: u32, c: u32) -> u32 {
    three_register(5, a, b, c)
}
pub fn nand(a: u32, b: u32, c: u32) -> u32 {
    three_register(6, a, b, c)
}
pub fn halt() -> u32 {
    three_register(7, 0, 0, 0)
}
pub fn map(b: u32, c: u32) -> u32 {
    three_register(8, 0, b, c)
}
pub fn unmap(c: u32) -> u32 {
    three_register(9, 0, 0, c)
}
pub fn output(c: u32) -> u32 {
    three_register(10, 0, 0, c)
}
pub fn input(c: u32) -> u32 {
    three_register(11, 0, 0, c)
}
pub fn loadp(b: u32, c: u32) -> u32 {
    three_register(12, 0, b, c)
}
pub fn loadval(a: u32, value: u32) -> u32 {
    let mut word = 0_u64;
    word = new_u(word, 4, 28, 13).unwrap();
    word = new_u(word, 3, 25, a as u64).unwrap();
    word = new_u(word, 25, 0, value as u64).unwrap();
    word as u32
}

/// Serialize a stream of instruction words to big-endian bytes, matching
/// the program file format the loader reads.
pub fn to_bytes(stream: &[u32]) -> Vec<u8> {
    stream.iter().flat_map(|word| word.to_be_bytes()).collect()
}

/// Emit instructions that build an arbitrary 32-bit `value` into `dest`,
/// one byte at a time (`LV`'s immediate only holds 25 bits, too narrow for
/// a packed instruction word). Clobbers `scratch` and `const_256`.
pub fn emit_load_word(dest: u32, scratch: u32, const_256: u32, value: u32) -> Vec<u32> {
    let bytes = value.to_be_bytes();
    let mut out = vec![loadval(dest, bytes[0] as u32), loadval(const_256, 256)];
    for &byte in &bytes[1..] {
        out.push(mul(dest, dest, const_256));
        out.push(loadval(scratch, byte as u32));
        out.push(add(dest, dest, scratch));
    }
    out
}
