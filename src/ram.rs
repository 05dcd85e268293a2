use std::fmt;

use pretty_hex::PrettyHex;

// RAM Size
pub const RAM_CAPACITY: usize = 0x0800;

// Only the lower 11 address lines reach the RAM chip.
const RAM_MASK: u16 = 0x07ff;

// Internal 2KB of work RAM. Addresses 0x0000-0x1fff mirror it four times.
#[derive(Copy, Clone, PartialEq)]
pub struct Ram(pub [u8; RAM_CAPACITY]);

impl Ram {
    // Power up state is all zeroes.
    pub fn new() -> Self { Ram([0; RAM_CAPACITY]) }

    // Index in the chip for an address in the mirrored area
    pub fn canon_addr(addr: u16) -> u16 { addr & RAM_MASK }

    // Read the value in RAM pointed by an address
    pub fn peek_at(&self, addr: u16) -> u8 { self.0[Self::canon_addr(addr) as usize] }

    // Write the value to RAM pointed by the address
    pub fn put_at(&mut self, addr: u16, value: u8) {
        self.0[Self::canon_addr(addr) as usize] = value;
    }
}

impl Default for Ram {
    fn default() -> Self { Self::new() }
}

impl fmt::Debug for Ram {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "RAM | {:?}", (&self.0[..]).hex_dump())
    }
}
