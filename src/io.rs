// Memory mapped registers owned by the PPU, APU and input devices.
//
// The bus hands the offset relative to the start of the register window, so 0x2002 arrives as 2
// and 0x4016 arrives as 0x16. Writes never reach the registers through this trait.
pub trait IoRegisters {
    // Reading some registers clears latches on the real hardware, so it'll be mutable here.
    fn read(&mut self, offset: u16) -> u8;
}

// Registers backed by a plain array. Used to stand in for the real devices.
#[derive(Debug, Clone, PartialEq)]
pub struct Latched(pub Vec<u8>);

impl IoRegisters for Latched {
    fn read(&mut self, offset: u16) -> u8 {
        self.0.get(offset as usize).cloned().unwrap_or(0)
    }
}
