use std::fmt;

use crate::ram::Ram;

// Number of registers on each I/O window before it starts repeating
const IO_REGISTER_AMOUNT: u16 = 0x08;

// Describes a location on the CPU address space.
// The address carried is relative to the start of the region, already reduced by mirroring.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Location {
    // 0x0000-0x1fff. Four copies of the same 2KB.
    WorkRam(u16),

    // 0x2000-0x2007
    IoRegister(u16),

    // 0x2008-0x3fff. Repeats the eight registers above.
    IoRegisterMirror(u16),

    // 0x4000-0x401f. Offset counts from 0x4000, so 0x4000-0x4007 share offsets with 0x2000-0x2007.
    ApuIoRegister(u16),

    // 0x4020-0x5fff
    Expansion(u16),

    // 0x6000-0x7fff
    PrgRam(u16),

    // 0x8000-0xbfff
    LowerBank(u16),

    // 0xc000-0xffff
    UpperBank(u16),
}

impl Location {
    // Decode an address. Every address has exactly one location.
    pub fn of(addr: u16) -> Self {
        match addr {
            0x0000..=0x1fff => Location::WorkRam(Ram::canon_addr(addr)),
            0x2000..=0x2007 => Location::IoRegister(addr - 0x2000),
            0x2008..=0x3fff => Location::IoRegisterMirror((addr - 0x2000) % IO_REGISTER_AMOUNT),
            0x4000..=0x401f => Location::ApuIoRegister(addr - 0x4000),
            0x4020..=0x5fff => Location::Expansion(addr - 0x4020),
            0x6000..=0x7fff => Location::PrgRam(addr - 0x6000),
            0x8000..=0xbfff => Location::LowerBank(addr - 0x8000),
            0xc000..=0xffff => Location::UpperBank(addr - 0xc000),
        }
    }

    // Offset inside the region
    pub fn offset(self) -> u16 {
        match self {
            Location::WorkRam(offset)
            | Location::IoRegister(offset)
            | Location::IoRegisterMirror(offset)
            | Location::ApuIoRegister(offset)
            | Location::Expansion(offset)
            | Location::PrgRam(offset)
            | Location::LowerBank(offset)
            | Location::UpperBank(offset) => offset,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let region = match self {
            Location::WorkRam(_) => "work RAM",
            Location::IoRegister(_) => "I/O register",
            Location::IoRegisterMirror(_) => "I/O register mirror",
            Location::ApuIoRegister(_) => "APU and I/O register",
            Location::Expansion(_) => "expansion ROM",
            Location::PrgRam(_) => "PRG RAM",
            Location::LowerBank(_) => "PRG ROM lower bank",
            Location::UpperBank(_) => "PRG ROM upper bank",
        };
        write!(formatter, "{} +0x{:04x}", region, self.offset())
    }
}
