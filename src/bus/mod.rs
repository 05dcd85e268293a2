use std::fmt;

use pretty_hex::PrettyHex;

use crate::bus::diagnostics::{Diagnostic, Diagnostics, LogDiagnostics};
use crate::bus::location::Location;
use crate::cartridge::Cartridge;
use crate::io::IoRegisters;
use crate::mapper::Mapper;
use crate::ram::Ram;
use crate::utils::bits;

pub mod diagnostics;
pub mod location;

// CPU address bus. Routes every access to RAM, the I/O registers or the cartridge.
// Reads and writes never fail: whatever can't be honored is reported to the diagnostics.
pub struct Bus<'a, D: Diagnostics = LogDiagnostics> {
    ram: Ram,
    cartridge: &'a mut Cartridge,
    io: Option<&'a mut dyn IoRegisters>,
    diagnostics: D,
}

impl<'a> Bus<'a, LogDiagnostics> {
    pub fn new(cartridge: &'a mut Cartridge) -> Self {
        Self::with_diagnostics(cartridge, LogDiagnostics)
    }
}

impl<'a, D: Diagnostics> Bus<'a, D> {
    pub fn with_diagnostics(cartridge: &'a mut Cartridge, diagnostics: D) -> Self {
        Self { ram: Ram::new(), cartridge, io: None, diagnostics }
    }

    // Devices answering reads on 0x2000-0x3fff and 0x4000-0x401f
    pub fn attach_io(&mut self, io: &'a mut dyn IoRegisters) {
        self.io = Some(io);
    }

    pub fn cartridge(&self) -> &Cartridge { &*self.cartridge }

    pub fn diagnostics(&self) -> &D { &self.diagnostics }

    // Read an address
    pub fn read(&mut self, addr: u16) -> u8 {
        let location = Location::of(addr);
        match location {
            Location::WorkRam(offset) => self.ram.peek_at(offset),

            Location::IoRegister(_)
            | Location::IoRegisterMirror(_)
            | Location::ApuIoRegister(_) => self.read_io(location, addr),

            Location::Expansion(offset) => self.cartridge.mmc.read_expansion(offset),

            Location::PrgRam(offset) => match self.cartridge.read_prg_ram(offset) {
                Some(data) => data,
                None => {
                    self.diagnostics.report(Diagnostic::PrgRamOutOfRange { addr });
                    0
                }
            },

            Location::LowerBank(offset) => self.cartridge.mmc.read_lower_bank(offset),

            Location::UpperBank(offset) => self.cartridge.mmc.read_upper_bank(offset),
        }
    }

    // Write to an address. Only RAM keeps the data.
    pub fn write(&mut self, addr: u16, data: u8) {
        let location = Location::of(addr);
        match location {
            Location::WorkRam(offset) => self.ram.put_at(offset, data),

            Location::PrgRam(offset) => {
                if !self.cartridge.write_prg_ram(offset, data) {
                    self.diagnostics.report(Diagnostic::PrgRamOutOfRange { addr });
                }
            }

            _ => self.diagnostics.report(Diagnostic::IgnoredWrite { location, addr, data }),
        }
    }

    // Read a little endian word. Meant for the interrupt vectors and RAM: both bytes go through
    // read, so a word on the I/O registers reads two of them and triggers their side effects.
    pub fn read_word(&mut self, addr: u16) -> u16 {
        let low = self.read(addr);
        let high = self.read(addr.wrapping_add(1));
        bits::word(high, low)
    }

    // Copy of the memory the bus can change, for whoever observes from another thread.
    pub fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            ram: self.ram,
            prg_ram: self.cartridge.prg_ram.clone(),
        }
    }

    fn read_io(&mut self, location: Location, addr: u16) -> u8 {
        if let Some(io) = self.io.as_mut() {
            return io.read(location.offset());
        }

        self.diagnostics.report(Diagnostic::NoIoRegisters { location, addr });
        0
    }
}

impl<'a, D: Diagnostics> fmt::Debug for Bus<'a, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        writeln!(formatter, "{:?}", self.ram)?;
        write!(formatter, "{:?}", self.cartridge)
    }
}

// Work RAM and PRG RAM at some point in time
#[derive(Clone, PartialEq)]
pub struct MemorySnapshot {
    pub ram: Ram,
    pub prg_ram: Vec<u8>,
}

impl fmt::Debug for MemorySnapshot {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        writeln!(formatter, "{:?}", self.ram)?;
        write!(formatter, "PRG RAM | {:?}", (&self.prg_ram[..]).hex_dump())
    }
}
