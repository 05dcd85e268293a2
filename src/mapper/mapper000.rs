use std::fmt;

use pretty_hex::PrettyHex;

use crate::mapper::{Mapper, Specs, CHR_BANK_SIZE, PRG_BANK_SIZE};

// NROM. Banks are fixed: the lower window shows the first PRG bank and the upper window the last.
// Boards with a single bank show it on both windows.
#[derive(Default, Clone, PartialEq)]
pub struct Mapper000 {
    prg: Vec<u8>,
    chr: Vec<u8>,
}

impl Mapper000 {
    pub fn new(specs: Specs) -> Self {
        Self {
            prg: vec![0; specs.prg_banks * PRG_BANK_SIZE],
            chr: vec![0; specs.chr_banks * CHR_BANK_SIZE],
        }
    }

    fn read_prg(&self, bank_start: usize, addr: u16) -> u8 {
        let index = bank_start + addr as usize % PRG_BANK_SIZE;
        self.prg.get(index).cloned().unwrap_or(0)
    }
}

impl Mapper for Mapper000 {
    // No expansion hardware on the board
    fn read_expansion(&self, _addr: u16) -> u8 { 0 }

    fn read_lower_bank(&self, addr: u16) -> u8 { self.read_prg(0, addr) }

    fn read_upper_bank(&self, addr: u16) -> u8 {
        let last_bank = self.prg.len().saturating_sub(PRG_BANK_SIZE);
        self.read_prg(last_bank, addr)
    }

    fn read_chr(&self, addr: u16) -> u8 {
        if self.chr.is_empty() { return 0; }
        self.chr[addr as usize % self.chr.len()]
    }

    fn load_prg_rom(&mut self, prg_rom: &[u8]) {
        let len = self.prg.len().min(prg_rom.len());
        self.prg[..len].copy_from_slice(&prg_rom[..len]);
    }

    fn load_chr_rom(&mut self, chr_rom: &[u8]) {
        let len = self.chr.len().min(chr_rom.len());
        self.chr[..len].copy_from_slice(&chr_rom[..len]);
    }
}

impl fmt::Debug for Mapper000 {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        writeln!(formatter, "NROM PRG | {:?}", (&self.prg[..]).hex_dump())?;
        write!(formatter, "NROM CHR | {:?}", (&self.chr[..]).hex_dump())
    }
}
