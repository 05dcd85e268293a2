use crate::mapper::mapper000::Mapper000;
use crate::mapper::unsupported::Unsupported;

pub mod mapper000;
pub mod unsupported;

// Bank sizes as declared by the iNES header
pub const PRG_BANK_SIZE: usize = 0x4000;
pub const CHR_BANK_SIZE: usize = 0x2000;

// Mapper numbers with a board implemented
pub const NROM: u8 = 0;

// Memory management controller on the cartridge. Decides which physical byte answers an address.
// Addresses are relative to the start of each window on the bus.
pub trait Mapper {
    // 0x4020-0x5fff
    fn read_expansion(&self, addr: u16) -> u8;

    // 0x8000-0xbfff
    fn read_lower_bank(&self, addr: u16) -> u8;

    // 0xc000-0xffff
    fn read_upper_bank(&self, addr: u16) -> u8;

    // Pattern tables as seen by the PPU, 0x0000-0x1fff on its own bus.
    fn read_chr(&self, _addr: u16) -> u8 { 0 }

    // Called by the loader once the ROM blocks have been read.
    fn load_prg_rom(&mut self, _prg_rom: &[u8]) {}
    fn load_chr_rom(&mut self, _chr_rom: &[u8]) {}
}

// Amount of banks a board must be able to hold
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Specs {
    pub prg_banks: usize,
    pub chr_banks: usize,
}

// Every board known to the emulator.
// A new board is a new variant here plus an arm in each match; the bus doesn't change.
#[derive(Debug, Clone, PartialEq)]
pub enum Mmc {
    Nrom(Mapper000),
    Unsupported(Unsupported),
}

impl Mmc {
    // Select the board for a mapper number. Never fails: unknown numbers get a board that reads 0.
    pub fn new(id: u8, specs: Specs) -> Self {
        match id {
            NROM => Mmc::Nrom(Mapper000::new(specs)),
            _ => {
                warn!("Mapper {} not implemented. Every cartridge read will return 0.", id);
                Mmc::Unsupported(Unsupported::new(id))
            }
        }
    }

    // Mapper number this board answers to
    pub fn id(&self) -> u8 {
        match self {
            Mmc::Nrom(_) => NROM,
            Mmc::Unsupported(board) => board.id(),
        }
    }

    fn board(&self) -> &dyn Mapper {
        match self {
            Mmc::Nrom(board) => board,
            Mmc::Unsupported(board) => board,
        }
    }

    fn board_mut(&mut self) -> &mut dyn Mapper {
        match self {
            Mmc::Nrom(board) => board,
            Mmc::Unsupported(board) => board,
        }
    }
}

impl Mapper for Mmc {
    fn read_expansion(&self, addr: u16) -> u8 { self.board().read_expansion(addr) }
    fn read_lower_bank(&self, addr: u16) -> u8 { self.board().read_lower_bank(addr) }
    fn read_upper_bank(&self, addr: u16) -> u8 { self.board().read_upper_bank(addr) }
    fn read_chr(&self, addr: u16) -> u8 { self.board().read_chr(addr) }

    fn load_prg_rom(&mut self, prg_rom: &[u8]) { self.board_mut().load_prg_rom(prg_rom) }
    fn load_chr_rom(&mut self, chr_rom: &[u8]) { self.board_mut().load_chr_rom(chr_rom) }
}

impl Default for Mmc {
    fn default() -> Self { Mmc::Nrom(Mapper000::default()) }
}
