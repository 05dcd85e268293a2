use crate::mapper::{Specs, CHR_BANK_SIZE, PRG_BANK_SIZE};
use crate::utils::bits;

// Magic number used to identify an iNES file
pub const INES_PREFIX: [u8; 4] = *b"NES\x1a";

// Bank and flag bytes right after the prefix
pub const METADATA_SIZE: usize = 5;

pub const TRAINER_SIZE: usize = 0x0200;
pub const PRG_RAM_BANK_SIZE: usize = 0x2000;

// Positions on the metadata
const PRG_ROM_BANKS: usize = 0;
const CHR_ROM_BANKS: usize = 1;
const FLAGS_A: usize = 2;
const FLAGS_B: usize = 3;
const PRG_RAM_BANKS: usize = 4;

// Bits on flags A
const BATTERY_BIT: u8 = 1;
const TRAINER_BIT: u8 = 2;

// Bits on flags B
const VERTICAL_BIT: u8 = 0;
const FOUR_SCREEN_BIT: u8 = 3;

// Nametable arrangement wired on the cartridge
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

impl Mirroring {
    // Four screen overrides the vertical bit.
    pub fn from_bits(four_screen: bool, vertical: bool) -> Self {
        if four_screen {
            Mirroring::FourScreen
        } else if vertical {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        }
    }
}

impl Default for Mirroring {
    fn default() -> Self { Mirroring::Horizontal }
}

// Decoded iNES metadata
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Header {
    // Amount of 16KB PRG ROM banks
    pub prg_rom_banks: u8,

    // Amount of 8KB CHR ROM banks
    pub chr_rom_banks: u8,

    pub mirroring: Mirroring,

    // RAM at 0x6000-0x7fff keeps its contents while powered off
    pub has_battery_backed_ram: bool,

    // 512 bytes between the header and the CHR ROM
    pub has_trainer: bool,

    pub mapper_id: u8,

    // Amount of 8KB PRG RAM banks. Zero only on an empty image.
    pub prg_ram_banks: u8,
}

impl Header {
    // Mirroring and the four screen override come from the same byte as the high nybble of the
    // mapper, not from the byte holding battery and trainer. Dumps in the wild depend on it.
    pub fn decode(metadata: &[u8; METADATA_SIZE]) -> Self {
        let flags_a = metadata[FLAGS_A];
        let flags_b = metadata[FLAGS_B];

        // High nybble of flags B is the high nybble of the mapper.
        // High nybble of flags A is the low nybble of the mapper.
        let mapper_id = bits::high_nybble(flags_b) | (bits::high_nybble(flags_a) >> 4);

        Self {
            prg_rom_banks: metadata[PRG_ROM_BANKS],
            chr_rom_banks: metadata[CHR_ROM_BANKS],
            mirroring: Mirroring::from_bits(
                bits::is_set(flags_b, FOUR_SCREEN_BIT),
                bits::is_set(flags_b, VERTICAL_BIT),
            ),
            has_battery_backed_ram: bits::is_set(flags_a, BATTERY_BIT),
            has_trainer: bits::is_set(flags_a, TRAINER_BIT),
            mapper_id,
            prg_ram_banks: metadata[PRG_RAM_BANKS].max(1),
        }
    }

    pub fn prg_rom_size(&self) -> usize { self.prg_rom_banks as usize * PRG_BANK_SIZE }

    pub fn chr_rom_size(&self) -> usize { self.chr_rom_banks as usize * CHR_BANK_SIZE }

    pub fn prg_ram_size(&self) -> usize { self.prg_ram_banks as usize * PRG_RAM_BANK_SIZE }

    // Storage the mapper needs for the ROM
    pub fn specs(&self) -> Specs {
        Specs {
            prg_banks: self.prg_rom_banks as usize,
            chr_banks: self.chr_rom_banks as usize,
        }
    }
}
