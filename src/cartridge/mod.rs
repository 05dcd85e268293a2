use std::error::Error;
use std::fmt;
use std::io::{self, Read};

use pretty_hex::PrettyHex;

use crate::loader::ines::{Header, INES_PREFIX, METADATA_SIZE, TRAINER_SIZE};
use crate::loader::{read_block, read_up_to};
use crate::mapper::{Mapper, Mmc};

#[derive(Debug, Eq, PartialEq)]
pub enum LoadError {
    // No stream was supplied
    InvalidArgument,
    Format(FormatError),
}

// The data is not an iNES image
#[derive(Debug, Eq, PartialEq)]
pub enum FormatError {
    UnableToReadPrefix(io::ErrorKind),
    InvalidPrefix,
    UnableToReadMetadata(io::ErrorKind),
    // Amount of metadata bytes found before the stream ended
    TruncatedMetadata(usize),
}

impl From<FormatError> for LoadError {
    fn from(error: FormatError) -> Self { LoadError::Format(error) }
}

impl fmt::Display for LoadError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::InvalidArgument => write!(formatter, "invalid argument: no cartridge stream"),
            LoadError::Format(error) => write!(formatter, "{}", error),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FormatError::UnableToReadPrefix(kind) => write!(formatter, "failed to read prefix: {:?}", kind),
            FormatError::InvalidPrefix => write!(formatter, "cartridge data is not in iNES format"),
            FormatError::UnableToReadMetadata(kind) =>
                write!(formatter, "failed to read cartridge metadata: {:?}", kind),
            FormatError::TruncatedMetadata(read) =>
                write!(formatter, "cartridge metadata truncated: {} of {} bytes", read, METADATA_SIZE),
        }
    }
}

impl Error for LoadError {}

impl Error for FormatError {}

// A parsed ROM image. Everything but the PRG RAM is fixed once loaded.
#[derive(Clone, PartialEq)]
pub struct Cartridge {
    pub header: Header,
    trainer: [u8; TRAINER_SIZE],
    chr_rom: Vec<u8>,
    prg_rom: Vec<u8>,
    pub prg_ram: Vec<u8>,
    pub mmc: Mmc,
}

impl Cartridge {
    // Parse an iNES image from a stream.
    // Either the whole cartridge is returned or nothing is.
    pub fn load(mut reader: impl Read) -> Result<Self, LoadError> {
        // Check prefix
        let mut prefix = [0; 4];
        let read = read_up_to(&mut reader, &mut prefix).map_err(|e| FormatError::UnableToReadPrefix(e.kind()))?;
        if read < prefix.len() || prefix != INES_PREFIX { return Err(FormatError::InvalidPrefix.into()); }

        // An image ending right after the prefix is an empty cartridge
        let mut metadata = [0; METADATA_SIZE];
        let read = read_up_to(&mut reader, &mut metadata).map_err(|e| FormatError::UnableToReadMetadata(e.kind()))?;
        match read {
            0 => return Ok(Self::empty()),
            METADATA_SIZE => {}
            _ => return Err(FormatError::TruncatedMetadata(read).into()),
        }

        let header = Header::decode(&metadata);
        debug!("Cartridge header: {:?}", header);

        let mut trainer = [0; TRAINER_SIZE];
        if header.has_trainer {
            trainer.copy_from_slice(&read_block(&mut reader, "Trainer", TRAINER_SIZE));
        }

        let mut mmc = Mmc::new(header.mapper_id, header.specs());

        // CHR ROM comes before PRG ROM
        let chr_rom = read_block(&mut reader, "CHR ROM", header.chr_rom_size());
        let prg_rom = read_block(&mut reader, "PRG ROM", header.prg_rom_size());
        mmc.load_chr_rom(&chr_rom);
        mmc.load_prg_rom(&prg_rom);

        Ok(Self {
            header,
            trainer,
            chr_rom,
            prg_rom,
            prg_ram: vec![0; header.prg_ram_size()],
            mmc,
        })
    }

    // Same as load, for callers that may not have a stream at all
    pub fn load_from<R: Read>(reader: Option<R>) -> Result<Self, LoadError> {
        match reader {
            Some(reader) => Self::load(reader),
            None => Err(LoadError::InvalidArgument),
        }
    }

    // Parse an image already in memory
    pub fn new(file: Vec<u8>) -> Result<Self, LoadError> {
        Self::load(&file[..])
    }

    // Cartridge with no banks at all
    pub fn empty() -> Self {
        Self {
            header: Header::default(),
            trainer: [0; TRAINER_SIZE],
            chr_rom: vec![],
            prg_rom: vec![],
            prg_ram: vec![],
            mmc: Mmc::default(),
        }
    }

    pub fn trainer(&self) -> Option<&[u8]> {
        if self.header.has_trainer { Some(&self.trainer[..]) } else { None }
    }

    pub fn chr_rom(&self) -> &[u8] { &self.chr_rom }

    pub fn prg_rom(&self) -> &[u8] { &self.prg_rom }

    // Index into PRG RAM. None past the RAM the cartridge has.
    pub fn read_prg_ram(&self, addr: u16) -> Option<u8> {
        self.prg_ram.get(addr as usize).cloned()
    }

    // Returns false if the address is past the RAM the cartridge has.
    pub fn write_prg_ram(&mut self, addr: u16, data: u8) -> bool {
        match self.prg_ram.get_mut(addr as usize) {
            Some(cell) => {
                *cell = data;
                true
            }
            None => false,
        }
    }
}

impl Default for Cartridge {
    fn default() -> Self { Self::empty() }
}

impl fmt::Debug for Cartridge {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        writeln!(formatter, "{:?}", self.header)?;
        writeln!(formatter, "MMC {}", self.mmc.id())?;
        if let Some(trainer) = self.trainer() {
            writeln!(formatter, "Trainer | {:?}\n", trainer.hex_dump())?;
        }
        writeln!(formatter, "PRG ROM | {:?}\n", (&self.prg_rom[..]).hex_dump())?;
        writeln!(formatter, "CHR ROM | {:?}\n", (&self.chr_rom[..]).hex_dump())?;
        write!(formatter, "PRG RAM | {:?}", (&self.prg_ram[..]).hex_dump())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::ines::Mirroring;
    use crate::mapper::{NROM, PRG_BANK_SIZE};

    fn image(metadata: [u8; METADATA_SIZE]) -> Vec<u8> {
        let mut file = INES_PREFIX.to_vec();
        file.extend_from_slice(&metadata);
        file
    }

    #[test]
    fn empty_input() {
        assert_eq!(Cartridge::new(vec![]).err(), Some(LoadError::Format(FormatError::InvalidPrefix)));
    }

    #[test]
    fn no_stream() {
        assert_eq!(Cartridge::load_from(None::<&[u8]>).err(), Some(LoadError::InvalidArgument));
    }

    #[test]
    fn some_stream() {
        let cartridge = Cartridge::load_from(Some(&INES_PREFIX[..])).unwrap();
        assert_eq!(cartridge, Cartridge::empty());
    }

    #[test]
    fn invalid_header() {
        let cartridge = Cartridge::new(b"invalid"[..].to_owned());
        assert_eq!(cartridge.err(), Some(LoadError::Format(FormatError::InvalidPrefix)));
    }

    #[test]
    fn short_prefix() {
        let cartridge = Cartridge::new(b"NE"[..].to_owned());
        assert_eq!(cartridge.err(), Some(LoadError::Format(FormatError::InvalidPrefix)));
    }

    #[test]
    fn no_cartridge_data() {
        let cartridge = Cartridge::new(INES_PREFIX.to_vec()).unwrap();
        assert_eq!(cartridge, Cartridge::empty());
        assert_eq!(cartridge.header, Header::default());
        assert!(cartridge.prg_ram.is_empty());
    }

    #[test]
    fn truncated_metadata() {
        let mut file = INES_PREFIX.to_vec();
        file.extend_from_slice(&[1, 1, 0]);
        assert_eq!(Cartridge::new(file).err(), Some(LoadError::Format(FormatError::TruncatedMetadata(3))));
    }

    #[test]
    fn without_battery_trainer_or_ram_banks() {
        let cartridge = Cartridge::new(image([30, 20, 240, 240, 0])).unwrap();
        assert_eq!(cartridge.header.prg_rom_banks, 30);
        assert_eq!(cartridge.header.chr_rom_banks, 20);
        assert_eq!(cartridge.header.mirroring, Mirroring::Horizontal);
        assert!(!cartridge.header.has_battery_backed_ram);
        assert!(!cartridge.header.has_trainer);
        assert_eq!(cartridge.header.mapper_id, 255);
        assert_eq!(cartridge.header.prg_ram_banks, 1);
        assert_eq!(cartridge.trainer(), None);
    }

    #[test]
    fn with_battery_and_trainer() {
        let cartridge = Cartridge::new(image([100, 200, 14, 128, 50])).unwrap();
        assert!(cartridge.header.has_battery_backed_ram);
        assert!(cartridge.header.has_trainer);
        assert_eq!(cartridge.header.mapper_id, 128);
        assert_eq!(cartridge.header.prg_ram_banks, 50);
        assert_eq!(cartridge.mmc.id(), 128);
    }

    #[test]
    fn sizes_follow_header_when_truncated() {
        let cartridge = Cartridge::new(image([2, 1, 0, 0, 0])).unwrap();
        assert_eq!(cartridge.prg_rom().len(), 2 * PRG_BANK_SIZE);
        assert_eq!(cartridge.chr_rom().len(), 0x2000);
        assert_eq!(cartridge.prg_ram.len(), 0x2000);
        assert!(cartridge.prg_rom().iter().all(|&b| b == 0));
    }

    #[test]
    fn blocks_in_order() {
        let mut file = image([1, 1, 0x04, 0x00, 0]);
        file.extend(vec![0x77; TRAINER_SIZE]);
        file.extend(vec![0xcc; 0x2000]);
        file.extend(vec![0xaa; PRG_BANK_SIZE]);

        let cartridge = Cartridge::new(file).unwrap();
        assert_eq!(cartridge.trainer(), Some(&[0x77; TRAINER_SIZE][..]));
        assert!(cartridge.chr_rom().iter().all(|&b| b == 0xcc));
        assert!(cartridge.prg_rom().iter().all(|&b| b == 0xaa));
        assert_eq!(cartridge.mmc.id(), NROM);
        assert_eq!(cartridge.mmc.read_lower_bank(0x0000), 0xaa);
        assert_eq!(cartridge.mmc.read_chr(0x1fff), 0xcc);
    }

    #[test]
    fn truncated_trainer() {
        let mut file = image([1, 1, 0x04, 0x00, 0]);
        file.extend(vec![0x77; 0x100]);

        let cartridge = Cartridge::new(file).unwrap();
        let trainer = cartridge.trainer().unwrap();
        assert_eq!(trainer.len(), TRAINER_SIZE);
        assert!(trainer[..0x100].iter().all(|&b| b == 0x77));
        assert!(trainer[0x100..].iter().all(|&b| b == 0));
        assert_eq!(cartridge.chr_rom().len(), 0x2000);
        assert!(cartridge.chr_rom().iter().all(|&b| b == 0));
        assert_eq!(cartridge.prg_rom().len(), PRG_BANK_SIZE);
        assert!(cartridge.prg_rom().iter().all(|&b| b == 0));
    }

    #[test]
    fn prg_ram_bounds() {
        let mut cartridge = Cartridge::new(image([1, 0, 0, 0, 0])).unwrap();
        assert!(cartridge.write_prg_ram(0x1fff, 0x42));
        assert_eq!(cartridge.read_prg_ram(0x1fff), Some(0x42));
        assert!(!cartridge.write_prg_ram(0x2000, 0x42));
        assert_eq!(cartridge.read_prg_ram(0x2000), None);
    }
}
