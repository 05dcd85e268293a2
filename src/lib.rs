#[macro_use]
extern crate log;

pub mod bus;
pub mod cartridge;
pub mod io;
pub mod loader;
pub mod mapper;
pub mod ram;
pub mod utils;

pub use crate::bus::Bus;
pub use crate::cartridge::{Cartridge, FormatError, LoadError};
pub use crate::mapper::{Mapper, Mmc, Specs};
