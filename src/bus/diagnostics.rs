use crate::bus::location::Location;

// Something the bus absorbed instead of failing
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Diagnostic {
    // Data written into ROM, I/O registers or expansion. It was discarded.
    IgnoredWrite { location: Location, addr: u16, data: u8 },

    // I/O read with no registers attached. Read as 0.
    NoIoRegisters { location: Location, addr: u16 },

    // Access past the PRG RAM the cartridge has. Read as 0, writes discarded.
    PrgRamOutOfRange { addr: u16 },
}

// Receives everything the bus absorbs. Passed in when the bus is created.
pub trait Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic);
}

// Forwards to the log facade. Nothing is printed unless the host installs a logger.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::IgnoredWrite { location, addr, data } =>
                warn!("Attempted to write into {}. Addr: {:#06x}, data: {:#04x}.", location, addr, data),
            Diagnostic::NoIoRegisters { location, addr } =>
                warn!("Reading from {} with no device attached. Addr: {:#06x}.", location, addr),
            Diagnostic::PrgRamOutOfRange { addr } =>
                error!("Cartridge has no PRG RAM at {:#06x}. Defaulting to zero.", addr),
        }
    }
}

// Drops everything
#[derive(Debug, Default, Copy, Clone)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

// Keeps everything, in order
impl Diagnostics for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) { self.push(diagnostic) }
}
