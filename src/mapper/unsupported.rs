use crate::mapper::Mapper;

// Stands in for boards not implemented yet. Keeps the bus total by answering 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported {
    id: u8,
}

impl Unsupported {
    pub fn new(id: u8) -> Self { Self { id } }

    pub fn id(&self) -> u8 { self.id }
}

impl Mapper for Unsupported {
    fn read_expansion(&self, _addr: u16) -> u8 { 0 }
    fn read_lower_bank(&self, _addr: u16) -> u8 { 0 }
    fn read_upper_bank(&self, _addr: u16) -> u8 { 0 }
}
