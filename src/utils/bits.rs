// Bit manipulation module

// Check if a bit is set
pub fn is_set(byte: u8, index: u8) -> bool {
    (byte & (1 << index)) != 0
}

// Keep only the high nybble
pub fn high_nybble(byte: u8) -> u8 { byte & 0xf0 }

// Create a word based on the two bytes
pub fn word(high: u8, low: u8) -> u16 { ((high as u16) << 8) | (low as u16) }
