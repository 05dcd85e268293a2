use std::io::{self, Read};

pub mod ines;

// Fill as much of the buffer as the reader can give. Stops early only at the end of the stream.
pub fn read_up_to(reader: &mut impl Read, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;

    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}

// Read a block of ROM. A short or failed read leaves the rest of the block zeroed.
pub fn read_block(reader: &mut impl Read, name: &str, size: usize) -> Vec<u8> {
    let mut block = vec![0; size];

    match read_up_to(reader, &mut block) {
        Ok(read) if read < size => {
            warn!("{} truncated: expected {} bytes, got {}. Filling the rest with zero.", name, size, read)
        }
        Ok(_) => {}
        Err(e) => warn!("Unable to read {}: {}. Filling it with zero.", name, e),
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;

    // Gives at most one byte per read and gets interrupted in between.
    struct Trickle {
        data: Vec<u8>,
        interrupt: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "again"));
            }
            if self.data.is_empty() || buf.is_empty() { return Ok(0); }
            buf[0] = self.data.remove(0);
            Ok(1)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "broken"))
        }
    }

    #[test]
    fn fills_from_partial_reads() {
        let mut reader = Trickle { data: vec![1, 2, 3, 4, 5], interrupt: false };
        let mut buffer = [0; 4];
        assert_eq!(read_up_to(&mut reader, &mut buffer).unwrap(), 4);
        assert_eq!(buffer, [1, 2, 3, 4]);
    }

    #[test]
    fn stops_at_end() {
        let mut buffer = [0; 4];
        assert_eq!(read_up_to(&mut &[9u8, 8][..], &mut buffer).unwrap(), 2);
        assert_eq!(buffer, [9, 8, 0, 0]);
    }

    #[test]
    fn propagates_errors() {
        let mut buffer = [0; 4];
        let err = read_up_to(&mut Broken, &mut buffer).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn short_block_zero_filled() {
        let block = read_block(&mut &[7u8, 7, 7][..], "PRG ROM", 8);
        assert_eq!(block, vec![7, 7, 7, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn broken_block_zero_filled() {
        assert_eq!(read_block(&mut Broken, "CHR ROM", 4), vec![0; 4]);
    }
}
