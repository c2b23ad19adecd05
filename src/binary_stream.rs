use std::io;
use std::io::Write;

use crate::error::{Error, MalformedInputReason};

/// State for writing individual bits to a Writer
pub struct BitWriter<'a, T: Write> {
    /// the underlying output stream
    writer: &'a mut T,
    /// buffer of individual bits not yet written
    buffer: u8,
    /// how many bits are waiting to be written
    buffer_space_used: u8,
}

impl<'a, T: Write> BitWriter<'a, T> {
    pub fn new(writer: &'a mut T) -> BitWriter<'a, T> {
        BitWriter {
            writer,
            buffer: 0,
            buffer_space_used: 0,
        }
    }

    /// write a single bit, most significant bit of each byte first
    pub fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        if bit {
            self.buffer |= 0b10000000_u8 >> self.buffer_space_used;
        }
        self.buffer_space_used += 1;
        if self.buffer_space_used == 8 {
            self.writer.write_all(&[self.buffer])?;
            self.buffer_space_used = 0;
            self.buffer = 0; // depended upon in write_bit() and flush()
        }
        Ok(())
    }

    /// Flush all bits and the underlying writer;
    ///
    /// If there are non-byte-aligned bits still
    /// in the buffer, they will be written to the output
    /// with 0 padding to the next byte;
    pub fn flush(&mut self) -> io::Result<()> {
        if self.buffer_space_used != 0 {
            self.writer.write_all(&[self.buffer])?;
            self.buffer = 0;
            self.buffer_space_used = 0;
        }
        self.writer.flush()
    }
}

/// Packs a string of `'0'` and `'1'` characters into bytes.
pub fn pack_bits(bits: &str) -> crate::Result<Vec<u8>> {
    let mut output: Vec<u8> = Vec::with_capacity(bits.len().div_ceil(8));
    let mut writer = BitWriter::new(&mut output);
    for (position, character) in bits.chars().enumerate() {
        let bit = match character {
            '0' => false,
            '1' => true,
            character => {
                return Err(Error::MalformedInput(MalformedInputReason::InvalidBit {
                    position,
                    character,
                }))
            }
        };
        writer.write_bit(bit).map_err(Error::FailedToWriteOutput)?;
    }
    writer.flush().map_err(Error::FailedToWriteOutput)?;
    Ok(output)
}
