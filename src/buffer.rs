#[cfg(test)]
mod buffer_test;

use crate::error::*;

// PACKET_SIZE is the conventional limit for a DNS message carried over UDP
// (RFC 1035 section 4.2.1).
pub const PACKET_SIZE: usize = 512;

/// PacketBuffer is a fixed 512-byte packet plus the position of a cursor.
///
/// Sequential reads and writes are big-endian and advance the cursor. Random
/// access (`get`, `get_range`, `set`, `set_u16`) never moves it. Every access
/// is checked against the end of the packet and fails with
/// [`Error::ErrBufferOutOfRange`] instead of panicking.
///
/// A buffer loaded with [`PacketBuffer::from_bytes`] additionally stops
/// sequential reads (`read*`, `step`) at the end of the received datagram,
/// so the zero padding behind it never decodes as data.
#[derive(Clone)]
pub struct PacketBuffer {
    pub buf: [u8; PACKET_SIZE],
    pub pos: usize,
    // end of the readable data
    end: usize,
}

impl Default for PacketBuffer {
    fn default() -> Self {
        PacketBuffer::new()
    }
}

impl std::fmt::Debug for PacketBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PacketBuffer")
            .field("pos", &self.pos)
            .field("buf", &&self.buf[..self.pos])
            .finish()
    }
}

impl PacketBuffer {
    pub fn new() -> Self {
        PacketBuffer {
            buf: [0; PACKET_SIZE],
            pos: 0,
            end: PACKET_SIZE,
        }
    }

    /// from_bytes loads a received datagram, leaving the cursor at the start.
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        if raw.len() > PACKET_SIZE {
            return Err(Error::ErrMessageTooLong);
        }
        let mut b = PacketBuffer::new();
        b.buf[..raw.len()].copy_from_slice(raw);
        b.end = raw.len();
        Ok(b)
    }

    /// pos returns the current position of the cursor.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// as_bytes returns everything written so far, i.e. the bytes before the
    /// cursor.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// step moves the cursor forward by `steps` bytes of readable data.
    pub fn step(&mut self, steps: usize) -> Result<()> {
        if self.pos + steps > self.end {
            return Err(Error::ErrBufferOutOfRange);
        }
        self.seek(self.pos + steps)
    }

    /// seek moves the cursor to an absolute position.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > PACKET_SIZE {
            return Err(Error::ErrBufferOutOfRange);
        }
        self.pos = pos;
        Ok(())
    }

    /// read returns the byte under the cursor and advances it.
    pub fn read(&mut self) -> Result<u8> {
        if self.pos >= self.end {
            return Err(Error::ErrBufferOutOfRange);
        }
        let r = self.buf[self.pos];
        self.pos += 1;
        Ok(r)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_be_bytes([self.read()?, self.read()?]))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes([
            self.read()?,
            self.read()?,
            self.read()?,
            self.read()?,
        ]))
    }

    /// get returns a single byte without moving the cursor.
    pub fn get(&self, pos: usize) -> Result<u8> {
        if pos >= PACKET_SIZE {
            return Err(Error::ErrBufferOutOfRange);
        }
        Ok(self.buf[pos])
    }

    /// get_range returns `len` bytes starting at `start` without moving the
    /// cursor. The range must end strictly before the last byte of the packet.
    pub fn get_range(&self, start: usize, len: usize) -> Result<&[u8]> {
        if start + len >= PACKET_SIZE {
            return Err(Error::ErrBufferOutOfRange);
        }
        Ok(&self.buf[start..start + len])
    }

    pub fn write_u8(&mut self, val: u8) -> Result<()> {
        if self.pos >= PACKET_SIZE {
            return Err(Error::ErrBufferOutOfRange);
        }
        self.buf[self.pos] = val;
        self.pos += 1;
        Ok(())
    }

    pub fn write_u16(&mut self, val: u16) -> Result<()> {
        self.write_bytes(&val.to_be_bytes())
    }

    pub fn write_u32(&mut self, val: u32) -> Result<()> {
        self.write_bytes(&val.to_be_bytes())
    }

    /// write_bytes appends raw bytes. Nothing is written if they do not fit.
    pub fn write_bytes(&mut self, b: &[u8]) -> Result<()> {
        let end = self.pos + b.len();
        if end > PACKET_SIZE {
            return Err(Error::ErrBufferOutOfRange);
        }
        self.buf[self.pos..end].copy_from_slice(b);
        self.pos = end;
        Ok(())
    }

    /// set overwrites a single byte without moving the cursor.
    pub fn set(&mut self, pos: usize, val: u8) -> Result<()> {
        if pos >= PACKET_SIZE {
            return Err(Error::ErrBufferOutOfRange);
        }
        self.buf[pos] = val;
        Ok(())
    }

    /// set_u16 backpatches a big-endian u16 at an already written position,
    /// e.g. a record's data length once its body has been written.
    pub fn set_u16(&mut self, pos: usize, val: u16) -> Result<()> {
        if pos + 1 >= PACKET_SIZE {
            return Err(Error::ErrBufferOutOfRange);
        }
        let [hi, lo] = val.to_be_bytes();
        self.set(pos, hi)?;
        self.set(pos + 1, lo)
    }
}
