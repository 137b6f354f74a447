use crate::buffer::PacketBuffer;
use crate::error::*;

// MAX_JUMPS bounds how many compression pointers one name may follow, so a
// pointer cycle in a hostile packet cannot loop forever.
pub const MAX_JUMPS: usize = 5;

// MAX_LABEL_LEN is the longest label a length byte can announce without
// colliding with the pointer prefix.
pub const MAX_LABEL_LEN: usize = 0x3F;

const POINTER_MASK: u8 = 0xC0;

impl PacketBuffer {
    /// read_qname reads a domain name at the cursor, following compression
    /// pointers, and returns it in lowercase dotted form without a trailing
    /// dot.
    ///
    /// Takes something like `[3]www[6]google[3]com[0]` and returns
    /// `www.google.com`. If the name contains a pointer, the cursor ends up
    /// just past the first pointer; otherwise just past the terminating zero.
    pub fn read_qname(&mut self) -> Result<String> {
        // pos is a local cursor: pointers move it around the packet while
        // the real cursor stays where the next field starts.
        let mut pos = self.pos();

        let mut jumped = false;
        let mut jumps_performed = 0;

        let mut name = String::new();
        let mut delim = "";

        loop {
            if jumps_performed > MAX_JUMPS {
                return Err(Error::ErrTooManyJumps(MAX_JUMPS));
            }

            let len = self.get(pos)?;

            if len & POINTER_MASK == POINTER_MASK {
                if !jumped {
                    self.seek(pos + 2)?;
                }

                let b2 = self.get(pos + 1)? as usize;
                pos = (((len ^ POINTER_MASK) as usize) << 8) | b2;

                jumped = true;
                jumps_performed += 1;
                continue;
            }

            pos += 1;

            // Names are terminated by an empty label.
            if len == 0 {
                break;
            }

            name.push_str(delim);
            let label = self.get_range(pos, len as usize)?;
            name.push_str(&String::from_utf8_lossy(label).to_ascii_lowercase());
            delim = ".";

            pos += len as usize;
        }

        if !jumped {
            self.seek(pos)?;
        }

        Ok(name)
    }

    /// write_qname writes name as length-prefixed labels and a terminating
    /// zero. Pointers are never emitted.
    ///
    /// The empty name and "." encode as the root; a single trailing dot is
    /// accepted.
    pub fn write_qname(&mut self, name: &str) -> Result<()> {
        let name = name.strip_suffix('.').unwrap_or(name);

        if !name.is_empty() {
            for label in name.split('.') {
                let len = label.len();
                if len > MAX_LABEL_LEN {
                    return Err(Error::ErrLabelTooLong);
                }
                if len == 0 {
                    return Err(Error::ErrEmptyLabel);
                }

                self.write_u8(len as u8)?;
                self.write_bytes(label.as_bytes())?;
            }
        }

        self.write_u8(0)
    }
}
