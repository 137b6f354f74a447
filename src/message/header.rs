use super::*;

// HEADER_LEN is the length (in bytes) of a DNS header.
//
// A header is comprised of 6 uint16s and no padding.
pub const HEADER_LEN: usize = 12;

// Bits of the high flag byte.
const FLAG_RD: u8 = 1 << 0; // recursion desired
const FLAG_TC: u8 = 1 << 1; // truncated
const FLAG_AA: u8 = 1 << 2; // authoritative
const OPCODE_SHIFT: u8 = 3;
const OPCODE_MASK: u8 = 0x0F;
const FLAG_QR: u8 = 1 << 7; // query/response (response=1)

// Bits of the low flag byte.
const RCODE_MASK: u8 = 0x0F;
const FLAG_CD: u8 = 1 << 4; // checking disabled
const FLAG_AD: u8 = 1 << 5; // authed data
const FLAG_Z: u8 = 1 << 6; // reserved
const FLAG_RA: u8 = 1 << 7; // recursion available

// Header is a representation of a DNS message header.
//
// The four counts are only trusted to size the sections while reading;
// Message::write overwrites them with the real section lengths.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: u16,

    pub recursion_desired: bool,
    pub truncated: bool,
    pub authoritative: bool,
    pub op_code: OpCode,
    pub response: bool,

    pub rcode: RCode,
    pub checking_disabled: bool,
    pub authed_data: bool,
    pub z: bool,
    pub recursion_available: bool,

    pub questions: u16,
    pub answers: u16,
    pub authorities: u16,
    pub additionals: u16,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ";; ->>HEADER<<- opcode: {}, status: {}, id: {}\n;; flags:",
            self.op_code, self.rcode, self.id
        )?;
        let flags = [
            ("qr", self.response),
            ("aa", self.authoritative),
            ("tc", self.truncated),
            ("rd", self.recursion_desired),
            ("ra", self.recursion_available),
            ("z", self.z),
            ("ad", self.authed_data),
            ("cd", self.checking_disabled),
        ];
        for (name, set) in flags {
            if set {
                write!(f, " {name}")?;
            }
        }
        write!(
            f,
            "; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            self.questions, self.answers, self.authorities, self.additionals
        )
    }
}

impl Header {
    /// flags packs the two flag bytes.
    ///
    /// ```text
    /// byte 2: |QR|   Opcode  |AA|TC|RD|
    /// byte 3: |RA| Z|AD|CD|   RCODE   |
    /// ```
    pub fn flags(&self) -> (u8, u8) {
        let mut a = (self.op_code & OPCODE_MASK) << OPCODE_SHIFT;
        if self.recursion_desired {
            a |= FLAG_RD;
        }
        if self.truncated {
            a |= FLAG_TC;
        }
        if self.authoritative {
            a |= FLAG_AA;
        }
        if self.response {
            a |= FLAG_QR;
        }

        let mut b = (self.rcode as u8) & RCODE_MASK;
        if self.checking_disabled {
            b |= FLAG_CD;
        }
        if self.authed_data {
            b |= FLAG_AD;
        }
        if self.z {
            b |= FLAG_Z;
        }
        if self.recursion_available {
            b |= FLAG_RA;
        }

        (a, b)
    }

    /// set_flags unpacks the two flag bytes, leaving id and counts alone.
    pub fn set_flags(&mut self, a: u8, b: u8) {
        self.recursion_desired = a & FLAG_RD != 0;
        self.truncated = a & FLAG_TC != 0;
        self.authoritative = a & FLAG_AA != 0;
        self.op_code = (a >> OPCODE_SHIFT) & OPCODE_MASK;
        self.response = a & FLAG_QR != 0;

        self.rcode = RCode::from(b & RCODE_MASK);
        self.checking_disabled = b & FLAG_CD != 0;
        self.authed_data = b & FLAG_AD != 0;
        self.z = b & FLAG_Z != 0;
        self.recursion_available = b & FLAG_RA != 0;
    }

    pub fn read(buffer: &mut PacketBuffer) -> Result<Self> {
        let mut h = Header {
            id: buffer.read_u16()?,
            ..Default::default()
        };

        let [a, b] = buffer.read_u16()?.to_be_bytes();
        h.set_flags(a, b);

        h.questions = buffer.read_u16()?;
        h.answers = buffer.read_u16()?;
        h.authorities = buffer.read_u16()?;
        h.additionals = buffer.read_u16()?;

        Ok(h)
    }

    pub fn write(&self, buffer: &mut PacketBuffer) -> Result<()> {
        buffer.write_u16(self.id)?;

        let (a, b) = self.flags();
        buffer.write_u8(a)?;
        buffer.write_u8(b)?;

        buffer.write_u16(self.questions)?;
        buffer.write_u16(self.answers)?;
        buffer.write_u16(self.authorities)?;
        buffer.write_u16(self.additionals)
    }
}
