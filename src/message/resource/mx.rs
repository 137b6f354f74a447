use super::*;

// An MxResource is an MX Resource record.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MxResource {
    pub pref: u16,
    pub mx: String,
}

impl fmt::Display for MxResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}.", self.pref, self.mx)
    }
}

impl MxResource {
    pub fn read(buffer: &mut PacketBuffer) -> Result<Self> {
        let pref = buffer.read_u16()?;
        let mx = buffer.read_qname()?;
        Ok(MxResource { pref, mx })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) -> Result<()> {
        buffer.write_u16(self.pref)?;
        buffer.write_qname(&self.mx)
    }
}
