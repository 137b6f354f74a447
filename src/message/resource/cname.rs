use super::*;

// A CnameResource is a CNAME Resource record.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CnameResource {
    pub cname: String,
}

impl fmt::Display for CnameResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.", self.cname)
    }
}

impl CnameResource {
    pub fn read(buffer: &mut PacketBuffer) -> Result<Self> {
        Ok(CnameResource {
            cname: buffer.read_qname()?,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) -> Result<()> {
        buffer.write_qname(&self.cname)
    }
}
