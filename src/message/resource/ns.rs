use super::*;

// An NsResource is an NS Resource record.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct NsResource {
    pub ns: String,
}

impl fmt::Display for NsResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.", self.ns)
    }
}

impl NsResource {
    pub fn read(buffer: &mut PacketBuffer) -> Result<Self> {
        Ok(NsResource {
            ns: buffer.read_qname()?,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) -> Result<()> {
        buffer.write_qname(&self.ns)
    }
}
