use std::fmt;

use super::*;

// A Question is a DNS query. Its class is always IN and is not modeled.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Question {
    pub name: String,
    pub typ: DnsType,
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ";{}.\t\tIN\t{}", self.name, self.typ)
    }
}

impl Question {
    pub fn read(buffer: &mut PacketBuffer) -> Result<Self> {
        let name = buffer.read_qname()?;
        let typ = DnsType::read(buffer)?;
        let _class = buffer.read_u16()?;

        Ok(Question { name, typ })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) -> Result<()> {
        buffer.write_qname(&self.name)?;
        self.typ.write(buffer)?;
        buffer.write_u16(CLASS_INET)
    }
}
