use std::net::{IpAddr, Ipv4Addr};

use super::*;

// An AResource is an A Resource record.
//
// The address is kept as an IpAddr; an IPv6 address is only accepted on
// write if it is IPv4-mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AResource {
    pub a: IpAddr,
}

impl Default for AResource {
    fn default() -> Self {
        AResource {
            a: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }
}

impl fmt::Display for AResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.a)
    }
}

impl AResource {
    // read ignores the record's data length and always consumes 4 bytes.
    pub fn read(buffer: &mut PacketBuffer) -> Result<Self> {
        let raw = buffer.read_u32()?;
        Ok(AResource {
            a: IpAddr::V4(Ipv4Addr::from(raw)),
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) -> Result<()> {
        let a = match self.a {
            IpAddr::V4(ip) => ip,
            IpAddr::V6(ip) => ip
                .to_ipv4_mapped()
                .ok_or(Error::ErrAddressWidthMismatch)?,
        };
        buffer.write_bytes(&a.octets())
    }
}
