use std::net::{IpAddr, Ipv6Addr};

use super::*;

// An AaaaResource is an AAAA Resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AaaaResource {
    pub aaaa: IpAddr,
}

impl Default for AaaaResource {
    fn default() -> Self {
        AaaaResource {
            aaaa: IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        }
    }
}

impl fmt::Display for AaaaResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.aaaa)
    }
}

impl AaaaResource {
    // read ignores the record's data length and always consumes 16 bytes,
    // as four words of two 16-bit segments each.
    pub fn read(buffer: &mut PacketBuffer) -> Result<Self> {
        let mut segments = [0u16; 8];
        for pair in segments.chunks_exact_mut(2) {
            let word = buffer.read_u32()?;
            pair[0] = (word >> 16) as u16;
            pair[1] = (word & 0xFFFF) as u16;
        }
        Ok(AaaaResource {
            aaaa: IpAddr::V6(Ipv6Addr::from(segments)),
        })
    }

    // write emits the eight segments; an IPv4 address is written in its
    // IPv4-mapped form.
    pub fn write(&self, buffer: &mut PacketBuffer) -> Result<()> {
        let aaaa = match self.aaaa {
            IpAddr::V6(ip) => ip,
            IpAddr::V4(ip) => ip.to_ipv6_mapped(),
        };
        for segment in aaaa.segments() {
            buffer.write_u16(segment)?;
        }
        Ok(())
    }
}
