pub mod a;
pub mod aaaa;
pub mod cname;
pub mod mx;
pub mod ns;

use std::fmt;

use a::*;
use aaaa::*;
use cname::*;
use mx::*;
use ns::*;

use super::*;

// A Resource is a DNS resource record.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub header: ResourceHeader,
    pub body: ResourceBody,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t", self.header)?;
        match &self.body {
            ResourceBody::A(a) => write!(f, "{a}"),
            ResourceBody::Aaaa(aaaa) => write!(f, "{aaaa}"),
            ResourceBody::Ns(ns) => write!(f, "{ns}"),
            ResourceBody::Cname(cname) => write!(f, "{cname}"),
            ResourceBody::Mx(mx) => write!(f, "{mx}"),
            // RFC 3597 generic form, without the data we never kept.
            ResourceBody::Unknown => write!(f, "\\# {}", self.header.length),
        }
    }
}

impl Resource {
    /// new builds a record whose header type matches body.
    pub fn new(name: &str, ttl: u32, body: ResourceBody) -> Self {
        Resource {
            header: ResourceHeader {
                name: name.to_owned(),
                typ: body.real_type().unwrap_or_default(),
                ttl,
                length: 0,
            },
            body,
        }
    }

    pub fn read(buffer: &mut PacketBuffer) -> Result<Self> {
        let header = ResourceHeader::read(buffer)?;

        let body = match header.typ {
            DnsType::A => ResourceBody::A(AResource::read(buffer)?),
            DnsType::Aaaa => ResourceBody::Aaaa(AaaaResource::read(buffer)?),
            DnsType::Ns => ResourceBody::Ns(NsResource::read(buffer)?),
            DnsType::Cname => ResourceBody::Cname(CnameResource::read(buffer)?),
            DnsType::Mx => ResourceBody::Mx(MxResource::read(buffer)?),
            DnsType::Unknown(code) => {
                log::debug!(
                    "skipping {} bytes of unknown record type {} for {}",
                    header.length,
                    code,
                    header.name
                );
                buffer.step(header.length as usize)?;
                ResourceBody::Unknown
            }
        };

        Ok(Resource { header, body })
    }

    /// write appends the wire format of the Resource and returns the number
    /// of bytes written. The header type and length are set from the body.
    pub fn write(&mut self, buffer: &mut PacketBuffer) -> Result<usize> {
        let start = buffer.pos();

        match self.body.real_type() {
            Some(typ) => self.header.typ = typ,
            // An empty body under a known type would be read back with the
            // next record's bytes as its data.
            None if self.header.typ.is_known() => {
                return Err(Error::ErrMissingRecordData(self.header.typ.to_string()));
            }
            None => log::warn!(
                "writing record type {} for {} without its data",
                self.header.typ,
                self.header.name
            ),
        }

        let len_off = self.header.write(buffer)?;
        let pre_len = buffer.pos();
        self.body.write(buffer)?;
        self.header.fix_len(buffer, len_off, pre_len)?;

        Ok(buffer.pos() - start)
    }
}

// A ResourceHeader is the header of a DNS resource record. There are
// many types of DNS resource records, but they all share the same header.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct ResourceHeader {
    // Name is the domain name for which this resource record pertains.
    pub name: String,

    // Type is the type of DNS resource record.
    //
    // This field will be set automatically during packing, except for
    // Unknown bodies which keep the type they were read with.
    pub typ: DnsType,

    // TTL is the length of time (measured in seconds) which this resource
    // record is valid for (time to live).
    pub ttl: u32,

    // Length is the length of data in the resource record after the header.
    //
    // This field will be set automatically during packing.
    pub length: u16,
}

impl fmt::Display for ResourceHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.\t{}\tIN\t{}", self.name, self.ttl, self.typ)
    }
}

impl ResourceHeader {
    pub fn read(buffer: &mut PacketBuffer) -> Result<Self> {
        let name = buffer.read_qname()?;
        let typ = DnsType::read(buffer)?;
        let _class = buffer.read_u16()?;
        let ttl = buffer.read_u32()?;
        let length = buffer.read_u16()?;

        Ok(ResourceHeader {
            name,
            typ,
            ttl,
            length,
        })
    }

    // write appends the wire format of the ResourceHeader with a placeholder
    // length and returns the offset of that length field.
    pub fn write(&self, buffer: &mut PacketBuffer) -> Result<usize> {
        buffer.write_qname(&self.name)?;
        self.typ.write(buffer)?;
        buffer.write_u16(CLASS_INET)?;
        buffer.write_u32(self.ttl)?;
        let len_off = buffer.pos();
        buffer.write_u16(0)?;
        Ok(len_off)
    }

    // fix_len backpatches the length field at len_off with the number of
    // bytes written since pre_len.
    pub fn fix_len(
        &mut self,
        buffer: &mut PacketBuffer,
        len_off: usize,
        pre_len: usize,
    ) -> Result<()> {
        let con_len = buffer.pos() - pre_len;
        // Bounded by the 512-byte packet, so it always fits.
        self.length = con_len as u16;
        buffer.set_u16(len_off, self.length)
    }
}

// A ResourceBody is a DNS resource record minus the header.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum ResourceBody {
    A(AResource),
    Aaaa(AaaaResource),
    Ns(NsResource),
    Cname(CnameResource),
    Mx(MxResource),
    // A type without a codec here. Its data is skipped on read and written
    // back empty.
    #[default]
    Unknown,
}

impl ResourceBody {
    // real_type returns the type implied by the body, None for Unknown.
    pub fn real_type(&self) -> Option<DnsType> {
        match self {
            ResourceBody::A(_) => Some(DnsType::A),
            ResourceBody::Aaaa(_) => Some(DnsType::Aaaa),
            ResourceBody::Ns(_) => Some(DnsType::Ns),
            ResourceBody::Cname(_) => Some(DnsType::Cname),
            ResourceBody::Mx(_) => Some(DnsType::Mx),
            ResourceBody::Unknown => None,
        }
    }

    pub fn write(&self, buffer: &mut PacketBuffer) -> Result<()> {
        match self {
            ResourceBody::A(a) => a.write(buffer),
            ResourceBody::Aaaa(aaaa) => aaaa.write(buffer),
            ResourceBody::Ns(ns) => ns.write(buffer),
            ResourceBody::Cname(cname) => cname.write(buffer),
            ResourceBody::Mx(mx) => mx.write(buffer),
            ResourceBody::Unknown => Ok(()),
        }
    }
}
