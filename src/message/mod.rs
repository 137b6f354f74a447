
pub mod header;
pub mod name;
pub mod question;
pub mod resource;

use std::fmt;
use std::str::FromStr;

use header::*;
use question::*;
use resource::*;

use crate::buffer::PacketBuffer;
use crate::error::*;

// Message formats

// A DnsType is the type of a DNS question or resource record.
//
// Types this crate has no body codec for decode as Unknown and keep their
// numeric code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DnsType {
    Unknown(u16),
    A,
    Ns,
    Cname,
    Mx,
    Aaaa,
}

impl Default for DnsType {
    fn default() -> Self {
        DnsType::Unknown(0)
    }
}

impl From<u16> for DnsType {
    fn from(v: u16) -> Self {
        match v {
            1 => DnsType::A,
            2 => DnsType::Ns,
            5 => DnsType::Cname,
            15 => DnsType::Mx,
            28 => DnsType::Aaaa,
            _ => DnsType::Unknown(v),
        }
    }
}

impl From<DnsType> for u16 {
    fn from(t: DnsType) -> Self {
        match t {
            DnsType::Unknown(v) => v,
            DnsType::A => 1,
            DnsType::Ns => 2,
            DnsType::Cname => 5,
            DnsType::Mx => 15,
            DnsType::Aaaa => 28,
        }
    }
}

impl fmt::Display for DnsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DnsType::A => write!(f, "A"),
            DnsType::Ns => write!(f, "NS"),
            DnsType::Cname => write!(f, "CNAME"),
            DnsType::Mx => write!(f, "MX"),
            DnsType::Aaaa => write!(f, "AAAA"),
            // RFC 3597 notation for types without a mnemonic.
            DnsType::Unknown(v) => write!(f, "TYPE{v}"),
        }
    }
}

impl FromStr for DnsType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.to_ascii_uppercase();
        match upper.as_str() {
            "A" => Ok(DnsType::A),
            "NS" => Ok(DnsType::Ns),
            "CNAME" => Ok(DnsType::Cname),
            "MX" => Ok(DnsType::Mx),
            "AAAA" => Ok(DnsType::Aaaa),
            _ => match upper.strip_prefix("TYPE").map(str::parse::<u16>) {
                Some(Ok(v)) => Ok(DnsType::from(v)),
                _ => Err(Error::ErrUnknownType(s.to_owned())),
            },
        }
    }
}

impl DnsType {
    // is_known reports whether the code has a body codec here, whatever
    // variant carries it.
    pub(crate) fn is_known(&self) -> bool {
        !matches!(DnsType::from(u16::from(*self)), DnsType::Unknown(_))
    }

    // Unknown(1) would come back as A, so a known code must use its variant.
    pub(crate) fn write(&self, buffer: &mut PacketBuffer) -> Result<()> {
        if let DnsType::Unknown(v) = *self {
            if self.is_known() {
                return Err(Error::ErrNonCanonicalType(v));
            }
        }
        buffer.write_u16((*self).into())
    }

    pub(crate) fn read(buffer: &mut PacketBuffer) -> Result<Self> {
        Ok(DnsType::from(buffer.read_u16()?))
    }
}

// CLASS_INET is the only class this codec speaks. It is written for every
// question and record and skipped without validation on read.
pub const CLASS_INET: u16 = 1;

// An OpCode is a DNS operation code.
pub type OpCode = u8;

// An RCode is a DNS response status code.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RCode {
    #[default]
    NoError = 0,
    FormatError = 1,
    ServerFailure = 2,
    NameError = 3,
    NotImplemented = 4,
    Refused = 5,
}

// Codes outside 1..=5 are not errors; they collapse to NoError.
impl From<u8> for RCode {
    fn from(v: u8) -> Self {
        match v {
            1 => RCode::FormatError,
            2 => RCode::ServerFailure,
            3 => RCode::NameError,
            4 => RCode::NotImplemented,
            5 => RCode::Refused,
            _ => RCode::NoError,
        }
    }
}

impl fmt::Display for RCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RCode::NoError => "NOERROR",
            RCode::FormatError => "FORMERR",
            RCode::ServerFailure => "SERVFAIL",
            RCode::NameError => "NXDOMAIN",
            RCode::NotImplemented => "NOTIMP",
            RCode::Refused => "REFUSED",
        };
        write!(f, "{s}")
    }
}

// Message is a representation of a DNS message.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Resource>,
    pub authorities: Vec<Resource>,
    pub additionals: Vec<Resource>,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;

        writeln!(f, ";; QUESTION SECTION:")?;
        for q in &self.questions {
            writeln!(f, "{q}")?;
        }

        let sections = [
            ("ANSWER", &self.answers),
            ("AUTHORITY", &self.authorities),
            ("ADDITIONAL", &self.additionals),
        ];
        for (title, records) in sections {
            if records.is_empty() {
                continue;
            }
            writeln!(f, "\n;; {title} SECTION:")?;
            for r in records {
                writeln!(f, "{r}")?;
            }
        }
        Ok(())
    }
}

impl Message {
    /// query builds a single-question message asking for recursion.
    pub fn query(id: u16, name: &str, typ: DnsType) -> Self {
        Message {
            header: Header {
                id,
                recursion_desired: true,
                ..Default::default()
            },
            questions: vec![Question {
                name: name.to_owned(),
                typ,
            }],
            ..Default::default()
        }
    }

    /// unpack parses a full Message from a received datagram.
    pub fn unpack(&mut self, msg: &[u8]) -> Result<()> {
        let mut buffer = PacketBuffer::from_bytes(msg)?;
        self.read(&mut buffer)
    }

    /// pack encodes a full Message. The header counts are recomputed from
    /// the section lengths first.
    pub fn pack(&mut self) -> Result<Vec<u8>> {
        let mut buffer = PacketBuffer::new();
        self.write(&mut buffer)?;
        Ok(buffer.as_bytes().to_vec())
    }

    /// read parses the header, then as many questions and records of each
    /// section as the header counts announce.
    pub fn read(&mut self, buffer: &mut PacketBuffer) -> Result<()> {
        self.header = Header::read(buffer)?;
        log::trace!(
            "unpacking id {}: {} questions, {} answers, {} authorities, {} additionals",
            self.header.id,
            self.header.questions,
            self.header.answers,
            self.header.authorities,
            self.header.additionals
        );

        self.questions = (0..self.header.questions)
            .map(|_| Question::read(buffer))
            .collect::<Result<_>>()?;
        self.answers = read_section(buffer, self.header.answers)?;
        self.authorities = read_section(buffer, self.header.authorities)?;
        self.additionals = read_section(buffer, self.header.additionals)?;

        Ok(())
    }

    /// write encodes the whole message into buffer.
    pub fn write(&mut self, buffer: &mut PacketBuffer) -> Result<()> {
        // A section longer than u16::MAX cannot be counted in the header.
        self.header.questions =
            u16::try_from(self.questions.len()).map_err(|_| Error::ErrTooManyQuestions)?;
        self.header.answers =
            u16::try_from(self.answers.len()).map_err(|_| Error::ErrTooManyAnswers)?;
        self.header.authorities =
            u16::try_from(self.authorities.len()).map_err(|_| Error::ErrTooManyAuthorities)?;
        self.header.additionals =
            u16::try_from(self.additionals.len()).map_err(|_| Error::ErrTooManyAdditionals)?;

        self.header.write(buffer)?;

        for question in &self.questions {
            question.write(buffer)?;
        }
        for answer in &mut self.answers {
            answer.write(buffer)?;
        }
        for authority in &mut self.authorities {
            authority.write(buffer)?;
        }
        for additional in &mut self.additionals {
            additional.write(buffer)?;
        }

        log::trace!("packed id {} into {} bytes", self.header.id, buffer.pos());
        Ok(())
    }
}

fn read_section(buffer: &mut PacketBuffer, count: u16) -> Result<Vec<Resource>> {
    (0..count).map(|_| Resource::read(buffer)).collect()
}

/// decode parses a datagram of at most 512 bytes into a Message.
pub fn decode(msg: &[u8]) -> Result<Message> {
    let mut m = Message::default();
    m.unpack(msg)?;
    Ok(m)
}

/// encode packs m, updating its header counts, and returns the wire bytes.
pub fn encode(m: &mut Message) -> Result<Vec<u8>> {
    m.pack()
}
