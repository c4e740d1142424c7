use crate::DomainError;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A validated dotted-quad IPv4 address.
///
/// Only constructed through [`Ipv4Address::parse`], so every instance holds
/// exactly four octets in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Address {
    octets: [u8; 4],
}

impl Ipv4Address {
    /// Parse and validate a raw dotted-quad string.
    ///
    /// Octets are always read as base-10, so `08` is eight and `010` is ten.
    /// Errors carry the literal text of the offending octet.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() != 4 {
            return Err(DomainError::InvalidFormat(raw.to_string()));
        }

        let mut octets = [0u8; 4];
        for (slot, part) in octets.iter_mut().zip(parts) {
            *slot = parse_octet(part)?;
        }

        Ok(Self { octets })
    }

    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// Octets joined in reverse order, as RBL zones expect them.
    pub fn reversed(&self) -> ReversedAddress {
        let [a, b, c, d] = self.octets;
        ReversedAddress(format!("{d}.{c}.{b}.{a}"))
    }
}

fn parse_octet(part: &str) -> Result<u8, DomainError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::NonNumeric(part.to_string()));
    }

    // All-digit strings only fail to parse on overflow.
    match part.parse::<u32>() {
        Ok(value) if value <= u8::MAX as u32 => Ok(value as u8),
        _ => Err(DomainError::OutOfRange(part.to_string())),
    }
}

impl FromStr for Ipv4Address {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(address: Ipv4Address) -> Self {
        Ipv4Addr::from(address.octets)
    }
}

/// Octet-reversed form of an [`Ipv4Address`], e.g. `1.2.0.192` for `192.0.2.1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReversedAddress(String);

impl ReversedAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReversedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Ipv4Address> for ReversedAddress {
    fn from(address: &Ipv4Address) -> Self {
        address.reversed()
    }
}
