//! Identifier generators and the tag-based generator selector.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::alphabet::Alphabet;
use crate::checksum::{malo_checksum, nelo_checksum, sr_checksum, tr_checksum};
use crate::error::IdError;
use crate::record::IdRecord;

/// Country code every generated MeLo starts with.
pub const MELO_COUNTRY_CODE: &str = "DE";

const MELO_OPERATOR_NUMBER_LENGTH: usize = 6;
const MELO_POSTAL_CODE_LENGTH: usize = 5;
const MELO_SERIAL_LENGTH: usize = 20;

/// A stateless generator for one identifier family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdGenerator {
    /// Marktlokation (market location), 11 digits.
    MaLo,
    /// Netzlokation (network location), `E` + 9 alphanumerics + check digit.
    NeLo,
    /// Messlokation (metering location), 33 characters without check digit.
    MeLo,
    /// Technische Ressource (technical resource), `D` + 9 alphanumerics + check digit.
    Tr,
    /// Steuerbare Ressource (controllable resource), `C` + 9 alphanumerics + check digit.
    Sr,
}

impl IdGenerator {
    /// All generators in selector order.
    pub const ALL: [IdGenerator; 5] = [
        IdGenerator::MaLo,
        IdGenerator::NeLo,
        IdGenerator::MeLo,
        IdGenerator::Tr,
        IdGenerator::Sr,
    ];

    /// The configuration tag that selects this generator.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            IdGenerator::MaLo => "MALO",
            IdGenerator::NeLo => "NELO",
            IdGenerator::MeLo => "MELO",
            IdGenerator::Tr => "TRID",
            IdGenerator::Sr => "SRID",
        }
    }

    /// The `type` value written into generated records.
    #[must_use]
    pub const fn id_type(&self) -> &'static str {
        match self {
            IdGenerator::MaLo => "MaLo",
            IdGenerator::NeLo => "NeLo",
            IdGenerator::MeLo => "MeLo",
            IdGenerator::Tr => "TR",
            IdGenerator::Sr => "SR",
        }
    }

    /// The fixed leading character of the identifier, if the family has one.
    #[must_use]
    pub const fn prefix(&self) -> Option<char> {
        match self {
            IdGenerator::MaLo | IdGenerator::MeLo => None,
            IdGenerator::NeLo => Some('E'),
            IdGenerator::Tr => Some('D'),
            IdGenerator::Sr => Some('C'),
        }
    }

    /// Total length of a generated identifier.
    #[must_use]
    pub const fn length(&self) -> usize {
        match self {
            IdGenerator::MeLo => {
                MELO_COUNTRY_CODE.len()
                    + MELO_OPERATOR_NUMBER_LENGTH
                    + MELO_POSTAL_CODE_LENGTH
                    + MELO_SERIAL_LENGTH
            }
            _ => 11,
        }
    }

    /// Lists the accepted selector tags.
    #[must_use]
    pub fn supported_tags() -> Vec<&'static str> {
        Self::ALL.iter().map(IdGenerator::tag).collect()
    }

    /// Picks the generator for a configured family tag (case-insensitive).
    pub fn select(tag: Option<&str>) -> Result<Self, IdError> {
        let Some(tag) = tag.map(str::trim).filter(|t| !t.is_empty()) else {
            return Err(IdError::MissingConfiguration);
        };

        Self::ALL
            .into_iter()
            .find(|generator| generator.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| IdError::UnsupportedIdType {
                value: tag.to_string(),
                supported: Self::supported_tags(),
            })
    }

    /// Generates a new identifier using the thread-local RNG.
    pub fn generate(&self) -> Result<IdRecord, IdError> {
        self.generate_with(&mut rand::rng())
    }

    /// Generates a new identifier drawing randomness from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<IdRecord, IdError> {
        match self {
            IdGenerator::MaLo => generate_malo(rng),
            IdGenerator::NeLo => {
                generate_prefixed(rng, *self, "neLoIdWithoutChecksum", nelo_checksum)
            }
            IdGenerator::Tr => generate_prefixed(rng, *self, "trIdWithoutChecksum", tr_checksum),
            IdGenerator::Sr => generate_prefixed(rng, *self, "srIdWithoutChecksum", sr_checksum),
            IdGenerator::MeLo => Ok(generate_melo(rng)),
        }
    }
}

impl fmt::Display for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id_type())
    }
}

impl FromStr for IdGenerator {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::select(Some(s))
    }
}

/// The authority that issues a MaLo, derived from its first digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Issuer {
    /// Deutscher Verein des Gas- und Wasserfaches (first digit 0-3).
    Dvgw,
    /// Bundesverband der Energie- und Wasserwirtschaft (first digit 4-9).
    Bdew,
}

impl Issuer {
    /// Classifies a MaLo by its leading digit.
    #[must_use]
    pub const fn from_first_digit(digit: u8) -> Self {
        if digit < 4 {
            Issuer::Dvgw
        } else {
            Issuer::Bdew
        }
    }

    /// Rollencodetyp as written on the page and in JSON records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Issuer::Dvgw => "DVGW",
            Issuer::Bdew => "BDEW",
        }
    }

    /// The energy division the issuing authority is responsible for.
    #[must_use]
    pub const fn division(&self) -> Division {
        match self {
            Issuer::Dvgw => Division::Gas,
            Issuer::Bdew => Division::Strom,
        }
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Energy division (Sparte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    /// Electricity.
    Strom,
    /// Natural gas.
    Gas,
}

impl Division {
    /// Upper-case Sparte name, `STROM` or `GAS`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Division::Strom => "STROM",
            Division::Gas => "GAS",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn generate_malo<R: Rng + ?Sized>(rng: &mut R) -> Result<IdRecord, IdError> {
    let payload = loop {
        let candidate = Alphabet::DIGITS.sample(rng, 10);
        if !candidate.starts_with('0') {
            break candidate;
        }
    };

    let checksum = malo_checksum(&payload).map_err(|e| IdError::checksum_failed("MaLo", e))?;
    let issuer = Issuer::from_first_digit(payload.as_bytes()[0] - b'0');
    let id = format!("{payload}{checksum}");

    Ok(IdRecord::new(id, IdGenerator::MaLo.id_type())
        .with("maLoIdWithoutChecksum", payload)
        .with("checksum", checksum.to_string())
        .with("issuer", issuer.as_str())
        .with("division", issuer.division().as_str()))
}

fn generate_prefixed<R: Rng + ?Sized>(
    rng: &mut R,
    generator: IdGenerator,
    payload_field: &'static str,
    checksum: fn(&str) -> Result<u8, IdError>,
) -> Result<IdRecord, IdError> {
    let mut payload = String::with_capacity(generator.length());
    payload.extend(generator.prefix());
    payload.push_str(&Alphabet::ALPHANUMERIC.sample(rng, 9));

    let check_digit =
        checksum(&payload).map_err(|e| IdError::checksum_failed(generator.id_type(), e))?;
    let id = format!("{payload}{check_digit}");

    Ok(IdRecord::new(id, generator.id_type())
        .with(payload_field, payload)
        .with("checksum", check_digit.to_string()))
}

fn generate_melo<R: Rng + ?Sized>(rng: &mut R) -> IdRecord {
    let operator_number = Alphabet::DIGITS.sample(rng, MELO_OPERATOR_NUMBER_LENGTH);
    let postal_code = Alphabet::DIGITS.sample(rng, MELO_POSTAL_CODE_LENGTH);
    let serial_number = Alphabet::ALPHANUMERIC.sample(rng, MELO_SERIAL_LENGTH);
    let id = format!("{MELO_COUNTRY_CODE}{operator_number}{postal_code}{serial_number}");

    IdRecord::new(id, IdGenerator::MeLo.id_type())
        .with("countryCode", MELO_COUNTRY_CODE)
        .with("gridOperatorNumber", operator_number)
        .with("postalCode", postal_code)
        .with("meteringPointNumber", serial_number)
}
