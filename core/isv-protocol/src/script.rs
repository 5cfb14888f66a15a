use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::error::ProtocolError;

/// Target alphabet of a rendered form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Script {
    #[default]
    Latin = 0,
    Cyrillic = 1,
}

impl Script {
    pub const ALL: [Script; 2] = [Script::Latin, Script::Cyrillic];

    pub const fn name(self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Cyrillic => "cyrillic",
        }
    }
}

impl FromStr for Script {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latin" | "lat" | "latn" => Ok(Script::Latin),
            "cyrillic" | "cyr" | "cyrl" => Ok(Script::Cyrillic),
            _ => Err(ProtocolError::UnknownScript(s.to_string())),
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orthographic convention ("flavorisation type") applied when rendering the
/// etymological internal spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Flavor {
    /// Full etymological alphabet, every diacritic kept.
    Etymological = 0,
    /// The standard orthography.
    #[default]
    Standard = 1,
    /// Standard without ě and y.
    Simplified = 2,
    /// Southern Slavic leaning spelling.
    Southern = 3,
    /// Northern Slavic leaning spelling.
    Northern = 4,
}

impl Flavor {
    pub const ALL: [Flavor; 5] = [
        Flavor::Etymological,
        Flavor::Standard,
        Flavor::Simplified,
        Flavor::Southern,
        Flavor::Northern,
    ];

    /// Identifier used by the dictionary front-end settings.
    pub const fn id(self) -> &'static str {
        match self {
            Flavor::Etymological => "2",
            Flavor::Standard => "3",
            Flavor::Simplified => "4",
            Flavor::Southern => "J",
            Flavor::Northern => "S",
        }
    }
}

impl FromStr for Flavor {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(flavor) = Flavor::ALL.iter().find(|f| f.id().eq_ignore_ascii_case(trimmed)) {
            return Ok(*flavor);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "etymological" => Ok(Flavor::Etymological),
            "standard" => Ok(Flavor::Standard),
            "simplified" => Ok(Flavor::Simplified),
            "southern" | "south" => Ok(Flavor::Southern),
            "northern" | "north" => Ok(Flavor::Northern),
            _ => Err(ProtocolError::UnknownFlavor(s.to_string())),
        }
    }
}

impl TryFrom<String> for Flavor {
    type Error = ProtocolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Flavor> for &'static str {
    fn from(flavor: Flavor) -> Self {
        flavor.id()
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
