use serde::{Deserialize, Serialize};

/// Canonical fuel vocabulary, independent of the labels a page happens to use.
///
/// The derived ordering is the canonical order `PB95 < PB98 < ON < LPG`, which
/// is also the order the single-entity pages list their marker rows in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FuelCode {
    #[serde(rename = "PB95")]
    Pb95,
    #[serde(rename = "PB98")]
    Pb98,
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "LPG")]
    Lpg,
}

impl FuelCode {
    /// All codes in canonical order.
    pub const ALL: [FuelCode; 4] = [FuelCode::Pb95, FuelCode::Pb98, FuelCode::On, FuelCode::Lpg];

    /// Canonical code string, e.g. `"PB95"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FuelCode::Pb95 => "PB95",
            FuelCode::Pb98 => "PB98",
            FuelCode::On => "ON",
            FuelCode::Lpg => "LPG",
        }
    }

    /// Maps a page label to its canonical code.
    ///
    /// Accepts the city-table labels (`E95`, `E98`, `ON`, `LPG`) and the
    /// already-canonical `PB95`/`PB98`. Matching is case-insensitive and
    /// ignores surrounding whitespace; anything else is `None`.
    #[must_use]
    pub fn from_page_label(label: &str) -> Option<FuelCode> {
        let label = label.trim();
        [
            ("E95", FuelCode::Pb95),
            ("PB95", FuelCode::Pb95),
            ("E98", FuelCode::Pb98),
            ("PB98", FuelCode::Pb98),
            ("ON", FuelCode::On),
            ("LPG", FuelCode::Lpg),
        ]
        .into_iter()
        .find(|(known, _)| label.eq_ignore_ascii_case(known))
        .map(|(_, code)| code)
    }
}

impl std::fmt::Display for FuelCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
