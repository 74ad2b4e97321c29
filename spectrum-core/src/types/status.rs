//! IUCN Red List status codes and their display registry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// IUCN Red List category, ordered from least to most severe.
///
/// The derived `Ord` follows declaration order, so `LC < NT < ... < EX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum StatusCode {
    /// Least Concern
    #[default]
    LC,
    /// Near Threatened
    NT,
    /// Vulnerable
    VU,
    /// Endangered
    EN,
    /// Critically Endangered
    CR,
    /// Extinct in the Wild
    EW,
    /// Extinct
    EX,
}

impl StatusCode {
    /// Every code in severity order
    pub const ALL: [StatusCode; 7] = [
        StatusCode::LC,
        StatusCode::NT,
        StatusCode::VU,
        StatusCode::EN,
        StatusCode::CR,
        StatusCode::EW,
        StatusCode::EX,
    ];

    /// Most severe index (EX)
    pub const MAX_SEVERITY: usize = 6;

    /// Severity rank in the fixed LC→EX ordering (0–6)
    pub fn severity_index(self) -> usize {
        self as usize
    }

    /// Code at a severity index, clamped to EX
    pub fn from_severity_index(index: usize) -> Self {
        Self::ALL[index.min(Self::MAX_SEVERITY)]
    }

    /// Two-letter code
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LC => "LC",
            Self::NT => "NT",
            Self::VU => "VU",
            Self::EN => "EN",
            Self::CR => "CR",
            Self::EW => "EW",
            Self::EX => "EX",
        }
    }

    /// Parse a free-form code, upper-casing it first and falling back to `LC`
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    /// Display color from the palette registry
    pub fn color(self) -> &'static str {
        STATUS_PALETTE[self.severity_index()].color
    }

    /// Human-readable label from the palette registry
    pub fn label(self) -> &'static str {
        STATUS_PALETTE[self.severity_index()].label
    }

    pub fn is_threatened(self) -> bool {
        matches!(self, Self::VU | Self::EN | Self::CR)
    }

    pub fn is_extinct(self) -> bool {
        matches!(self, Self::EW | Self::EX)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LC" => Ok(Self::LC),
            "NT" => Ok(Self::NT),
            "VU" => Ok(Self::VU),
            "EN" => Ok(Self::EN),
            "CR" => Ok(Self::CR),
            "EW" => Ok(Self::EW),
            "EX" => Ok(Self::EX),
            _ => Err(format!("Unknown IUCN status code: {}", s)),
        }
    }
}

/// Color and label for one status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub status: StatusCode,
    pub color: &'static str,
    pub label: &'static str,
}

/// Red gradient from muted (Least Concern) to bright neon (Extinct), indexed by severity
pub const STATUS_PALETTE: [StatusStyle; 7] = [
    StatusStyle { status: StatusCode::LC, color: "#4A1F1F", label: "Least Concern" },
    StatusStyle { status: StatusCode::NT, color: "#5A2A2A", label: "Near Threatened" },
    StatusStyle { status: StatusCode::VU, color: "#6B3535", label: "Vulnerable" },
    StatusStyle { status: StatusCode::EN, color: "#7D4040", label: "Endangered" },
    StatusStyle { status: StatusCode::CR, color: "#8F4B4B", label: "Critically Endangered" },
    StatusStyle { status: StatusCode::EW, color: "#A15656", label: "Extinct in the Wild" },
    StatusStyle { status: StatusCode::EX, color: "#FF1744", label: "Extinct" },
];

/// Color for a free-form status string; unknown codes get the `LC` color
pub fn status_color(raw: &str) -> &'static str {
    StatusCode::parse_lenient(raw).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_matches_severity() {
        assert!(StatusCode::LC < StatusCode::NT);
        assert!(StatusCode::CR < StatusCode::EW);
        assert!(StatusCode::EW < StatusCode::EX);

        for (i, code) in StatusCode::ALL.iter().enumerate() {
            assert_eq!(code.severity_index(), i);
            assert_eq!(StatusCode::from_severity_index(i), *code);
        }
    }

    #[test]
    fn test_severity_index_clamps() {
        assert_eq!(StatusCode::from_severity_index(7), StatusCode::EX);
        assert_eq!(StatusCode::from_severity_index(usize::MAX), StatusCode::EX);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("en".parse::<StatusCode>().unwrap(), StatusCode::EN);
        assert_eq!("Cr".parse::<StatusCode>().unwrap(), StatusCode::CR);
        assert!(" cr ".parse::<StatusCode>().is_err());
        assert!("ZZ".parse::<StatusCode>().is_err());
    }

    #[test]
    fn test_parse_lenient_defaults_to_least_concern() {
        assert_eq!(StatusCode::parse_lenient("ZZ"), StatusCode::LC);
        assert_eq!(StatusCode::parse_lenient(""), StatusCode::LC);
        assert_eq!(StatusCode::parse_lenient("ex"), StatusCode::EX);
    }

    #[test]
    fn test_palette_is_indexed_by_severity() {
        for code in StatusCode::ALL {
            assert_eq!(STATUS_PALETTE[code.severity_index()].status, code);
        }
        assert_eq!(StatusCode::EX.color(), "#FF1744");
        assert_eq!(StatusCode::EW.label(), "Extinct in the Wild");
        assert_eq!(status_color("bogus"), StatusCode::LC.color());
        assert_eq!(status_color("vu"), "#6B3535");
    }

    #[test]
    fn test_serde_uses_two_letter_codes() {
        let json = serde_json::to_string(&StatusCode::VU).unwrap();
        assert_eq!(json, "\"VU\"");
        let back: StatusCode = serde_json::from_str("\"EW\"").unwrap();
        assert_eq!(back, StatusCode::EW);
    }
}
