//! Renovation-project vocabulary.
//!
//! The quote wizard collects project details from fixed option sets. Each
//! enum exposes its form label via [`Display`](std::fmt::Display) and parses
//! back from that label via [`FromStr`](std::str::FromStr), so the submitted
//! option values round-trip without a separate mapping table.

use serde::{Deserialize, Serialize};

/// Indian states and union territories offered in the details form.
pub const INDIAN_STATES: [&str; 33] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

/// Project budget band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetRange {
    Under15k,
    Between15kAnd30k,
    Between30kAnd50k,
    Between50kAnd1Lakh,
    Above1Lakh,
}

impl BudgetRange {
    /// Every band, in form order.
    pub const ALL: [Self; 5] = [
        Self::Under15k,
        Self::Between15kAnd30k,
        Self::Between30kAnd50k,
        Self::Between50kAnd1Lakh,
        Self::Above1Lakh,
    ];

    /// The label shown in the details form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under15k => "Under \u{20b9}15,000",
            Self::Between15kAnd30k => "\u{20b9}15,000 - \u{20b9}30,000",
            Self::Between30kAnd50k => "\u{20b9}30,000 - \u{20b9}50,000",
            Self::Between50kAnd1Lakh => "\u{20b9}50,000 - \u{20b9}1,00,000",
            Self::Above1Lakh => "Above \u{20b9}1,00,000",
        }
    }
}

impl std::fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for BudgetRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.label() == s)
            .ok_or_else(|| format!("invalid budget range: {s}"))
    }
}

/// Kind of home being renovated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeType {
    Apartment,
    IndependentHouse,
    Villa,
    Studio,
    PgHostelRoom,
}

impl HomeType {
    /// Every home type, in form order.
    pub const ALL: [Self; 5] = [
        Self::Apartment,
        Self::IndependentHouse,
        Self::Villa,
        Self::Studio,
        Self::PgHostelRoom,
    ];

    /// The label shown in the details form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::IndependentHouse => "Independent House",
            Self::Villa => "Villa",
            Self::Studio => "Studio",
            Self::PgHostelRoom => "PG/Hostel Room",
        }
    }
}

impl std::fmt::Display for HomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for HomeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.label() == s)
            .ok_or_else(|| format!("invalid home type: {s}"))
    }
}

/// Room a client wants transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    LivingRoom,
    Bedroom,
    Kitchen,
    Bathroom,
    Balcony,
    StudyRoom,
    DiningRoom,
}

impl RoomType {
    /// Every room type, in form order.
    pub const ALL: [Self; 7] = [
        Self::LivingRoom,
        Self::Bedroom,
        Self::Kitchen,
        Self::Bathroom,
        Self::Balcony,
        Self::StudyRoom,
        Self::DiningRoom,
    ];

    /// The label shown in the details form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LivingRoom => "Living Room",
            Self::Bedroom => "Bedroom",
            Self::Kitchen => "Kitchen",
            Self::Bathroom => "Bathroom",
            Self::Balcony => "Balcony",
            Self::StudyRoom => "Study Room",
            Self::DiningRoom => "Dining Room",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| format!("invalid room type: {s}"))
    }
}

/// Optional design-style preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StylePreference {
    IndoorPlants,
    NaturalLight,
    UpcycledMaterials,
    MinimalistDesign,
    BohemianStyle,
    ModernContemporary,
    TraditionalIndian,
    SpaceSavingSolutions,
}

impl StylePreference {
    /// Every preference, in form order.
    pub const ALL: [Self; 8] = [
        Self::IndoorPlants,
        Self::NaturalLight,
        Self::UpcycledMaterials,
        Self::MinimalistDesign,
        Self::BohemianStyle,
        Self::ModernContemporary,
        Self::TraditionalIndian,
        Self::SpaceSavingSolutions,
    ];

    /// The label shown in the details form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IndoorPlants => "Indoor Plants",
            Self::NaturalLight => "Natural Light",
            Self::UpcycledMaterials => "Upcycled Materials",
            Self::MinimalistDesign => "Minimalist Design",
            Self::BohemianStyle => "Bohemian Style",
            Self::ModernContemporary => "Modern Contemporary",
            Self::TraditionalIndian => "Traditional Indian",
            Self::SpaceSavingSolutions => "Space Saving Solutions",
        }
    }
}

impl std::fmt::Display for StylePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for StylePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| format!("invalid style preference: {s}"))
    }
}
