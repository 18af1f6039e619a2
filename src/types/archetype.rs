use serde::{Deserialize, Serialize};

use crate::view::{ColorPair, Rgb};

/// Migration archetype of a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Destination,
    Opportunity,
    Risk,
    Origin,
    Unknown,
}

impl Archetype {
    /// Known archetypes, in legend order.
    pub const ALL: [Archetype; 4] = [
        Archetype::Destination,
        Archetype::Opportunity,
        Archetype::Risk,
        Archetype::Origin,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Archetype::Destination => "destination",
            Archetype::Opportunity => "opportunity",
            Archetype::Risk => "risk",
            Archetype::Origin => "origin",
            Archetype::Unknown => "unknown",
        }
    }

    /// Look up one of the four known archetypes by key, ignoring case.
    pub fn from_key(key: &str) -> Option<Archetype> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|archetype| archetype.to_str() == key)
    }

    /// Case-folded parse of a data value; anything unrecognized is `Unknown`.
    pub fn parse(value: &str) -> Archetype {
        Self::from_key(value).unwrap_or(Archetype::Unknown)
    }

    #[inline]
    pub fn profile(&self) -> &'static ArchetypeProfile {
        match self {
            Archetype::Destination => &PROFILES[0],
            Archetype::Opportunity => &PROFILES[1],
            Archetype::Risk => &PROFILES[2],
            Archetype::Origin => &PROFILES[3],
            Archetype::Unknown => &PROFILES[4],
        }
    }

    #[inline]
    pub fn colors(&self) -> ColorPair { self.profile().colors }
}

/// Everything the map and its panels show for one archetype.
#[derive(Debug)]
pub struct ArchetypeProfile {
    pub archetype: Archetype,
    pub display_name: &'static str,
    pub filter_label: &'static str,
    pub legend_title: &'static str,
    pub legend_description: &'static str,
    pub icon: &'static str,
    pub colors: ColorPair,
    /// Accent used for the archetype line in the sidebar.
    pub accent: Rgb,
    pub recommendations: &'static [&'static str],
}

const CLIMATE_MIGRATION_PLAN: &str = "Make a climate migration plan.";
const REZONING: &str = "Overhaul zoning comprehensively, focused on density and resilience.";
const HEALTHCARE: &str = "Strengthen healthcare and EMS infrastructure.";

static PROFILES: [ArchetypeProfile; 5] = [
    ArchetypeProfile {
        archetype: Archetype::Destination,
        display_name: "Destination City",
        filter_label: "Destination",
        legend_title: "Destination Cities:",
        legend_description: "Cities facing relatively low future climate risks that are currently seeing robust economic and demographic growth.",
        icon: "./img/icons-02.png",
        colors: ColorPair::new(0x87aa4b, 0x66842c),
        accent: Rgb::from_hex(0x87aa4b),
        recommendations: &[
            CLIMATE_MIGRATION_PLAN,
            "Expand inclusive, innovative outreach and public participation.",
            REZONING,
            "Create tax and subsidy programs for affordable, resilient housing development.",
            "Foster policies that facilitate community land ownership.",
        ],
    },
    ArchetypeProfile {
        archetype: Archetype::Opportunity,
        display_name: "Opportunity City",
        filter_label: "Opportunity",
        legend_title: "Opportunity Cities:",
        legend_description: "Cities with low climate risk but long-term economic and population decline that could benefit from in-migration to revitalize neighborhoods.",
        icon: "./img/icons-01.png",
        colors: ColorPair::new(0x786994, 0x534870),
        accent: Rgb::from_hex(0x786994),
        recommendations: &[
            "Expand small business financial support.",
            "Encourage incentives for private sector inter-office transfers.",
            CLIMATE_MIGRATION_PLAN,
            HEALTHCARE,
            "Expand bus transit.",
        ],
    },
    ArchetypeProfile {
        archetype: Archetype::Risk,
        display_name: "City at Risk",
        filter_label: "At Risk",
        legend_title: "Cities at Risk:",
        legend_description: "Cities with high climate risk that continue to grow rapidly, including cities facing increasingly extreme heat and coastal cities that face increasing flood risk.",
        icon: "./img/icons-04.png",
        colors: ColorPair::new(0xa5444d, 0x89303b),
        accent: Rgb::from_hex(0xa5444d),
        recommendations: &[
            CLIMATE_MIGRATION_PLAN,
            "Right size real estate risk.",
            REZONING,
            "Improve climate resilience in civil infrastructure.",
            HEALTHCARE,
        ],
    },
    ArchetypeProfile {
        archetype: Archetype::Origin,
        display_name: "Origin City",
        filter_label: "Origin",
        legend_title: "Origin Cities:",
        legend_description: "Cities experiencing long-term decline in population and a relatively high climate risk. These cities are outside the scope of our project.",
        icon: "./img/icons-03.png",
        colors: ColorPair::new(0x839093, 0x6d6360),
        accent: Rgb::from_hex(0x839093),
        recommendations: &[],
    },
    ArchetypeProfile {
        archetype: Archetype::Unknown,
        display_name: "unknown",
        filter_label: "Unknown",
        legend_title: "Unclassified Cities:",
        legend_description: "Cities without an archetype in the source data.",
        icon: "",
        colors: ColorPair::new(0x3887be, 0xff7700),
        accent: Rgb::from_hex(0x333333),
        recommendations: &[],
    },
];
