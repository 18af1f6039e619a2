use serde::Serialize;

use crate::config::MapConfig;
use crate::types::{Archetype, CityFeature, FeatureId};

use super::{Rgb, format_currency, format_population, format_vacancy_rate};

/// Details panel for the selected city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sidebar {
    pub id: FeatureId,
    pub title: String,
    pub archetype: Archetype,
    pub archetype_label: String,
    pub archetype_color: Rgb,
    pub properties: Vec<SidebarProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<ActionList>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarProperty {
    pub label: &'static str,
    pub value: String,
}

/// Archetype-specific recommendations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionList {
    pub heading: String,
    pub items: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,
}

pub fn sidebar_for(feature: &CityFeature, config: &MapConfig) -> Sidebar {
    let city = &feature.attributes;
    let profile = city.archetype.profile();

    let properties = vec![
        SidebarProperty { label: "Population", value: format_population(city.population) },
        SidebarProperty { label: "County", value: city.county.clone().unwrap_or_else(|| "N/A".to_string()) },
        SidebarProperty { label: "Vacancy Rate", value: format_vacancy_rate(city.vacancy_rate) },
        SidebarProperty { label: "Median Income", value: format_currency(city.median_income) },
        SidebarProperty { label: "Median Home Value", value: format_currency(city.median_home_value) },
    ];

    // Origin and unclassified cities get no action list.
    let actions = (!profile.recommendations.is_empty()).then(|| ActionList {
        heading: format!("Urgent priority actions for {}:", city.name),
        items: profile.recommendations.to_vec(),
        report_url: config.report_url.clone(),
    });

    Sidebar {
        id: feature.id,
        title: feature.label(),
        archetype: city.archetype,
        archetype_label: city.type_name.clone().unwrap_or_else(|| profile.display_name.to_string()),
        archetype_color: profile.accent,
        properties,
        actions,
    }
}
