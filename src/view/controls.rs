//! Legend and filter-button content.

use serde::Serialize;

use crate::types::Archetype;

/// One filter button; `archetype == None` is the "All" button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub label: &'static str,
    pub archetype: Option<Archetype>,
    pub active: bool,
}

/// "All" followed by one button per archetype. Exactly one is active.
pub fn filter_buttons(active_filter: Option<Archetype>) -> Vec<FilterButton> {
    let all = FilterButton { label: "All", archetype: None, active: active_filter.is_none() };
    std::iter::once(all)
        .chain(Archetype::ALL.into_iter().map(|archetype| FilterButton {
            label: archetype.profile().filter_label,
            archetype: Some(archetype),
            active: active_filter == Some(archetype),
        }))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub archetype: Archetype,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub title: &'static str,
    pub entries: Vec<LegendEntry>,
    pub filter_heading: &'static str,
}

/// Static legend content.
pub fn legend() -> Legend {
    Legend {
        title: "City Types",
        entries: Archetype::ALL.into_iter()
            .map(|archetype| {
                let profile = archetype.profile();
                LegendEntry {
                    archetype,
                    title: profile.legend_title,
                    description: profile.legend_description,
                    icon: profile.icon,
                }
            })
            .collect(),
        filter_heading: "Filter by city type:",
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_buttons, legend};
    use crate::types::Archetype;

    #[test]
    fn all_button_active_without_filter() {
        let buttons = filter_buttons(None);
        let labels: Vec<&str> = buttons.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["All", "Destination", "Opportunity", "At Risk", "Origin"]);
        assert!(buttons[0].active);
        assert_eq!(buttons.iter().filter(|b| b.active).count(), 1);
    }

    #[test]
    fn active_filter_button_is_highlighted() {
        let buttons = filter_buttons(Some(Archetype::Risk));
        let active: Vec<Option<Archetype>> = buttons.iter().filter(|b| b.active).map(|b| b.archetype).collect();
        assert_eq!(active, vec![Some(Archetype::Risk)]);
    }

    #[test]
    fn legend_lists_known_archetypes_in_order() {
        let legend = legend();
        let order: Vec<Archetype> = legend.entries.iter().map(|e| e.archetype).collect();
        assert_eq!(order, Archetype::ALL.to_vec());
        assert_eq!(legend.entries[2].title, "Cities at Risk:");
        assert_eq!(legend.entries[0].icon, "./img/icons-02.png");
    }
}
