//! Derived visual and textual state.
//!
//! Everything here is a pure function of the selection state, the city
//! collection and the configuration.

mod color;
mod controls;
mod format;
mod sidebar;
mod style;
mod tooltip;

use serde::Serialize;
use serde_json::Value;

use crate::config::MapConfig;
use crate::map::CityCollection;
use crate::state::SelectionState;

pub use color::{ColorPair, Rgb};
pub use controls::{FilterButton, Legend, LegendEntry, filter_buttons, legend};
pub use format::{format_currency, format_population, format_vacancy_rate};
pub use sidebar::{ActionList, Sidebar, SidebarProperty, sidebar_for};
pub use style::{PaintRules, PointStyle, ZoomStops, color_for, filter_expression, is_visible, style_for};
pub use tooltip::{Tooltip, tooltip_for, unwrap_longitude};

/// Snapshot of everything the surface shows for a given selection state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub paint: Value,
    pub filter: Value,
    pub sidebar: Option<Sidebar>,
    pub filter_buttons: Vec<FilterButton>,
}

impl ViewState {
    pub fn derive(state: &SelectionState, collection: &CityCollection, config: &MapConfig) -> Self {
        Self {
            paint: PaintRules::new(config, state).to_mapbox_paint(),
            filter: filter_expression(state.active_filter),
            sidebar: state.selected_id
                .and_then(|id| collection.get(id))
                .map(|feature| sidebar_for(feature, config)),
            filter_buttons: filter_buttons(state.active_filter),
        }
    }
}
