#![doc = "Climate migration archetype map public API"]
mod app;
mod config;
mod io;
mod map;
mod search;
mod state;
mod surface;
mod types;
mod view;

#[doc(inline)]
pub use app::CityMap;

#[doc(inline)]
pub use config::{FlyToConfig, MapConfig, RadiusConfig, SearchConfig, StrokeConfig};

#[doc(inline)]
pub use io::{Row, load_rows, load_rows_from_path};

#[doc(inline)]
pub use map::{CityCollection, TransformReport, transform, transform_with_report};

#[doc(inline)]
pub use search::{SearchHit, SearchResults, search};

#[doc(inline)]
pub use state::{SelectionState, SelectionStore};

#[doc(inline)]
pub use surface::{CameraTarget, Cursor, RecordingSurface, RenderSurface, SurfaceCall};

#[doc(inline)]
pub use types::{Archetype, ArchetypeProfile, CityAttributes, CityFeature, FeatureId};

#[doc(inline)]
pub use view::{
    ActionList, ColorPair, FilterButton, Legend, LegendEntry, PaintRules, PointStyle, Rgb,
    Sidebar, SidebarProperty, Tooltip, ViewState, ZoomStops, color_for, filter_buttons, filter_expression,
    format_currency, format_population, format_vacancy_rate, is_visible, legend, sidebar_for,
    style_for, tooltip_for, unwrap_longitude,
};
