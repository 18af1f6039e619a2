use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::search::SearchResults;
use crate::view::{FilterButton, Sidebar, Tooltip};

/// Camera move toward a selected city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraTarget {
    pub center: [f64; 2],
    pub zoom: f64,
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    Default,
    Pointer,
}

/// The map library and page panels, as seen by the handlers.
///
/// Contract for `set_source`: the surface assigns feature ids in insertion
/// order, so its index for a feature equals the feature's `id`. Implementations
/// must not sort, cluster or deduplicate the collection.
pub trait RenderSurface {
    /// Replace the city geometry source with a GeoJSON FeatureCollection.
    fn set_source(&mut self, collection: &Value) -> Result<()>;
    /// Apply circle-layer paint properties.
    fn set_paint(&mut self, paint: &Value) -> Result<()>;
    /// Apply a layer filter expression; `Value::Null` removes it.
    fn set_filter(&mut self, filter: &Value) -> Result<()>;
    fn fly_to(&mut self, camera: &CameraTarget) -> Result<()>;
    fn show_tooltip(&mut self, tooltip: &Tooltip) -> Result<()>;
    fn hide_tooltip(&mut self) -> Result<()>;
    fn set_cursor(&mut self, cursor: Cursor) -> Result<()>;
    /// Show details for a city, or clear the panel.
    fn render_sidebar(&mut self, sidebar: Option<&Sidebar>) -> Result<()>;
    fn render_search(&mut self, results: &SearchResults) -> Result<()>;
    fn render_filter_buttons(&mut self, buttons: &[FilterButton]) -> Result<()>;
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", content = "args", rename_all = "snake_case")]
pub enum SurfaceCall {
    SetSource(Value),
    SetPaint(Value),
    SetFilter(Value),
    FlyTo(CameraTarget),
    ShowTooltip(Tooltip),
    HideTooltip,
    SetCursor(Cursor),
    RenderSidebar(Option<Sidebar>),
    RenderSearch(SearchResults),
    RenderFilterButtons(Vec<FilterButton>),
}

/// Headless surface that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn calls(&self) -> &[SurfaceCall] { &self.calls }

    /// Take the calls recorded so far, leaving the log empty.
    pub fn drain(&mut self) -> Vec<SurfaceCall> { std::mem::take(&mut self.calls) }

    pub fn last_paint(&self) -> Option<&Value> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::SetPaint(paint) => Some(paint),
            _ => None,
        })
    }

    pub fn last_filter(&self) -> Option<&Value> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::SetFilter(filter) => Some(filter),
            _ => None,
        })
    }

    pub fn last_sidebar(&self) -> Option<Option<&Sidebar>> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::RenderSidebar(sidebar) => Some(sidebar.as_ref()),
            _ => None,
        })
    }

    pub fn last_search(&self) -> Option<&SearchResults> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::RenderSearch(results) => Some(results),
            _ => None,
        })
    }

    fn record(&mut self, call: SurfaceCall) -> Result<()> {
        self.calls.push(call);
        Ok(())
    }
}

impl RenderSurface for RecordingSurface {
    fn set_source(&mut self, collection: &Value) -> Result<()> {
        self.record(SurfaceCall::SetSource(collection.clone()))
    }

    fn set_paint(&mut self, paint: &Value) -> Result<()> {
        self.record(SurfaceCall::SetPaint(paint.clone()))
    }

    fn set_filter(&mut self, filter: &Value) -> Result<()> {
        self.record(SurfaceCall::SetFilter(filter.clone()))
    }

    fn fly_to(&mut self, camera: &CameraTarget) -> Result<()> {
        self.record(SurfaceCall::FlyTo(*camera))
    }

    fn show_tooltip(&mut self, tooltip: &Tooltip) -> Result<()> {
        self.record(SurfaceCall::ShowTooltip(tooltip.clone()))
    }

    fn hide_tooltip(&mut self) -> Result<()> {
        self.record(SurfaceCall::HideTooltip)
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Result<()> {
        self.record(SurfaceCall::SetCursor(cursor))
    }

    fn render_sidebar(&mut self, sidebar: Option<&Sidebar>) -> Result<()> {
        self.record(SurfaceCall::RenderSidebar(sidebar.cloned()))
    }

    fn render_search(&mut self, results: &SearchResults) -> Result<()> {
        self.record(SurfaceCall::RenderSearch(results.clone()))
    }

    fn render_filter_buttons(&mut self, buttons: &[FilterButton]) -> Result<()> {
        self.record(SurfaceCall::RenderFilterButtons(buttons.to_vec()))
    }
}
