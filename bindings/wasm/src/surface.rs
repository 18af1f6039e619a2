use anyhow::{Result, anyhow};
use js_sys::{Function, Object, Reflect};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};

use archetype_map_core::{CameraTarget, Cursor, FilterButton, RenderSurface, SearchResults, Sidebar, Tooltip};

use crate::common::to_js;

/// Forwards surface calls to methods on a host object supplied by the page:
/// `setSource`, `setPaint`, `setFilter`, `flyTo`, `showTooltip`, `hideTooltip`,
/// `setCursor`, `renderSidebar`, `renderSearch`, `renderFilterButtons`.
///
/// Methods the host does not define are skipped.
pub(crate) struct JsSurface {
    host: Object,
}

impl JsSurface {
    pub(crate) fn new(host: JsValue) -> Result<Self> {
        let host = host.dyn_into::<Object>().map_err(|_| anyhow!("surface host must be an object"))?;
        Ok(Self { host })
    }

    fn method(&self, name: &str) -> Result<Option<Function>> {
        let value = Reflect::get(&self.host, &JsValue::from_str(name))
            .map_err(|e| anyhow!("error getting property '{}': {:?}", name, e))?;
        Ok(value.dyn_into::<Function>().ok())
    }

    fn call0(&self, name: &str) -> Result<()> {
        let Some(method) = self.method(name)? else { return Ok(()) };
        method.call0(&self.host).map_err(|e| anyhow!("{} failed: {:?}", name, e))?;
        Ok(())
    }

    fn call1<T: Serialize + ?Sized>(&self, name: &str, arg: &T) -> Result<()> {
        let Some(method) = self.method(name)? else { return Ok(()) };
        method.call1(&self.host, &to_js(arg)?).map_err(|e| anyhow!("{} failed: {:?}", name, e))?;
        Ok(())
    }
}

impl RenderSurface for JsSurface {
    fn set_source(&mut self, collection: &Value) -> Result<()> { self.call1("setSource", collection) }

    fn set_paint(&mut self, paint: &Value) -> Result<()> { self.call1("setPaint", paint) }

    fn set_filter(&mut self, filter: &Value) -> Result<()> { self.call1("setFilter", filter) }

    fn fly_to(&mut self, camera: &CameraTarget) -> Result<()> { self.call1("flyTo", camera) }

    fn show_tooltip(&mut self, tooltip: &Tooltip) -> Result<()> { self.call1("showTooltip", tooltip) }

    fn hide_tooltip(&mut self) -> Result<()> { self.call0("hideTooltip") }

    fn set_cursor(&mut self, cursor: Cursor) -> Result<()> { self.call1("setCursor", &cursor) }

    fn render_sidebar(&mut self, sidebar: Option<&Sidebar>) -> Result<()> { self.call1("renderSidebar", &sidebar) }

    fn render_search(&mut self, results: &SearchResults) -> Result<()> { self.call1("renderSearch", results) }

    fn render_filter_buttons(&mut self, buttons: &[FilterButton]) -> Result<()> {
        self.call1("renderFilterButtons", buttons)
    }
}
