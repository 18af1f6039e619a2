use gloo_net::http::Request;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use archetype_map_core::{CityMap, MapConfig, legend};

use crate::{common::*, surface::JsSurface};

#[wasm_bindgen]
pub struct WasmCityMap {
    inner: CityMap<JsSurface>,
}

#[wasm_bindgen]
impl WasmCityMap {
    /// Construct a map bound to a host object (see `JsSurface` for its methods).
    /// config: optional partial `MapConfig` object; missing fields take defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(host: JsValue, config: JsValue) -> Result<WasmCityMap, JsValue> {
        let config: MapConfig = if config.is_undefined() || config.is_null() {
            MapConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let surface = JsSurface::new(host).map_err(js_err)?;
        Ok(WasmCityMap { inner: CityMap::new(surface, config).map_err(js_err)? })
    }

    /// Map settings in effect, for the page to create the map and layer.
    pub fn config(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.config()).map_err(js_err)
    }

    /// Parse CSV text and push the collection to the host.
    /// Returns false (and leaves the map unchanged) if the text could not be read.
    #[wasm_bindgen(js_name = "loadCsv")]
    pub fn load_csv(&mut self, csv: &str) -> bool {
        self.inner.load_csv(csv)
    }

    /// Feature ids under the pointer, topmost first.
    pub fn click(&mut self, ids: Vec<u32>) -> Result<(), JsValue> {
        self.inner.click(&ids).map_err(js_err)
    }

    pub fn hover(&mut self, ids: Vec<u32>, lng: f64, lat: f64) -> Result<(), JsValue> {
        self.inner.hover(&ids, [lng, lat]).map_err(js_err)
    }

    pub fn leave(&mut self) -> Result<(), JsValue> {
        self.inner.leave().map_err(js_err)
    }

    #[wasm_bindgen(js_name = "clearSelection")]
    pub fn clear_selection(&mut self) -> Result<(), JsValue> {
        self.inner.clear_selection().map_err(js_err)
    }

    /// Toggle a filter button; `archetype` is one of destination, opportunity, risk, origin.
    #[wasm_bindgen(js_name = "toggleFilter")]
    pub fn toggle_filter(&mut self, archetype: &str) -> Result<(), JsValue> {
        let archetype = parse_archetype(archetype).map_err(js_err)?;
        self.inner.toggle_filter(archetype).map_err(js_err)
    }

    /// The "All" button.
    #[wasm_bindgen(js_name = "showAll")]
    pub fn show_all(&mut self) -> Result<(), JsValue> {
        self.inner.clear_filter().map_err(js_err)
    }

    pub fn search(&mut self, query: &str) -> Result<(), JsValue> {
        self.inner.search(query).map_err(js_err)
    }

    #[wasm_bindgen(js_name = "pickSearchResult")]
    pub fn pick_search_result(&mut self, id: u32) -> Result<(), JsValue> {
        self.inner.pick_search_result(id).map_err(js_err)
    }

    #[wasm_bindgen(js_name = "dismissSearch")]
    pub fn dismiss_search(&mut self) -> Result<(), JsValue> {
        self.inner.dismiss_search().map_err(js_err)
    }

    pub fn legend(&self) -> Result<JsValue, JsValue> {
        to_js(&legend()).map_err(js_err)
    }

    /// Loaded cities as a GeoJSON FeatureCollection.
    pub fn geojson(&self) -> Result<JsValue, JsValue> {
        let geojson = self.inner.collection().to_geojson().map_err(js_err)?;
        to_js(&geojson).map_err(js_err)
    }

    /// Paint, filter, sidebar and filter buttons for the current state.
    #[wasm_bindgen(js_name = "viewState")]
    pub fn view_state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.view_state()).map_err(js_err)
    }
}

/// Fetch a text resource (the city CSV) relative to the page.
#[wasm_bindgen(js_name = "fetchText")]
pub async fn fetch_text(url: String) -> Result<String, JsValue> {
    let response = Request::get(&url).send().await.map_err(js_err)?;
    if !response.ok() {
        return Err(js_err(format!("Failed to fetch {}: HTTP {}", url, response.status())));
    }
    response.text().await.map_err(js_err)
}
