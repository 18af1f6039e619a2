//! Interaction handlers: events in, store mutations, derived view out.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::MapConfig;
use crate::io::{Row, load_rows, load_rows_from_path};
use crate::map::{CityCollection, transform};
use crate::search::{SearchResults, search};
use crate::state::{SelectionState, SelectionStore};
use crate::surface::{CameraTarget, Cursor, RenderSurface};
use crate::types::{Archetype, CityFeature, FeatureId};
use crate::view::{PaintRules, ViewState, filter_buttons, filter_expression, sidebar_for, tooltip_for};

/// The interactive city map.
///
/// Owns the collection, the selection store and the rendering surface. Every
/// handler mutates the store first, then pushes the re-derived view onto the
/// surface before returning. Surface errors propagate to the caller.
pub struct CityMap<S> {
    config: MapConfig,
    surface: S,
    collection: CityCollection,
    store: SelectionStore,
    search: SearchResults,
}

impl<S: RenderSurface> CityMap<S> {
    pub fn new(surface: S, config: MapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            surface,
            collection: CityCollection::default(),
            store: SelectionStore::new(),
            search: SearchResults::Hidden,
        })
    }

    #[inline] pub fn config(&self) -> &MapConfig { &self.config }

    #[inline] pub fn collection(&self) -> &CityCollection { &self.collection }

    #[inline] pub fn state(&self) -> &SelectionState { self.store.state() }

    #[inline] pub fn surface(&self) -> &S { &self.surface }

    #[inline] pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }

    #[inline] pub fn search_results(&self) -> &SearchResults { &self.search }

    /// Currently selected feature, if its id is in the collection.
    pub fn selected(&self) -> Option<&CityFeature> {
        self.store.selected_id().and_then(|id| self.collection.get(id))
    }

    /// Snapshot of the derived view for the current state.
    pub fn view_state(&self) -> ViewState {
        ViewState::derive(self.store.state(), &self.collection, &self.config)
    }

    /// Load cities from CSV text. Returns `false`, leaving the surface
    /// untouched, if the text cannot be parsed or has no records.
    pub fn load_csv(&mut self, csv: &str) -> bool {
        self.finish_load(load_rows(csv))
    }

    /// Load cities from a CSV file; see `load_csv`.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> bool {
        self.finish_load(load_rows_from_path(path))
    }

    fn finish_load(&mut self, rows: Result<Vec<Row>>) -> bool {
        match rows.and_then(|rows| self.set_collection(transform(&rows))) {
            Ok(()) => true,
            Err(e) => {
                warn!("[app] Failed to load city data: {e:#}");
                false
            }
        }
    }

    /// Replace the collection. Ids from the previous collection are
    /// meaningless afterwards, so selection, filter and search are reset.
    pub fn set_collection(&mut self, collection: CityCollection) -> Result<()> {
        let geojson = collection.to_geojson()?;
        self.collection = collection;
        self.store.reset();
        self.search = SearchResults::Hidden;

        self.surface.set_source(&geojson)?;
        self.refresh_paint()?;
        self.refresh_filter()?;
        self.surface.render_sidebar(None)?;
        self.surface.render_search(&self.search)?;

        info!(cities = self.collection.len(), "[app] City data loaded");
        Ok(())
    }

    /// Select a city, restyle, fly to it and show its details.
    ///
    /// `id` must come from the current collection; an unknown id is stored
    /// but gets neither a camera move nor a sidebar.
    pub fn select_city(&mut self, id: FeatureId) -> Result<()> {
        self.store.select_city(id);
        self.refresh_paint()?;

        let Some(feature) = self.collection.get(id) else {
            debug!(id, "[app] Selected id has no feature");
            return Ok(());
        };

        let camera = CameraTarget {
            center: feature.lng_lat(),
            zoom: self.config.fly_to.zoom,
            speed: self.config.fly_to.speed,
        };
        let sidebar = sidebar_for(feature, &self.config);
        debug!(id, name = feature.name(), "[app] Selected city");

        self.surface.fly_to(&camera)?;
        self.surface.render_sidebar(Some(&sidebar))
    }

    /// Deselect; the camera stays where it is.
    pub fn clear_selection(&mut self) -> Result<()> {
        self.store.clear_selection();
        self.refresh_paint()?;
        self.surface.render_sidebar(None)
    }

    pub fn apply_filter(&mut self, archetype: Archetype) -> Result<()> {
        self.store.apply_filter(archetype);
        self.refresh_filter()
    }

    /// Handler for the "All" button.
    pub fn clear_filter(&mut self) -> Result<()> {
        self.store.clear_filter();
        self.refresh_filter()
    }

    /// Handler for an archetype button: clicking the active filter clears it.
    pub fn toggle_filter(&mut self, archetype: Archetype) -> Result<()> {
        if self.store.active_filter() == Some(archetype) {
            self.clear_filter()
        } else {
            self.apply_filter(archetype)
        }
    }

    /// Click on the point layer; `hits` are the features under the pointer, topmost first.
    pub fn click(&mut self, hits: &[FeatureId]) -> Result<()> {
        match hits.first() {
            Some(&id) => self.select_city(id),
            None => Ok(()),
        }
    }

    /// Pointer entered the point layer at `lng_lat`.
    pub fn hover(&mut self, hits: &[FeatureId], lng_lat: [f64; 2]) -> Result<()> {
        self.surface.set_cursor(Cursor::Pointer)?;

        let Some(feature) = hits.first().and_then(|&id| self.collection.get(id)) else { return Ok(()) };
        let tooltip = tooltip_for(feature, lng_lat[0]);
        self.surface.show_tooltip(&tooltip)
    }

    /// Pointer left the point layer.
    pub fn leave(&mut self) -> Result<()> {
        self.surface.set_cursor(Cursor::Default)?;
        self.surface.hide_tooltip()
    }

    /// Search box input changed.
    pub fn search(&mut self, query: &str) -> Result<()> {
        self.search = search(&self.collection, query, &self.config.search);
        self.surface.render_search(&self.search)
    }

    /// A search result was picked: select it and close the panel.
    pub fn pick_search_result(&mut self, id: FeatureId) -> Result<()> {
        self.select_city(id)?;
        self.search = SearchResults::Hidden;
        self.surface.render_search(&self.search)
    }

    /// Click outside the search box hides the result panel.
    pub fn dismiss_search(&mut self) -> Result<()> {
        if self.search.is_hidden() { return Ok(()) }
        self.search = SearchResults::Hidden;
        self.surface.render_search(&self.search)
    }

    fn refresh_paint(&mut self) -> Result<()> {
        let paint = PaintRules::new(&self.config, self.store.state()).to_mapbox_paint();
        self.surface.set_paint(&paint)
    }

    fn refresh_filter(&mut self) -> Result<()> {
        let filter = self.store.active_filter();
        self.surface.set_filter(&filter_expression(filter))?;
        self.surface.render_filter_buttons(&filter_buttons(filter))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::CityMap;
    use crate::config::MapConfig;
    use crate::search::SearchResults;
    use crate::state::SelectionState;
    use crate::surface::{CameraTarget, Cursor, RecordingSurface, SurfaceCall};
    use crate::types::Archetype;

    const CITIES: &str = "\
clean_name,state,type,longitude,latitude,population
Austin,TX,destination,-97.74,30.27,961855
Detroit,MI,opportunity,-83.05,42.33,639111
Miami,FL,risk,-80.19,25.76,442241
Gary,IN,origin,-87.35,41.59,69093
";

    fn loaded() -> CityMap<RecordingSurface> {
        let mut map = CityMap::new(RecordingSurface::new(), MapConfig::default()).unwrap();
        assert!(map.load_csv(CITIES));
        map.surface_mut().drain();
        map
    }

    #[test]
    fn load_pushes_source_and_initial_view() {
        let mut map = CityMap::new(RecordingSurface::new(), MapConfig::default()).unwrap();
        assert!(map.load_csv(CITIES));
        assert_eq!(map.collection().len(), 4);

        let calls = map.surface().calls();
        let SurfaceCall::SetSource(source) = &calls[0] else { panic!("first call must set the source") };
        assert_eq!(source["features"][3]["id"], json!(3));
        assert_eq!(map.surface().last_filter(), Some(&Value::Null));
        assert_eq!(map.surface().last_sidebar(), Some(None));
    }

    #[test]
    fn failed_load_touches_nothing() {
        let mut map = CityMap::new(RecordingSurface::new(), MapConfig::default()).unwrap();
        assert!(!map.load_csv(""));
        assert!(!map.load_csv("clean_name,longitude,latitude\n"));
        assert!(map.collection().is_empty());
        assert!(map.surface().calls().is_empty());
    }

    #[test]
    fn select_city_restyles_flies_and_fills_sidebar() {
        let mut map = loaded();
        map.select_city(2).unwrap();

        assert_eq!(map.state().selected_id, Some(2));
        let calls = map.surface_mut().drain();
        assert!(matches!(calls[0], SurfaceCall::SetPaint(_)));
        assert_eq!(calls[1], SurfaceCall::FlyTo(CameraTarget { center: [-80.19, 25.76], zoom: 8.0, speed: 0.8 }));
        let SurfaceCall::RenderSidebar(Some(sidebar)) = &calls[2] else { panic!("sidebar expected") };
        assert_eq!(sidebar.title, "Miami, FL");

        let paint = map.view_state().paint;
        assert_eq!(paint["circle-stroke-width"][1], json!(["==", ["id"], 2]));
    }

    #[test]
    fn clear_selection_has_no_camera_effect() {
        let mut map = loaded();
        map.select_city(0).unwrap();
        map.surface_mut().drain();

        map.clear_selection().unwrap();
        assert_eq!(map.state().selected_id, None);
        let calls = map.surface().calls();
        assert!(!calls.iter().any(|c| matches!(c, SurfaceCall::FlyTo(_))));
        assert_eq!(map.surface().last_sidebar(), Some(None));
    }

    #[test]
    fn unknown_id_is_stored_without_side_effects() {
        let mut map = loaded();
        map.select_city(99).unwrap();
        assert_eq!(map.state().selected_id, Some(99));
        assert!(map.selected().is_none());
        assert_eq!(map.surface().calls().len(), 1);
    }

    #[test]
    fn toggling_active_filter_clears_it() {
        let mut map = loaded();
        map.toggle_filter(Archetype::Risk).unwrap();
        assert_eq!(map.state().active_filter, Some(Archetype::Risk));
        assert_eq!(map.surface().last_filter(), Some(&json!(["==", ["get", "archetype"], "risk"])));

        map.toggle_filter(Archetype::Risk).unwrap();
        assert_eq!(map.state().active_filter, None);
        assert_eq!(map.surface().last_filter(), Some(&Value::Null));
        assert_eq!(map.collection().visible(map.state().active_filter).count(), 4);
    }

    #[test]
    fn filtered_out_selection_stays_selected() {
        let mut map = loaded();
        map.select_city(0).unwrap();
        map.apply_filter(Archetype::Origin).unwrap();

        assert_eq!(map.state().selected_id, Some(0));
        let visible: Vec<u32> = map.collection().visible(map.state().active_filter).map(|f| f.id).collect();
        assert_eq!(visible, vec![3]);
    }

    #[test]
    fn hover_and_leave_drive_tooltip_and_cursor() {
        let mut map = loaded();
        map.hover(&[1], [-83.0, 42.3]).unwrap();
        map.leave().unwrap();

        let calls = map.surface().calls();
        assert_eq!(calls[0], SurfaceCall::SetCursor(Cursor::Pointer));
        let SurfaceCall::ShowTooltip(tooltip) = &calls[1] else { panic!("tooltip expected") };
        assert_eq!(tooltip.text, "Detroit, MI");
        assert_eq!(&calls[2..], &[SurfaceCall::SetCursor(Cursor::Default), SurfaceCall::HideTooltip]);
    }

    #[test]
    fn click_selects_topmost_hit() {
        let mut map = loaded();
        map.click(&[3, 1]).unwrap();
        assert_eq!(map.state().selected_id, Some(3));
        map.click(&[]).unwrap();
        assert_eq!(map.state().selected_id, Some(3));
    }

    #[test]
    fn search_then_pick_selects_and_hides_panel() {
        let mut map = loaded();
        map.search("d").unwrap();
        assert_eq!(map.search_results(), &SearchResults::Hidden);

        map.search("mia").unwrap();
        assert_eq!(map.search_results().hits().len(), 1);

        map.pick_search_result(2).unwrap();
        assert_eq!(map.state().selected_id, Some(2));
        assert_eq!(map.surface().last_search(), Some(&SearchResults::Hidden));
    }

    #[test]
    fn dismiss_only_renders_when_visible() {
        let mut map = loaded();
        map.dismiss_search().unwrap();
        assert!(map.surface().calls().is_empty());

        map.search("zzz").unwrap();
        map.dismiss_search().unwrap();
        assert_eq!(map.surface().last_search(), Some(&SearchResults::Hidden));
    }

    #[test]
    fn reload_resets_selection_and_filter() {
        let mut map = loaded();
        map.select_city(1).unwrap();
        map.apply_filter(Archetype::Risk).unwrap();
        assert!(map.load_csv(CITIES));
        assert_eq!(*map.state(), SelectionState::default());
    }
}
