//! Bindings to the global Leaflet (`L`) loaded by index.html, and the
//! [`MapSurface`] built on them.

use drishti_core::geo::{Bounds, LatLng, Viewport};
use drishti_core::map::{MapSettings, MapSurface, RectangleStyle};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

pub const MAP_CONTAINER_ID: &str = "map";

#[wasm_bindgen]
extern "C" {
    pub type Map;
    pub type Layer;
    pub type Control;
    pub type LatLngBounds;
    pub type MouseEvent;
    pub type Point;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container_id: &str, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &JsValue, zoom: u8) -> Map;

    #[wasm_bindgen(method, js_name = zoomIn)]
    fn zoom_in(this: &Map) -> Map;

    #[wasm_bindgen(method, js_name = zoomOut)]
    fn zoom_out(this: &Map) -> Map;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &Map, bounds: &LatLngBounds, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &Map, layer: &Layer) -> Map;

    #[wasm_bindgen(method, js_name = getContainer)]
    fn get_container(this: &Map) -> web_sys::HtmlElement;

    #[wasm_bindgen(method)]
    fn on(this: &Map, event: &str, handler: &Closure<dyn FnMut(MouseEvent)>);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = rectangle)]
    fn rectangle(bounds: &LatLngBounds, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = latLngBounds)]
    fn lat_lng_bounds(south_west: &JsValue, north_east: &JsValue) -> LatLngBounds;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = attribution)]
    fn attribution(options: &JsValue) -> Control;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_layer_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_control_to(this: &Control, map: &Map) -> Control;

    #[wasm_bindgen(method, getter)]
    fn latlng(this: &MouseEvent) -> Point;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &Point) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &Point) -> f64;
}

/// Builds a plain JS options object.
fn options(entries: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in entries {
        // Reflect::set only fails on frozen objects
        let _ = Reflect::set(&object, &JsValue::from_str(key), value);
    }
    object.into()
}

fn point(at: LatLng) -> JsValue {
    Array::of2(&at.lat.into(), &at.lng.into()).into()
}

fn js_bounds(bounds: &Bounds) -> LatLngBounds {
    lat_lng_bounds(&point(bounds.south_west()), &point(bounds.north_east()))
}

pub struct LeafletSurface {
    map: Map,
    rectangle: Option<Layer>,
    _on_click: Closure<dyn FnMut(MouseEvent)>,
}

impl LeafletSurface {
    /// Creates the map inside `#map` with the dark tile layer, and forwards
    /// clicks as coordinates.
    pub fn mount(
        settings: &MapSettings,
        mut on_click: impl FnMut(LatLng) + 'static,
    ) -> Result<Self, JsValue> {
        let map = create_map(
            MAP_CONTAINER_ID,
            &options(&[
                ("center", point(settings.home.center)),
                ("zoom", settings.home.zoom.into()),
                ("zoomControl", false.into()),
                ("attributionControl", false.into()),
            ]),
        )?;

        tile_layer(
            &settings.tile_url,
            &options(&[
                ("maxZoom", settings.max_zoom.into()),
                ("subdomains", settings.tile_subdomains.as_str().into()),
            ]),
        )
        .add_layer_to(&map);

        attribution(&options(&[
            ("position", "bottomright".into()),
            ("prefix", settings.attribution_prefix.as_str().into()),
        ]))
        .add_control_to(&map);

        let handler = Closure::<dyn FnMut(MouseEvent)>::new(
            move |event: MouseEvent| {
                let at = event.latlng();
                on_click(LatLng::new(at.lat(), at.lng()));
            },
        );
        map.on("click", &handler);

        tracing::info!("map initialised");
        Ok(Self {
            map,
            rectangle: None,
            _on_click: handler,
        })
    }
}

impl MapSurface for LeafletSurface {
    fn set_view(&mut self, viewport: Viewport) {
        self.map.set_view(&point(viewport.center), viewport.zoom);
    }

    fn zoom_in(&mut self) {
        self.map.zoom_in();
    }

    fn zoom_out(&mut self) {
        self.map.zoom_out();
    }

    fn show_rectangle(&mut self, bounds: &Bounds, style: &RectangleStyle) {
        let layer = rectangle(
            &js_bounds(bounds),
            &options(&[
                ("color", style.color.into()),
                ("weight", style.weight.into()),
                ("fillOpacity", style.fill_opacity.into()),
            ]),
        )
        .add_layer_to(&self.map);
        self.rectangle = Some(layer);
    }

    fn clear_rectangle(&mut self) {
        if let Some(layer) = self.rectangle.take() {
            self.map.remove_layer(&layer);
        }
    }

    fn fit_bounds(&mut self, bounds: &Bounds, padding_px: u32) {
        let padding = Array::of2(&padding_px.into(), &padding_px.into());
        self.map
            .fit_bounds(&js_bounds(bounds), &options(&[("padding", padding.into())]));
    }

    fn set_crosshair(&mut self, enabled: bool) {
        let cursor = if enabled { "crosshair" } else { "" };
        let _ = self
            .map
            .get_container()
            .style()
            .set_property("cursor", cursor);
    }
}
