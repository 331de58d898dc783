use crate::constants::CANVAS_STYLE;
use std::collections::HashMap;
use viewport_core::{ControlId, ControlSource, LayoutBox};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `window.innerWidth` in CSS pixels, 0 when unavailable.
#[inline]
pub fn window_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|dpr| *dpr > 0.0)
        .unwrap_or(1.0)
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("add_event_listener({}) failed: {:?}", event, e);
    }
    // Listeners live as long as the page
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", move |_| handler());
    }
}

/// Create the render canvas and append it to `container`.
pub fn create_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas
        .set_attribute("style", CANVAS_STYLE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// The element the viewport fills; its client box is re-read on every sample.
#[derive(Clone)]
pub struct Container(pub web::Element);

impl LayoutBox for Container {
    fn client_width(&self) -> i32 {
        self.0.client_width()
    }

    fn client_height(&self) -> i32 {
        self.0.client_height()
    }
}

/// Range inputs looked up once by control key.
pub struct DomControls {
    inputs: HashMap<&'static str, web::HtmlInputElement>,
}

impl DomControls {
    pub fn new(document: &web::Document) -> Self {
        let mut inputs = HashMap::new();
        for id in ControlId::ALL {
            match document
                .get_element_by_id(id.key())
                .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
            {
                Some(input) => {
                    inputs.insert(id.key(), input);
                }
                None => log::warn!("[controls] missing input #{}", id.key()),
            }
        }
        Self { inputs }
    }

    pub fn input(&self, id: ControlId) -> Option<&web::HtmlInputElement> {
        self.inputs.get(id.key())
    }
}

impl ControlSource for DomControls {
    fn raw_value(&self, key: &str) -> Option<String> {
        self.inputs.get(key).map(|input| input.value())
    }
}
