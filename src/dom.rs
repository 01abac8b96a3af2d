use crate::constants::DARK_SCHEME_QUERY;
use crate::core::color::to_css_hex;
use crate::core::Theme;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Faults that mean the page markup does not match what the app expects.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("no document body")]
    NoBody,
    #[error("missing #{0}")]
    MissingElement(String),
    #[error("#{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for DomError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        DomError::Js(format!("{:?}", v))
    }
}

pub fn require_document() -> Result<web::Document, DomError> {
    let window = web::window().ok_or(DomError::NoWindow)?;
    window.document().ok_or(DomError::NoDocument)
}

pub fn require_element(document: &web::Document, id: &str) -> Result<web::Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

pub fn require_canvas(
    document: &web::Document,
    id: &str,
) -> Result<web::HtmlCanvasElement, DomError> {
    require_element(document, id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| DomError::WrongElementType {
            id: id.to_string(),
            expected: "canvas",
        })
}

/// Create `<tag class="...">` as an `HtmlElement`.
pub fn create_html(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> Result<web::HtmlElement, DomError> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|_| DomError::Js(format!("<{}> is not an HtmlElement", tag)))
}

#[inline]
pub fn add_click_listener(
    element: &web::EventTarget,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>
    );
    _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Whether the user agent reports a dark color-scheme preference.
pub fn prefers_dark_scheme() -> bool {
    web::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Put the theme class on `<html>` and paint the body background to match.
pub fn apply_theme_class(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let cl = root.class_list();
        _ = cl.remove_1(theme.toggled().css_class());
        _ = cl.add_1(theme.css_class());
    }
    if let Some(body) = document.body() {
        _ = body
            .style()
            .set_property("background-color", &to_css_hex(theme.background_rgb()));
    }
}
