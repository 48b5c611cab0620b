// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn query_selector(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Todos los elementos que cumplen `selector` en `document`
pub fn query_selector_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector_all(selector)?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Input por id; `None` si no existe o no es un `<input>`
pub fn input_by_id(id: &str) -> Option<HtmlInputElement> {
    get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn set_text_by_id(id: &str, text: &str) {
    if let Some(element) = get_element_by_id(id) {
        set_text_content(&element, text);
    }
}

/// `style.display`: `display` si es visible, `none` si no
pub fn set_visible(element: &Element, visible: bool, display: &str) -> Result<(), JsValue> {
    let value = if visible { display } else { "none" };
    as_html(element)?.style().set_property("display", value)
}

pub fn focus(element: &Element) -> Result<(), JsValue> {
    as_html(element)?.focus()
}

pub fn append_to_body(child: &Element) -> Result<(), JsValue> {
    document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| JsValue::from_str("No body"))?
        .append_child(child)
        .map(|_| ())
}

pub fn append_to_head(child: &Element) -> Result<(), JsValue> {
    document()
        .and_then(|doc| doc.head())
        .ok_or_else(|| JsValue::from_str("No head"))?
        .append_child(child)
        .map(|_| ())
}

fn as_html(element: &Element) -> Result<&HtmlElement, JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))
}
