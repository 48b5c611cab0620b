// ============================================================================
// TOAST VIEW - Host DOM para NotificationCenter
// ============================================================================

use gloo_timers::callback::Timeout;
use web_sys::Element;
use crate::dom::{append_to_body, append_to_head, get_element_by_id, ElementBuilder};
use crate::error::AppError;
use crate::models::toast::{Toast, TOAST_KEYFRAMES};
use crate::services::ToastHost;
use crate::utils::constants::TOAST_KEYFRAMES_ID;

/// Agrega toasts a `<body>` y elimina cada uno con su propio timeout
pub struct DomToastHost;

impl DomToastHost {
    /// Hoja `@keyframes`, inyectada una vez por página
    fn ensure_keyframes(&self) -> Result<(), AppError> {
        if get_element_by_id(TOAST_KEYFRAMES_ID).is_some() {
            return Ok(());
        }
        let style = ElementBuilder::new("style")
            .map_err(dom_error)?
            .id(TOAST_KEYFRAMES_ID)
            .text(TOAST_KEYFRAMES)
            .build();
        append_to_head(&style).map_err(dom_error)
    }
}

impl ToastHost for DomToastHost {
    type Handle = Element;

    fn mount(&self, toast: &Toast) -> Result<Element, AppError> {
        self.ensure_keyframes()?;
        let element = ElementBuilder::new("div")
            .map_err(dom_error)?
            .id(&toast.id)
            .class("toast-notification")
            .attr("role", "status")
            .and_then(|b| b.style(&toast.inline_style()))
            .map_err(dom_error)?
            .text(&toast.message)
            .build();
        append_to_body(&element).map_err(dom_error)?;
        Ok(element)
    }

    fn remove_after(&self, handle: Element, delay_ms: u32) {
        Timeout::new(delay_ms, move || handle.remove()).forget();
    }
}

fn dom_error(e: wasm_bindgen::JsValue) -> AppError {
    AppError::Dom(format!("{:?}", e))
}
