// ============================================================================
// CART VIEW - Botones "add to cart" -> toast
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::AppConfig;
use crate::dom::{on_click, query_selector_all};
use crate::services::NotificationCenter;
use crate::utils::constants::{ADD_CART_BUTTON_SELECTOR, PRODUCT_NAME_SELECTOR};
use crate::viewmodels::CartViewModel;
use crate::views::toast::DomToastHost;

pub fn mount_cart_buttons(config: &AppConfig) -> Result<(), JsValue> {
    let buttons = query_selector_all(ADD_CART_BUTTON_SELECTOR)?;
    if buttons.is_empty() {
        return Ok(());
    }

    log::debug!("🛒 [CART] {} botones de carrito", buttons.len());
    let cart = Rc::new(CartViewModel::new(NotificationCenter::new(
        DomToastHost,
        config.toast_duration_ms,
    )));

    for button in buttons {
        let cart = cart.clone();
        let source = button.clone();
        on_click(&button, move |_| {
            let name = product_name(&source);
            if let Err(e) = cart.add_to_cart(name.as_deref()) {
                log::error!("❌ [CART] {}", e);
            }
        })?;
    }

    Ok(())
}

/// Texto del `h3` junto al botón
fn product_name(button: &Element) -> Option<String> {
    button
        .parent_element()?
        .query_selector(PRODUCT_NAME_SELECTOR)
        .ok()
        .flatten()?
        .text_content()
}
