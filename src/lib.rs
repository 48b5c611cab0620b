// ============================================================================
// STOREFRONT LOGIN - Login móvil/OTP simulado para el sitio estático
// ============================================================================
// - Models: datos puros (número móvil, sesión, pasos, toasts)
// - State: estado reactivo del formulario y su vista pura
// - Services: localStorage, auth simulada, navegación, toasts
// - ViewModels: lógica de login, guardia de sesión, carrito
// - Views + DOM: enlazan los viewmodels con el markup existente
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::config::AppConfig;
use crate::services::NotificationCenter;
use crate::views::DomToastHost;

// Config resuelta una sola vez por página (compilada + overrides del markup)
thread_local! {
    static PAGE_CONFIG: RefCell<Option<AppConfig>> = const { RefCell::new(None) };
}

/// Config de la página; la resuelve en el primer uso
pub fn page_config() -> AppConfig {
    PAGE_CONFIG.with(|cell| {
        cell.borrow_mut()
            .get_or_insert_with(app::resolve_config)
            .clone()
    })
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // Nivel más verboso aquí; la config resuelta lo restringe abajo
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    let config = page_config();
    log::set_max_level(config.log_level().to_level_filter());
    log::info!("🚀 Storefront login cargado");

    app::start(&config);
    Ok(())
}

/// `showNotification(message)` para scripts inline de la página
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str) -> Result<(), JsValue> {
    NotificationCenter::new(DomToastHost, page_config().toast_duration_ms)
        .show(message)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
