// ============================================================================
// HOME VIEW - Página protegida: guardia, número del usuario y logout
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use crate::config::AppConfig;
use crate::dom::{get_element_by_id, on_click, set_text_by_id};
use crate::services::{BrowserStorage, SessionStore, WindowNavigator};
use crate::utils::constants::{LOGOUT_BUTTON_ID, USER_MOBILE_ID};
use crate::viewmodels::{GuardOutcome, SessionViewModel};

/// Devuelve `false` si la página redirigió a login y no hay nada más
/// que montar.
pub fn mount_protected_page(config: &AppConfig) -> Result<bool, JsValue> {
    // Sin localStorage, check_login_status redirige a login
    let vm = Rc::new(SessionViewModel::new(
        SessionStore::new(BrowserStorage::new()),
        WindowNavigator::new(config.clone()),
        config.country_code.clone(),
    ));

    let display_mobile = match vm
        .check_login_status()
        .map_err(|e| JsValue::from_str(&e.to_string()))?
    {
        GuardOutcome::Redirected => return Ok(false),
        GuardOutcome::Authenticated { display_mobile } => display_mobile,
    };

    set_text_by_id(USER_MOBILE_ID, &display_mobile);

    if let Some(logout_btn) = get_element_by_id(LOGOUT_BUTTON_ID) {
        on_click(&logout_btn, move |e| {
            e.prevent_default();
            if let Err(e) = vm.logout() {
                log::error!("❌ [GUARD] Error en logout: {}", e);
            }
        })?;
    }

    Ok(true)
}
