// ============================================================================
// APP - Arranque por página
// ============================================================================
// Una sola librería para todas las páginas del sitio: lo que se monta
// depende del markup presente.
// ============================================================================

use crate::config::{AppConfig, CONFIG};
use crate::dom::{get_element_by_id, query_selector};
use crate::utils::constants::{APP_CONFIG_SCRIPT_ID, LOGIN_FORM_ID, NAVBAR_SELECTOR};
use crate::views::{mount_cart_buttons, mount_login, mount_protected_page};

/// Config compilada + overrides de `<script id="app-config">` de la página
pub fn resolve_config() -> AppConfig {
    let Some(json) = get_element_by_id(APP_CONFIG_SCRIPT_ID).and_then(|e| e.text_content()) else {
        return CONFIG.clone();
    };

    match CONFIG.with_overrides(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("⚠️ [APP] Config de la página inválida, usando la compilada: {}", e);
            CONFIG.clone()
        }
    }
}

/// Montar cada parte presente en la página. Un error se registra y no
/// impide montar las demás.
pub fn start(config: &AppConfig) {
    if query_selector(NAVBAR_SELECTOR).is_some() {
        log::info!("🔒 [APP] Página protegida");
        match mount_protected_page(config) {
            // Redirigiendo a login, no hay nada más que montar
            Ok(false) => return,
            Ok(true) => {}
            Err(e) => log::error!("❌ [APP] Error montando página protegida: {:?}", e),
        }
    }

    if let Some(form) = get_element_by_id(LOGIN_FORM_ID) {
        log::info!("🔐 [APP] Página de login");
        if let Err(e) = mount_login(&form, config) {
            log::error!("❌ [APP] Error montando login: {:?}", e);
        }
    }

    if let Err(e) = mount_cart_buttons(config) {
        log::error!("❌ [APP] Error montando carrito: {:?}", e);
    }
}
