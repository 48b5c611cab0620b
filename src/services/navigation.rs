// ============================================================================
// NAVIGATION - Redirecciones de página completa
// ============================================================================

use web_sys::window;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::Page;

pub trait Navigator {
    fn navigate(&self, page: Page) -> Result<(), AppError>;
}

/// Cambia `window.location.href`, lo que descarga la página actual
pub struct WindowNavigator {
    config: AppConfig,
}

impl WindowNavigator {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl Navigator for WindowNavigator {
    fn navigate(&self, page: Page) -> Result<(), AppError> {
        let path = page.path(&self.config);
        log::info!("➡️ [NAV] Redirigiendo a {}", path);
        window()
            .ok_or_else(|| AppError::Navigation(path.to_string()))?
            .location()
            .set_href(path)
            .map_err(|_| AppError::Navigation(path.to_string()))
    }
}

#[cfg(test)]
pub use recording::RecordingNavigator;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_resolve_to_configured_paths() {
        let config = AppConfig { home_page: "shop.html".into(), ..AppConfig::default() };
        assert_eq!(Page::Login.path(&config), "index.html");
        assert_eq!(Page::Home.path(&config), "shop.html");
    }
}
