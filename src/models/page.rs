use crate::config::AppConfig;

/// Destinos de navegación del sitio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Home,
}

impl Page {
    /// Ruta relativa, sin query string
    pub fn path<'a>(&self, config: &'a AppConfig) -> &'a str {
        match self {
            Page::Login => &config.login_page,
            Page::Home => &config.home_page,
        }
    }
}
