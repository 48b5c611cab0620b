// ============================================================================
// SESSION VIEWMODEL - Guardia de páginas protegidas + logout
// ============================================================================

use crate::error::AppError;
use crate::models::{format_mobile_number, Page};
use crate::services::{KeyValueStorage, Navigator, SessionStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Sin sesión: el navegador ya va camino a login
    Redirected,
    Authenticated { display_mobile: String },
}

pub struct SessionViewModel<S, N> {
    store: SessionStore<S>,
    navigator: N,
    country_code: String,
}

impl<S: KeyValueStorage, N: Navigator> SessionViewModel<S, N> {
    pub fn new(store: SessionStore<S>, navigator: N, country_code: impl Into<String>) -> Self {
        Self {
            store,
            navigator,
            country_code: country_code.into(),
        }
    }

    /// Una vez por carga de página protegida. Falla cerrado: sin una sesión
    /// legible y completa, redirige a login.
    pub fn check_login_status(&self) -> Result<GuardOutcome, AppError> {
        let session = match self.store.load() {
            Ok(session) => session,
            Err(error) => {
                log::error!("❌ [GUARD] No se pudo leer la sesión: {}", error);
                None
            }
        };

        match session {
            Some(session) => {
                log::info!("✅ [GUARD] Sesión activa para {}", session.user_mobile);
                Ok(GuardOutcome::Authenticated {
                    display_mobile: format_mobile_number(&session.user_mobile, &self.country_code),
                })
            }
            None => {
                log::info!("🔒 [GUARD] Sin sesión, redirigiendo a login");
                self.navigator.navigate(Page::Login)?;
                Ok(GuardOutcome::Redirected)
            }
        }
    }

    /// Borrar la sesión e ir a login. Seguro sin sesión activa.
    pub fn logout(&self) -> Result<(), AppError> {
        log::info!("👋 [GUARD] Logout");
        self.store.clear()?;
        self.navigator.navigate(Page::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::SESSION_KEYS;
    use crate::models::{MobileNumber, SessionRecord};
    use crate::services::navigation::RecordingNavigator;
    use crate::services::MemoryStorage;

    fn viewmodel() -> SessionViewModel<MemoryStorage, RecordingNavigator> {
        SessionViewModel::new(SessionStore::new(MemoryStorage::new()), RecordingNavigator::new(), "+91")
    }

    fn log_in(vm: &SessionViewModel<MemoryStorage, RecordingNavigator>) {
        let record = SessionRecord::started_now(MobileNumber::parse("9876543210").unwrap());
        vm.store.save(&record).unwrap();
    }

    #[test]
    fn absent_session_redirects_to_login() {
        let vm = viewmodel();
        assert_eq!(vm.check_login_status().unwrap(), GuardOutcome::Redirected);
        assert_eq!(vm.navigator.visits(), vec![Page::Login]);
    }

    #[test]
    fn active_session_renders_formatted_mobile() {
        let vm = viewmodel();
        log_in(&vm);
        assert_eq!(
            vm.check_login_status().unwrap(),
            GuardOutcome::Authenticated { display_mobile: "+91 9876 543 210".to_string() }
        );
        assert!(vm.navigator.visits().is_empty());
    }

    #[test]
    fn logout_clears_all_keys_and_redirects() {
        let vm = viewmodel();
        log_in(&vm);
        vm.logout().unwrap();

        for key in SESSION_KEYS {
            assert_eq!(vm.store.storage().get(key).unwrap(), None);
        }
        assert_eq!(vm.navigator.visits(), vec![Page::Login]);
        assert_eq!(vm.check_login_status().unwrap(), GuardOutcome::Redirected);
    }

    #[test]
    fn logout_when_logged_out_still_redirects() {
        let vm = viewmodel();
        vm.logout().unwrap();
        vm.logout().unwrap();
        assert_eq!(vm.navigator.visits(), vec![Page::Login, Page::Login]);
    }
}
