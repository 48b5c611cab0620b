// ============================================================================
// LOGIN VIEWMODEL - Flujo móvil -> OTP -> sesión
// ============================================================================
// Lógica del formulario sin DOM: la vista lee `state()` y llama a
// `on_mobile_input`, `submit` y `complete`.
// ============================================================================

use crate::error::AppError;
use crate::models::{strip_non_digits, LoginError, LoginStep, MobileNumber, Page, SessionRecord};
use crate::services::{AuthBackend, KeyValueStorage, Navigator, SessionStore};
use crate::state::{LoginFormState, ReactiveState};

/// OTP aceptado por el formulario, pendiente del backend de auth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLogin {
    pub mobile: MobileNumber,
    pub otp: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Sesión guardada, navegador enviado a home
    LoggedIn(SessionRecord),
    /// Rechazado por el backend; formulario de vuelta al paso OTP con error
    Rejected,
}

pub struct LoginViewModel<S, A, N> {
    state: ReactiveState<LoginFormState>,
    store: SessionStore<S>,
    auth: A,
    navigator: N,
}

impl<S, A, N> LoginViewModel<S, A, N>
where
    S: KeyValueStorage,
    A: AuthBackend,
    N: Navigator,
{
    pub fn new(store: SessionStore<S>, auth: A, navigator: N) -> Self {
        Self {
            state: ReactiveState::new(LoginFormState::new()),
            store,
            auth,
            navigator,
        }
    }

    pub fn state(&self) -> &ReactiveState<LoginFormState> {
        &self.state
    }

    pub fn step(&self) -> LoginStep {
        self.state.borrow().step.clone()
    }

    /// Tecla en el campo móvil: limpia el error y devuelve solo los dígitos
    /// para reescribir el input
    pub fn on_mobile_input(&self, raw: &str) -> String {
        if self.state.borrow().mobile_error.is_some() {
            self.state.update(|s| s.mobile_error = None);
        }
        strip_non_digits(raw)
    }

    /// Submit del formulario. Devuelve el login a verificar cuando el paso
    /// OTP se envía con un OTP no vacío.
    pub fn submit(&self, mobile_input: &str, otp_input: &str) -> Option<PendingLogin> {
        let current = self.step();
        if current.is_verifying() {
            log::debug!("⏳ [LOGIN] Submit ignorado, verificación en curso");
            return None;
        }

        match current.submit(mobile_input, otp_input) {
            Ok(next) => {
                let pending = match &next {
                    LoginStep::Verifying { mobile, otp } => Some(PendingLogin {
                        mobile: mobile.clone(),
                        otp: otp.clone(),
                    }),
                    LoginStep::AwaitingOtp { mobile } => {
                        log::info!("📱 [LOGIN] Número {} válido, paso OTP", mobile);
                        None
                    }
                    LoginStep::AwaitingMobile => None,
                };
                self.state.update(|s| {
                    s.clear_errors();
                    s.step = next;
                });
                pending
            }
            Err(error) => {
                log::debug!("⚠️ [LOGIN] Validación fallida: {}", error);
                self.state.update(|s| {
                    s.clear_errors();
                    s.show_error(&error);
                });
                None
            }
        }
    }

    /// Verificar, guardar la sesión e ir a home
    pub async fn complete(&self, pending: PendingLogin) -> Result<LoginOutcome, AppError> {
        if let Err(error) = self.auth.verify(&pending.mobile, &pending.otp).await {
            log::warn!("❌ [LOGIN] Verificación rechazada: {}", error);
            self.back_to_otp();
            return Ok(LoginOutcome::Rejected);
        }

        let record = SessionRecord::started_now(pending.mobile);
        if let Err(error) = self.store.save(&record) {
            log::error!("❌ [LOGIN] Error guardando sesión: {}", error);
            self.back_to_otp();
            return Err(error.into());
        }

        log::info!("✅ [LOGIN] Login completado a las {}", record.login_time_iso());
        self.navigator.navigate(Page::Home)?;
        Ok(LoginOutcome::LoggedIn(record))
    }

    fn back_to_otp(&self) {
        self.state.update(|s| {
            s.step = s.step.verification_failed();
            s.show_error(&LoginError::VerificationFailed);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AuthError, StorageError};
    use crate::models::session::{KEY_IS_LOGGED_IN, KEY_LOGIN_TIME, KEY_USER_MOBILE};
    use crate::services::navigation::RecordingNavigator;
    use crate::services::MemoryStorage;
    use crate::state::{LoginCopy, LoginView};
    use chrono::DateTime;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    struct AcceptAll;

    impl AuthBackend for AcceptAll {
        async fn verify(&self, _: &MobileNumber, _: &str) -> Result<(), AuthError> {
            Ok(())
        }
    }

    struct RejectAll;

    impl AuthBackend for RejectAll {
        async fn verify(&self, _: &MobileNumber, _: &str) -> Result<(), AuthError> {
            Err(AuthError::Rejected)
        }
    }

    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get(&self, _: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }
        fn set(&self, key: &str, _: &str) -> Result<(), StorageError> {
            Err(StorageError::Write(key.to_string()))
        }
        fn remove(&self, _: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    /// localStorage bloqueado: toda operación falla
    struct BlockedStorage;

    impl KeyValueStorage for BlockedStorage {
        fn get(&self, _: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn set(&self, _: &str, _: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
        fn remove(&self, _: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn viewmodel<A: AuthBackend>(auth: A) -> LoginViewModel<MemoryStorage, A, RecordingNavigator> {
        LoginViewModel::new(SessionStore::new(MemoryStorage::new()), auth, RecordingNavigator::new())
    }

    #[test]
    fn invalid_numbers_do_not_advance() {
        let vm = viewmodel(AcceptAll);
        for input in ["", "   ", "98765", "98765432109", "98765abcde", "5876543210"] {
            assert_eq!(vm.submit(input, ""), None);
            assert_eq!(vm.step(), LoginStep::AwaitingMobile);
            let error = vm.state().borrow().mobile_error.clone();
            assert!(error.is_some_and(|e| !e.is_empty()), "no error for {input:?}");
        }
    }

    #[test]
    fn each_violation_gets_its_own_message() {
        let vm = viewmodel(AcceptAll);
        let message = |input: &str| {
            vm.submit(input, "");
            vm.state().borrow().mobile_error.clone().unwrap()
        };
        assert_eq!(message(""), "Please enter a mobile number");
        assert_eq!(message("123"), "Mobile number must be exactly 10 digits");
        assert_eq!(message("12345abcde"), "Mobile number should contain only digits");
        assert_eq!(message("1234567890"), "Mobile number should start with 6, 7, 8, or 9");
    }

    #[test]
    fn valid_number_moves_to_otp_and_focuses_it() {
        let vm = viewmodel(AcceptAll);
        vm.submit("123", "");
        assert_eq!(vm.submit("9876543210", ""), None);

        let state = vm.state().get();
        assert!(matches!(state.step, LoginStep::AwaitingOtp { .. }));
        assert_eq!(state.mobile_error, None);
        assert!(LoginView::from_state(&state, &LoginCopy::default()).focus_otp);
    }

    #[test]
    fn typing_clears_error_and_filters_digits() {
        let vm = viewmodel(AcceptAll);
        vm.submit("", "");
        assert!(vm.state().borrow().mobile_error.is_some());

        assert_eq!(vm.on_mobile_input("98-76 5x"), "98765");
        assert_eq!(vm.state().borrow().mobile_error, None);
    }

    #[test]
    fn empty_otp_is_rejected_without_navigation() {
        let vm = viewmodel(AcceptAll);
        vm.submit("9876543210", "");
        assert_eq!(vm.submit("9876543210", "   "), None);

        assert!(matches!(vm.step(), LoginStep::AwaitingOtp { .. }));
        assert_eq!(vm.state().borrow().otp_error.as_deref(), Some("Please enter OTP"));
        assert!(vm.navigator.visits().is_empty());
        assert!(vm.store.storage().is_empty());
    }

    #[test]
    fn any_otp_logs_in_and_goes_home() {
        let vm = viewmodel(AcceptAll);
        vm.submit("9876543210", "");
        let pending = vm.submit("", "123456").unwrap();
        assert_eq!(pending.otp, "123456");
        assert!(LoginView::from_state(&vm.state().get(), &LoginCopy::default()).button_disabled);

        let outcome = block_on(vm.complete(pending)).unwrap();
        assert!(matches!(outcome, LoginOutcome::LoggedIn(_)));

        let storage = vm.store.storage();
        assert_eq!(storage.get(KEY_IS_LOGGED_IN).unwrap().as_deref(), Some("true"));
        assert_eq!(storage.get(KEY_USER_MOBILE).unwrap().as_deref(), Some("9876543210"));
        let time = storage.get(KEY_LOGIN_TIME).unwrap().unwrap();
        assert!(DateTime::parse_from_rfc3339(&time).is_ok());
        assert_eq!(vm.navigator.visits(), vec![Page::Home]);
    }

    #[test]
    fn submit_during_verification_is_ignored() {
        let vm = viewmodel(AcceptAll);
        vm.submit("9876543210", "");
        assert!(vm.submit("", "1").is_some());
        assert_eq!(vm.submit("", "1"), None);
        assert!(vm.step().is_verifying());
    }

    #[test]
    fn rejected_otp_returns_to_otp_step() {
        let vm = viewmodel(RejectAll);
        vm.submit("9876543210", "");
        let pending = vm.submit("", "000000").unwrap();

        let outcome = block_on(vm.complete(pending)).unwrap();
        assert_eq!(outcome, LoginOutcome::Rejected);

        let state = vm.state().get();
        assert!(matches!(state.step, LoginStep::AwaitingOtp { .. }));
        assert_eq!(state.otp_error.as_deref(), Some("Login failed. Please try again."));
        assert!(!LoginView::from_state(&state, &LoginCopy::default()).button_disabled);
        assert!(vm.store.storage().is_empty());
        assert!(vm.navigator.visits().is_empty());
    }

    #[test]
    fn storage_failure_does_not_navigate() {
        let vm = LoginViewModel::new(
            SessionStore::new(ReadOnlyStorage),
            AcceptAll,
            RecordingNavigator::new(),
        );
        vm.submit("9876543210", "");
        let pending = vm.submit("", "1").unwrap();

        let result = block_on(vm.complete(pending));
        assert!(matches!(result, Err(AppError::Storage(_))));
        assert!(matches!(vm.step(), LoginStep::AwaitingOtp { .. }));
        assert!(vm.navigator.visits().is_empty());
    }

    #[test]
    fn blocked_storage_still_validates_and_advances() {
        let vm = LoginViewModel::new(
            SessionStore::new(BlockedStorage),
            AcceptAll,
            RecordingNavigator::new(),
        );

        assert_eq!(vm.on_mobile_input("98x76"), "9876");
        vm.submit("5876543210", "");
        assert_eq!(
            vm.state().borrow().mobile_error.as_deref(),
            Some("Mobile number should start with 6, 7, 8, or 9")
        );

        vm.submit("9876543210", "");
        assert!(matches!(vm.step(), LoginStep::AwaitingOtp { .. }));

        vm.submit("", "");
        assert_eq!(vm.state().borrow().otp_error.as_deref(), Some("Please enter OTP"));

        let pending = vm.submit("", "123456").unwrap();
        let result = block_on(vm.complete(pending));
        assert_eq!(result, Err(AppError::Storage(StorageError::Unavailable)));

        let state = vm.state().get();
        assert!(matches!(state.step, LoginStep::AwaitingOtp { .. }));
        assert_eq!(state.otp_error.as_deref(), Some("Login failed. Please try again."));
        assert!(vm.navigator.visits().is_empty());
    }

    #[test]
    fn state_changes_reach_subscribers() {
        let vm = viewmodel(AcceptAll);
        let renders = Rc::new(Cell::new(0));
        {
            let renders = renders.clone();
            vm.state().subscribe(move |_| renders.set(renders.get() + 1));
        }
        vm.submit("", "");
        vm.submit("9876543210", "");
        assert_eq!(renders.get(), 2);
    }
}
