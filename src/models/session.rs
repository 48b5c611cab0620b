// ============================================================================
// SESSION RECORD - Registro persistido en localStorage
// ============================================================================

use chrono::{DateTime, SecondsFormat, Utc};
use crate::models::mobile::MobileNumber;

pub const KEY_IS_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_USER_MOBILE: &str = "userMobile";
pub const KEY_LOGIN_TIME: &str = "loginTime";

/// Todas las claves del registro, en el orden en que logout las elimina
pub const SESSION_KEYS: [&str; 3] = [KEY_IS_LOGGED_IN, KEY_USER_MOBILE, KEY_LOGIN_TIME];

/// Valor de `isLoggedIn` con sesión activa
pub const LOGGED_IN_VALUE: &str = "true";

/// Lo que escribe un login exitoso
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub user_mobile: MobileNumber,
    pub login_time: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(user_mobile: MobileNumber, login_time: DateTime<Utc>) -> Self {
        Self { user_mobile, login_time }
    }

    pub fn started_now(user_mobile: MobileNumber) -> Self {
        Self::new(user_mobile, Utc::now())
    }

    /// Mismo formato que `Date.prototype.toISOString`
    pub fn login_time_iso(&self) -> String {
        self.login_time.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Lo que lee una página protegida. El número es lo que haya guardado,
/// por eso es un string sin validar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub user_mobile: String,
}
