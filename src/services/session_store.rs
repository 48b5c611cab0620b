// ============================================================================
// SESSION STORE - Único estado compartido entre páginas
// ============================================================================

use crate::error::StorageError;
use crate::models::session::{
    KEY_IS_LOGGED_IN, KEY_LOGIN_TIME, KEY_USER_MOBILE, LOGGED_IN_VALUE, SESSION_KEYS,
};
use crate::models::{SessionRecord, StoredSession};
use crate::services::storage::KeyValueStorage;

/// Acceso tipado a las tres claves de sesión
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Guardar una sesión nueva. El flag va al final: una escritura parcial
    /// nunca se lee como sesión activa.
    pub fn save(&self, record: &SessionRecord) -> Result<(), StorageError> {
        self.storage.set(KEY_USER_MOBILE, record.user_mobile.as_str())?;
        self.storage.set(KEY_LOGIN_TIME, &record.login_time_iso())?;
        self.storage.set(KEY_IS_LOGGED_IN, LOGGED_IN_VALUE)?;
        log::info!("💾 [SESSION] Sesión guardada para {}", record.user_mobile);
        Ok(())
    }

    /// `None` salvo que el flag sea `"true"` y haya número móvil
    pub fn load(&self) -> Result<Option<StoredSession>, StorageError> {
        let logged_in = self.storage.get(KEY_IS_LOGGED_IN)?;
        let user_mobile = self.storage.get(KEY_USER_MOBILE)?;

        match (logged_in.as_deref(), user_mobile) {
            (Some(LOGGED_IN_VALUE), Some(user_mobile)) if !user_mobile.is_empty() => {
                Ok(Some(StoredSession { user_mobile }))
            }
            _ => Ok(None),
        }
    }

    /// Eliminar las tres claves. Seguro con el storage vacío.
    pub fn clear(&self) -> Result<(), StorageError> {
        for key in SESSION_KEYS {
            self.storage.remove(key)?;
        }
        log::info!("🗑️ [SESSION] Sesión eliminada");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MobileNumber;
    use crate::services::storage::MemoryStorage;
    use chrono::{DateTime, TimeZone, Utc};

    fn record() -> SessionRecord {
        SessionRecord::new(
            MobileNumber::parse("9876543210").unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
        )
    }

    #[test]
    fn save_writes_three_raw_keys() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&record()).unwrap();

        let storage = store.storage();
        assert_eq!(storage.get(KEY_IS_LOGGED_IN).unwrap().as_deref(), Some("true"));
        assert_eq!(storage.get(KEY_USER_MOBILE).unwrap().as_deref(), Some("9876543210"));
        let time = storage.get(KEY_LOGIN_TIME).unwrap().unwrap();
        assert_eq!(time, "2025-01-02T03:04:05.000Z");
        assert!(DateTime::parse_from_rfc3339(&time).is_ok());
        assert_eq!(storage.len(), 3);
    }

    #[test]
    fn load_reads_back_saved_session() {
        let store = SessionStore::new(MemoryStorage::new());
        assert_eq!(store.load().unwrap(), None);

        store.save(&record()).unwrap();
        let session = store.load().unwrap().unwrap();
        assert_eq!(session.user_mobile, "9876543210");
    }

    #[test]
    fn load_fails_closed_on_partial_records() {
        let storage = MemoryStorage::new();
        storage.set(KEY_USER_MOBILE, "9876543210").unwrap();
        let store = SessionStore::new(storage);
        assert_eq!(store.load().unwrap(), None);

        store.storage().set(KEY_IS_LOGGED_IN, "false").unwrap();
        assert_eq!(store.load().unwrap(), None);

        store.storage().set(KEY_IS_LOGGED_IN, "true").unwrap();
        store.storage().set(KEY_USER_MOBILE, "").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn missing_login_time_is_tolerated() {
        let storage = MemoryStorage::new();
        storage.set(KEY_IS_LOGGED_IN, "true").unwrap();
        storage.set(KEY_USER_MOBILE, "9876543210").unwrap();
        let session = SessionStore::new(storage).load().unwrap().unwrap();
        assert_eq!(session.user_mobile, "9876543210");
    }

    #[test]
    fn clear_removes_everything_and_is_idempotent() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&record()).unwrap();
        store.storage().set("cart", "kept").unwrap();

        store.clear().unwrap();
        store.clear().unwrap();

        for key in SESSION_KEYS {
            assert_eq!(store.storage().get(key).unwrap(), None);
        }
        // Las demás claves se conservan
        assert_eq!(store.storage().len(), 1);
    }
}
