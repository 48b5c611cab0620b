// ============================================================================
// NOTIFICATION SERVICE - Toasts independientes, sin cola
// ============================================================================

use crate::error::AppError;
use crate::models::Toast;

/// Dónde se dibujan los toasts. En el navegador, un `div` en `<body>`.
pub trait ToastHost {
    type Handle;

    fn mount(&self, toast: &Toast) -> Result<Self::Handle, AppError>;

    /// Programar la eliminación de un toast. Cada llamada tiene su propio timer.
    fn remove_after(&self, handle: Self::Handle, delay_ms: u32);
}

/// Notificaciones sin cola: llamadas concurrentes se superponen.
pub struct NotificationCenter<H> {
    host: H,
    duration_ms: u32,
}

impl<H: ToastHost> NotificationCenter<H> {
    pub fn new(host: H, duration_ms: u32) -> Self {
        Self { host, duration_ms }
    }

    pub fn show(&self, message: impl Into<String>) -> Result<Toast, AppError> {
        let toast = Toast::new(message, self.duration_ms);
        let handle = self.host.mount(&toast)?;
        self.host.remove_after(handle, toast.duration_ms);
        log::debug!("🔔 [TOAST] {} ({})", toast.message, toast.id);
        Ok(toast)
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

#[cfg(test)]
pub use recording::RecordingToastHost;

#[cfg(test)]
mod recording {
    use super::*;
    use std::cell::RefCell;

    /// Guarda toasts montados y timers pendientes; los tests disparan los timers a mano
    #[derive(Default)]
    pub struct RecordingToastHost {
        pub mounted: RefCell<Vec<Toast>>,
        pub timers: RefCell<Vec<(String, u32)>>,
    }

    impl RecordingToastHost {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn mounted_ids(&self) -> Vec<String> {
            self.mounted.borrow().iter().map(|t| t.id.clone()).collect()
        }

        /// Ejecutar el timer de un toast
        pub fn fire(&self, id: &str) {
            let mut timers = self.timers.borrow_mut();
            if let Some(pos) = timers.iter().position(|(t, _)| t == id) {
                timers.remove(pos);
                self.mounted.borrow_mut().retain(|t| t.id != id);
            }
        }
    }

    impl ToastHost for RecordingToastHost {
        type Handle = String;

        fn mount(&self, toast: &Toast) -> Result<String, AppError> {
            self.mounted.borrow_mut().push(toast.clone());
            Ok(toast.id.clone())
        }

        fn remove_after(&self, handle: String, delay_ms: u32) {
            self.timers.borrow_mut().push((handle, delay_ms));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_toast_gets_its_own_timer() {
        let center = NotificationCenter::new(RecordingToastHost::new(), 3000);
        let first = center.show("Shirt added to cart!").unwrap();
        let second = center.show("Shirt added to cart!").unwrap();

        let host = center.host();
        assert_eq!(host.mounted_ids(), vec![first.id.clone(), second.id.clone()]);
        assert_eq!(
            *host.timers.borrow(),
            vec![(first.id.clone(), 3000), (second.id.clone(), 3000)]
        );

        // El orden de eliminación no depende del de creación
        host.fire(&second.id);
        assert_eq!(host.mounted_ids(), vec![first.id.clone()]);
        host.fire(&first.id);
        assert!(host.mounted_ids().is_empty());
        assert!(host.timers.borrow().is_empty());
    }

    #[test]
    fn toast_carries_configured_duration() {
        let center = NotificationCenter::new(RecordingToastHost::new(), 1200);
        let toast = center.show("x").unwrap();
        assert_eq!(toast.duration_ms, 1200);
        assert_eq!(toast.message, "x");
    }
}
