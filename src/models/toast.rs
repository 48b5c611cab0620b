// ============================================================================
// TOAST - Notificación transitoria
// ============================================================================

use uuid::Uuid;

/// Notificación transitoria. Cada toast tiene su propio timer de eliminación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            id: format!("toast-{}", Uuid::new_v4()),
            message: message.into(),
            duration_ms,
        }
    }

    /// Estilo inline del toast. La animación de salida empieza 300ms
    /// antes de eliminarlo.
    pub fn inline_style(&self) -> String {
        let exit_delay = f64::from(self.duration_ms.saturating_sub(300)) / 1000.0;
        format!(
            "position: fixed; top: 20px; right: 20px; background-color: #FF6B00; color: #000; \
             padding: 15px 25px; border-radius: 8px; font-weight: 600; z-index: 1000; \
             animation: slideIn 0.3s ease, slideOut 0.3s ease {exit_delay}s;"
        )
    }
}

/// Keyframes usados por [`Toast::inline_style`]
pub const TOAST_KEYFRAMES: &str = "\
@keyframes slideIn {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}";
