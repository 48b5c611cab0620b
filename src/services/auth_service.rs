// ============================================================================
// AUTH SERVICE - Verificación del OTP (simulada)
// ============================================================================

use gloo_timers::future::TimeoutFuture;
use crate::config::AppConfig;
use crate::error::AuthError;
use crate::models::MobileNumber;

/// Verifica un OTP para un número. UI de un solo hilo, sin `Send`.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn verify(&self, mobile: &MobileNumber, otp: &str) -> Result<(), AuthError>;
}

/// Sin servidor: espera un retardo fijo y acepta cualquier OTP.
/// Con retardo 0 responde sin pasar por el timer.
#[derive(Debug, Clone)]
pub struct SimulatedAuth {
    delay_ms: u32,
}

impl SimulatedAuth {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.login_delay_ms)
    }
}

impl AuthBackend for SimulatedAuth {
    async fn verify(&self, mobile: &MobileNumber, _otp: &str) -> Result<(), AuthError> {
        log::info!("🔐 [AUTH] Verificando OTP para {} ({} ms simulados)", mobile, self.delay_ms);
        if self.delay_ms > 0 {
            TimeoutFuture::new(self.delay_ms).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn accepts_any_otp() {
        let auth = SimulatedAuth::new(0);
        let mobile = MobileNumber::parse("9876543210").unwrap();
        for otp in ["123456", "000000", "1", "not-a-code"] {
            assert_eq!(block_on(auth.verify(&mobile, otp)), Ok(()), "{otp}");
        }
    }

    #[test]
    fn delay_comes_from_config() {
        let config = AppConfig { login_delay_ms: 250, ..AppConfig::default() };
        assert_eq!(SimulatedAuth::from_config(&config).delay_ms, 250);
    }
}
