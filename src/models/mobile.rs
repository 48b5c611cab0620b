// ============================================================================
// MOBILE NUMBER - Validación y formato de números móviles (India)
// ============================================================================

use std::fmt;
use crate::models::login::LoginError;

/// Cantidad exacta de dígitos de un número
pub const MOBILE_LENGTH: usize = 10;

/// Número móvil validado: 10 dígitos, empieza por 6, 7, 8 o 9
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Validar el input. Los checks van en orden y paran en el primer fallo:
    /// vacío, longitud, solo dígitos, primer dígito.
    pub fn parse(raw: &str) -> Result<Self, LoginError> {
        let value = raw.trim();

        if value.is_empty() {
            return Err(LoginError::EmptyMobile);
        }

        // Longitud en caracteres, no en bytes
        if value.chars().count() != MOBILE_LENGTH {
            return Err(LoginError::InvalidLength);
        }

        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(LoginError::NonDigit);
        }

        if !matches!(value.as_bytes()[0], b'6'..=b'9') {
            return Err(LoginError::InvalidPrefix);
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Filtro en vivo del input móvil: descarta todo lo que no sea 0-9
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Reescribe la primera secuencia de 10 dígitos como `<cc> DDDD DDD DDD`.
/// Sin esa secuencia, el valor vuelve sin cambios.
pub fn format_mobile_number(value: &str, country_code: &str) -> String {
    let bytes = value.as_bytes();
    let mut run_start = 0;
    let mut run_len = 0;

    for (i, b) in bytes.iter().enumerate() {
        if b.is_ascii_digit() {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if run_len == MOBILE_LENGTH {
                let digits = &value[run_start..=i];
                return format!(
                    "{}{} {} {} {}{}",
                    &value[..run_start],
                    country_code,
                    &digits[0..4],
                    &digits[4..7],
                    &digits[7..10],
                    &value[i + 1..],
                );
            }
        } else {
            run_len = 0;
        }
    }

    value.to_string()
}
