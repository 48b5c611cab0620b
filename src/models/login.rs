// ============================================================================
// LOGIN - Pasos del formulario y errores de validación
// ============================================================================

use crate::models::mobile::MobileNumber;

/// Paso del formulario de login
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginStep {
    #[default]
    AwaitingMobile,
    AwaitingOtp { mobile: MobileNumber },
    /// OTP aceptado, verificación en curso
    Verifying { mobile: MobileNumber, otp: String },
}

impl LoginStep {
    pub fn is_otp_step(&self) -> bool {
        !matches!(self, LoginStep::AwaitingMobile)
    }

    pub fn mobile(&self) -> Option<&MobileNumber> {
        match self {
            LoginStep::AwaitingMobile => None,
            LoginStep::AwaitingOtp { mobile } | LoginStep::Verifying { mobile, .. } => Some(mobile),
        }
    }

    pub fn is_verifying(&self) -> bool {
        matches!(self, LoginStep::Verifying { .. })
    }

    /// Submit del formulario. Lee el input del paso actual; con error el
    /// paso no cambia. Un submit durante la verificación no hace nada.
    pub fn submit(&self, mobile_input: &str, otp_input: &str) -> Result<LoginStep, LoginError> {
        match self {
            LoginStep::AwaitingMobile => {
                let mobile = MobileNumber::parse(mobile_input)?;
                Ok(LoginStep::AwaitingOtp { mobile })
            }
            LoginStep::AwaitingOtp { mobile } => {
                let otp = otp_input.trim();
                if otp.is_empty() {
                    return Err(LoginError::EmptyOtp);
                }
                // Cualquier OTP no vacío va al backend, sin validar formato
                Ok(LoginStep::Verifying {
                    mobile: mobile.clone(),
                    otp: otp.to_string(),
                })
            }
            LoginStep::Verifying { .. } => Ok(self.clone()),
        }
    }

    /// OTP rechazado: vuelta al paso OTP con el mismo número
    pub fn verification_failed(&self) -> LoginStep {
        match self {
            LoginStep::Verifying { mobile, .. } => LoginStep::AwaitingOtp { mobile: mobile.clone() },
            other => other.clone(),
        }
    }
}

/// Región de error inline de cada mensaje
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRegion {
    Mobile,
    Otp,
}

/// Errores de validación para el usuario. `Display` es el mensaje inline exacto.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Please enter a mobile number")]
    EmptyMobile,

    #[error("Mobile number must be exactly 10 digits")]
    InvalidLength,

    #[error("Mobile number should contain only digits")]
    NonDigit,

    #[error("Mobile number should start with 6, 7, 8, or 9")]
    InvalidPrefix,

    #[error("Please enter OTP")]
    EmptyOtp,

    /// El backend de auth rechazó el OTP
    #[error("Login failed. Please try again.")]
    VerificationFailed,
}

impl LoginError {
    pub fn region(&self) -> ErrorRegion {
        match self {
            LoginError::EmptyMobile
            | LoginError::InvalidLength
            | LoginError::NonDigit
            | LoginError::InvalidPrefix => ErrorRegion::Mobile,
            LoginError::EmptyOtp | LoginError::VerificationFailed => ErrorRegion::Otp,
        }
    }
}
