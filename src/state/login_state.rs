// ============================================================================
// LOGIN FORM STATE - Paso actual + errores inline, y su vista pura
// ============================================================================

use crate::models::{ErrorRegion, LoginError, LoginStep};
use crate::utils::constants::{
    BUTTON_LABEL_MOBILE, BUTTON_LABEL_OTP, BUTTON_LABEL_VERIFYING, HELPER_TEXT_MOBILE,
    HELPER_TEXT_OTP,
};

/// Estado transitorio de la página de login. Se pierde al navegar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginFormState {
    pub step: LoginStep,
    pub mobile_error: Option<String>,
    pub otp_error: Option<String>,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_errors(&mut self) {
        self.mobile_error = None;
        self.otp_error = None;
    }

    pub fn show_error(&mut self, error: &LoginError) {
        let slot = match error.region() {
            ErrorRegion::Mobile => &mut self.mobile_error,
            ErrorRegion::Otp => &mut self.otp_error,
        };
        *slot = Some(error.to_string());
    }
}

/// Texto de ayuda y labels del botón por paso. Los del paso móvil se
/// reemplazan por los que trae el markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCopy {
    pub helper_mobile: String,
    pub helper_otp: String,
    pub button_mobile: String,
    pub button_otp: String,
    pub button_verifying: String,
}

impl Default for LoginCopy {
    fn default() -> Self {
        Self {
            helper_mobile: HELPER_TEXT_MOBILE.to_string(),
            helper_otp: HELPER_TEXT_OTP.to_string(),
            button_mobile: BUTTON_LABEL_MOBILE.to_string(),
            button_otp: BUTTON_LABEL_OTP.to_string(),
            button_verifying: BUTTON_LABEL_VERIFYING.to_string(),
        }
    }
}

impl LoginCopy {
    /// Conservar el texto no vacío del markup para el primer paso
    pub fn with_markup(mut self, helper: Option<String>, button: Option<String>) -> Self {
        if let Some(helper) = helper.filter(|t| !t.trim().is_empty()) {
            self.helper_mobile = helper.trim().to_string();
        }
        if let Some(button) = button.filter(|t| !t.trim().is_empty()) {
            self.button_mobile = button.trim().to_string();
        }
        self
    }
}

/// Todo lo que necesita el markup de login, derivado de [`LoginFormState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub show_mobile_group: bool,
    pub show_otp_group: bool,
    pub helper_text: String,
    pub button_label: String,
    pub button_disabled: bool,
    pub focus_otp: bool,
    pub mobile_error: String,
    pub otp_error: String,
}

impl LoginView {
    pub fn from_state(state: &LoginFormState, copy: &LoginCopy) -> Self {
        let (helper_text, button_label) = match state.step {
            LoginStep::AwaitingMobile => (&copy.helper_mobile, &copy.button_mobile),
            LoginStep::AwaitingOtp { .. } => (&copy.helper_otp, &copy.button_otp),
            LoginStep::Verifying { .. } => (&copy.helper_otp, &copy.button_verifying),
        };

        Self {
            show_mobile_group: !state.step.is_otp_step(),
            show_otp_group: state.step.is_otp_step(),
            helper_text: helper_text.clone(),
            button_label: button_label.clone(),
            button_disabled: state.step.is_verifying(),
            focus_otp: matches!(state.step, LoginStep::AwaitingOtp { .. }),
            mobile_error: state.mobile_error.clone().unwrap_or_default(),
            otp_error: state.otp_error.clone().unwrap_or_default(),
        }
    }
}
