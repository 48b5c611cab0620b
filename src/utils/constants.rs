// ============================================================================
// CONSTANTS - Ids de la página y textos de la UI
// ============================================================================

// Markup de la página de login
pub const LOGIN_FORM_ID: &str = "loginForm";
pub const MOBILE_INPUT_ID: &str = "mobileNumber";
pub const OTP_INPUT_ID: &str = "otp";
pub const MOBILE_ERROR_ID: &str = "errorMessage";
pub const OTP_ERROR_ID: &str = "otpErrorMessage";
pub const MOBILE_GROUP_ID: &str = "mobileGroup";
pub const OTP_GROUP_ID: &str = "otpGroup";
pub const HELPER_TEXT_ID: &str = "footerText";
pub const LOGIN_BUTTON_SELECTOR: &str = ".login-btn";

// Páginas protegidas
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const USER_MOBILE_ID: &str = "userMobile";
pub const LOGOUT_BUTTON_ID: &str = "logoutBtn";

// Carrito
pub const ADD_CART_BUTTON_SELECTOR: &str = ".add-cart-btn";
pub const PRODUCT_NAME_SELECTOR: &str = "h3";
pub const TOAST_KEYFRAMES_ID: &str = "toast-keyframes";

// Bloque de overrides de config en la página
pub const APP_CONFIG_SCRIPT_ID: &str = "app-config";

// Textos
pub const HELPER_TEXT_MOBILE: &str = "We will send an OTP to this number";
pub const HELPER_TEXT_OTP: &str = "Enter the OTP sent to your mobile number";
pub const BUTTON_LABEL_MOBILE: &str = "Get OTP";
pub const BUTTON_LABEL_OTP: &str = "Verify OTP";
pub const BUTTON_LABEL_VERIFYING: &str = "Logging in...";
pub const FALLBACK_PRODUCT_NAME: &str = "Item";
