pub mod login_viewmodel;
pub mod session_viewmodel;
pub mod cart_viewmodel;

pub use login_viewmodel::{LoginOutcome, LoginViewModel, PendingLogin};
pub use session_viewmodel::{GuardOutcome, SessionViewModel};
pub use cart_viewmodel::{added_to_cart_message, CartViewModel};
