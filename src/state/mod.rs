// ============================================================================
// STATE MODULE - Estado con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod login_state;

pub use reactivity::ReactiveState;
pub use login_state::{LoginCopy, LoginFormState, LoginView};
