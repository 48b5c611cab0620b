pub mod storage;
pub mod session_store;
pub mod auth_service;
pub mod navigation;
pub mod notification_service;

pub use storage::{BrowserStorage, KeyValueStorage, MemoryStorage};
pub use session_store::SessionStore;
pub use auth_service::{AuthBackend, SimulatedAuth};
pub use navigation::{Navigator, WindowNavigator};
pub use notification_service::{NotificationCenter, ToastHost};
