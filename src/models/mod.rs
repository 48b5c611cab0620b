pub mod mobile;
pub mod login;
pub mod session;
pub mod toast;
pub mod page;

pub use mobile::{MobileNumber, format_mobile_number, strip_non_digits};
pub use login::{ErrorRegion, LoginError, LoginStep};
pub use session::{SessionRecord, StoredSession};
pub use toast::Toast;
pub use page::Page;
