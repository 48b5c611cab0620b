pub mod login;
pub mod home;
pub mod toast;
pub mod cart;

pub use login::mount_login;
pub use home::mount_protected_page;
pub use toast::DomToastHost;
pub use cart::mount_cart_buttons;
