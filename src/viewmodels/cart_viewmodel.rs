// ============================================================================
// CART VIEWMODEL - "Añadir al carrito" -> toast
// ============================================================================

use crate::error::AppError;
use crate::models::Toast;
use crate::services::{NotificationCenter, ToastHost};
use crate::utils::constants::FALLBACK_PRODUCT_NAME;

/// `"<name> added to cart!"`, con nombre genérico si la tarjeta no tiene
pub fn added_to_cart_message(product_name: Option<&str>) -> String {
    let name = product_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(FALLBACK_PRODUCT_NAME);
    format!("{name} added to cart!")
}

pub struct CartViewModel<H> {
    notifications: NotificationCenter<H>,
}

impl<H: ToastHost> CartViewModel<H> {
    pub fn new(notifications: NotificationCenter<H>) -> Self {
        Self { notifications }
    }

    pub fn add_to_cart(&self, product_name: Option<&str>) -> Result<Toast, AppError> {
        self.notifications.show(added_to_cart_message(product_name))
    }
}
