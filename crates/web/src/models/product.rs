//! Product domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use lazzat_core::ProductId;

/// A catalog product.
///
/// The category is kept as the raw stored label rather than the closed
/// [`lazzat_core::Category`] enum: a label outside the closed set is
/// rejected on create and update, but a row already carrying one must
/// still load so it can appear in the flat product list (the
/// categorized view drops it).
///
/// Serialized in camelCase for the JSON endpoints the original
/// storefront scripts consume.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier, immutable.
    pub id: ProductId,
    /// Product name, non-empty.
    pub name: String,
    /// Unit price, strictly positive (store constraint).
    pub price: f64,
    /// Image reference (URL or path).
    pub image: String,
    /// Raw category label.
    pub category: String,
    /// Set once at creation, immutable.
    pub created_at: DateTime<Utc>,
}
