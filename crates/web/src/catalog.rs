//! Category grouping for the storefront.
//!
//! Partitions a recency-ordered product list into the fixed, ordered set
//! of category buckets. Every bucket is present in display order even
//! when empty; a product lands in exactly the bucket matching its
//! category label, and products with labels outside the closed set are
//! dropped from the categorized view (they remain in the flat list the
//! storefront renders alongside it).

use lazzat_core::Category;

use crate::models::Product;

/// One storefront category bucket.
#[derive(Debug, Clone)]
pub struct CategoryBucket {
    /// The bucket's category.
    pub category: Category,
    /// Products in this bucket, preserving the input order.
    pub products: Vec<Product>,
}

impl CategoryBucket {
    /// Human-readable bucket title for templates.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        self.category.display_name()
    }
}

/// Partition products into the ten fixed category buckets.
#[must_use]
pub fn categorize(products: &[Product]) -> Vec<CategoryBucket> {
    let mut buckets: Vec<CategoryBucket> = Category::ALL
        .into_iter()
        .map(|category| CategoryBucket {
            category,
            products: Vec::new(),
        })
        .collect();

    for product in products {
        let Ok(category) = Category::parse(&product.category) else {
            // Unknown label: excluded from the categorized view.
            continue;
        };
        if let Some(bucket) = buckets.iter_mut().find(|b| b.category == category) {
            bucket.products.push(product.clone());
        }
    }

    buckets
}
