use crate::error::{self, Result};
use crate::export::Exportable;
use crate::record::{Record, RecordId};
use crate::table::{Column, Tabular};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Product tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    /// Premium line.
    Premium,
    /// Standard line.
    Standard,
    /// Basic line.
    Basic,
}

impl ProductCategory {
    /// Every category, in select-box order.
    pub const ALL: [ProductCategory; 3] = [
        ProductCategory::Premium,
        ProductCategory::Standard,
        ProductCategory::Basic,
    ];

    /// Category text.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Premium => "Premium",
            ProductCategory::Standard => "Standard",
            ProductCategory::Basic => "Basic",
        }
    }
}

/// Whether a product is on sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductStatus {
    /// On sale.
    Active,
    /// Withdrawn.
    Inactive,
}

impl ProductStatus {
    /// Display text.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Inactive => "Inactive",
        }
    }
}

/// A catalogue product. Prices are in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Record id.
    pub id: RecordId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: u64,
    /// Units in stock.
    pub stock: u32,
    /// Tier.
    pub category: ProductCategory,
    /// Sale status.
    pub status: ProductStatus,
}

/// Partial update of a [`Product`].
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    /// New name.
    pub name: Option<String>,
    /// New price.
    pub price: Option<u64>,
    /// New stock level.
    pub stock: Option<u32>,
    /// New tier.
    pub category: Option<ProductCategory>,
    /// New status.
    pub status: Option<ProductStatus>,
}

impl Product {
    /// Creates an active product without an id.
    pub fn new(name: &str, price: u64, stock: u32, category: ProductCategory) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            name: name.to_string(),
            price,
            stock,
            category,
            status: ProductStatus::Active,
        }
    }

    /// Value of the units in stock.
    pub fn stock_value(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.stock))
    }
}

impl Record for Product {
    type Patch = ProductPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn category(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.category.as_str()))
    }

    fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn validate(&self) -> Result<()> {
        error::require("name", &self.name)
    }
}

impl Exportable for Product {
    const FIELDS: &'static [&'static str] = &["id", "name", "price", "stock", "category", "status"];
}

impl Tabular for Product {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Name"),
            Column::new("Price"),
            Column::new("Stock"),
            Column::new("Category"),
            Column::new("Status"),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.price.to_string(),
            self.stock.to_string(),
            self.category.as_str().to_string(),
            self.status.as_str().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ListController;

    #[test]
    fn test_paginated_catalogue() {
        let seed: Vec<Product> = (1..=7)
            .map(|i| Product::new(&format!("Product {i}"), 1000 * i, 10, ProductCategory::Basic))
            .collect();
        let mut list = ListController::new(seed).with_page_size(5);
        assert_eq!(list.total_pages(), 2);
        list.set_page(2);
        assert_eq!(list.visible_items().len(), 2);
    }

    #[test]
    fn test_stock_value() {
        let product = Product::new("Premium A", 150_000, 50, ProductCategory::Premium);
        assert_eq!(product.stock_value(), 7_500_000);
    }

    #[test]
    fn test_deactivate() {
        let mut list = ListController::new(vec![Product::new("A", 1, 1, ProductCategory::Basic)]);
        let id = list.items()[0].id;
        list.update(
            id,
            ProductPatch {
                status: Some(ProductStatus::Inactive),
                ..Default::default()
            },
        );
        assert_eq!(list.items()[0].status, ProductStatus::Inactive);
    }
}
