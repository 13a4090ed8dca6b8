//! Product domain entity

use chrono::{DateTime, Utc};

/// Catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Stock on hand. Fractional for products sold by weight or volume.
    pub quantity: f64,
    pub category_id: String,
    pub brand_id: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(dto: CreateProductDto) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: dto.name,
            description: dto.description,
            price: dto.price,
            quantity: dto.quantity,
            category_id: dto.category_id,
            brand_id: dto.brand_id,
            image_url: dto.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, leaving absent fields untouched.
    pub fn apply(&mut self, dto: UpdateProductDto) {
        if let Some(name) = dto.name {
            self.name = name;
        }
        if let Some(description) = dto.description {
            self.description = Some(description);
        }
        if let Some(price) = dto.price {
            self.price = price;
        }
        if let Some(quantity) = dto.quantity {
            self.quantity = quantity;
        }
        if let Some(category_id) = dto.category_id {
            self.category_id = category_id;
        }
        if let Some(brand_id) = dto.brand_id {
            self.brand_id = brand_id;
        }
        if let Some(image_url) = dto.image_url {
            self.image_url = Some(image_url);
        }
        self.updated_at = Utc::now();
    }
}

/// Foreign key a product listing can be narrowed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductScope {
    Category(String),
    Brand(String),
}

#[derive(Debug, Clone)]
pub struct CreateProductDto {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: f64,
    pub category_id: String,
    pub brand_id: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProductDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub category_id: Option<String>,
    pub brand_id: Option<String>,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::new(CreateProductDto {
            name: "Rose Water Toner".into(),
            description: None,
            price: 12.5,
            quantity: 40.0,
            category_id: "skincare".into(),
            brand_id: "brand-a".into(),
            image_url: None,
        })
    }

    #[test]
    fn new_product_gets_id_and_timestamps() {
        let p = sample();
        assert!(!p.id.is_empty());
        assert_eq!(p.created_at, p.updated_at);
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut p = sample();
        let created = p.created_at;
        p.apply(UpdateProductDto {
            price: Some(9.99),
            brand_id: Some("brand-b".into()),
            ..Default::default()
        });
        assert_eq!(p.price, 9.99);
        assert_eq!(p.brand_id, "brand-b");
        assert_eq!(p.name, "Rose Water Toner");
        assert_eq!(p.category_id, "skincare");
        assert_eq!(p.created_at, created);
        assert!(p.updated_at >= created);
    }
}
