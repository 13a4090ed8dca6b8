//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{db_err, order_for};
use crate::domain::{DomainResult, PagedRepository, Product, ProductRepository, ProductScope};
use crate::infrastructure::database::entities::product;
use crate::shared::pagination::{PageRequest, PaginatedResult};

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(model: product::Model) -> Product {
    Product {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        quantity: model.quantity,
        category_id: model.category_id,
        brand_id: model.brand_id,
        image_url: model.image_url,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn domain_to_active(p: Product) -> product::ActiveModel {
    product::ActiveModel {
        id: Set(p.id),
        name: Set(p.name),
        description: Set(p.description),
        price: Set(p.price),
        quantity: Set(p.quantity),
        category_id: Set(p.category_id),
        brand_id: Set(p.brand_id),
        image_url: Set(p.image_url),
        created_at: Set(p.created_at),
        updated_at: Set(p.updated_at),
    }
}

/// Unknown fields sort by creation time.
fn sort_column(field: &str) -> product::Column {
    match field {
        "name" => product::Column::Name,
        "price" => product::Column::Price,
        "quantity" => product::Column::Quantity,
        "updatedAt" | "updated_at" => product::Column::UpdatedAt,
        _ => product::Column::CreatedAt,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl PagedRepository for SeaOrmProductRepository {
    type Item = Product;
    type Scope = ProductScope;

    async fn find_page(
        &self,
        scope: Option<ProductScope>,
        request: &PageRequest,
    ) -> DomainResult<PaginatedResult<Product>> {
        let mut query = product::Entity::find();

        match scope {
            Some(ProductScope::Category(id)) => {
                query = query.filter(product::Column::CategoryId.eq(id));
            }
            Some(ProductScope::Brand(id)) => {
                query = query.filter(product::Column::BrandId.eq(id));
            }
            None => {}
        }

        query = query
            .order_by(sort_column(&request.sort_field), order_for(request.sort_direction))
            .order_by_asc(product::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let models = query
            .offset(request.offset())
            .limit(request.limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items = models.into_iter().map(model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, request.page, request.limit))
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Product>> {
        let model = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn save(&self, product: Product) -> DomainResult<Product> {
        let saved = domain_to_active(product)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn update(&self, product: Product) -> DomainResult<Product> {
        let updated = domain_to_active(product)
            .update(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model_to_domain(updated))
    }

    async fn update_quantity(&self, id: &str, quantity: f64) -> DomainResult<Option<Product>> {
        let Some(existing) = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let mut active: product::ActiveModel = existing.into();
        active.quantity = Set(quantity);
        active.updated_at = Set(Utc::now());
        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(Some(model_to_domain(updated)))
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        let result = product::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_column_falls_back_to_created_at() {
        use sea_orm::IdenStatic;

        assert_eq!(sort_column("price").as_str(), "price");
        assert_eq!(sort_column("updatedAt").as_str(), "updated_at");
        assert_eq!(sort_column("createdAt").as_str(), "created_at");
        assert_eq!(sort_column("; DROP TABLE products").as_str(), "created_at");
    }
}
