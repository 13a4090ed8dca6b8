//! Product catalog service

use std::sync::Arc;

use tracing::info;

use crate::application::listing::list_page;
use crate::domain::{
    CreateProductDto, DomainError, DomainResult, Product, ProductScope, RepositoryProvider,
    UpdateProductDto,
};
use crate::shared::pagination::{PageParams, PaginatedResult};

/// Service for product catalog operations
pub struct ProductService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ProductService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, dto: CreateProductDto) -> DomainResult<Product> {
        let product = self.repos.products().save(Product::new(dto)).await?;
        info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    pub async fn get(&self, id: &str) -> DomainResult<Product> {
        self.repos
            .products()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", id))
    }

    pub async fn update(&self, id: &str, dto: UpdateProductDto) -> DomainResult<Product> {
        let mut product = self.get(id).await?;
        product.apply(dto);
        self.repos.products().update(product).await
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        if !self.repos.products().delete(id).await? {
            return Err(DomainError::not_found("Product", id));
        }
        info!(product_id = %id, "Product deleted");
        Ok(())
    }

    pub async fn update_quantity(&self, id: &str, quantity: f64) -> DomainResult<Product> {
        if !quantity.is_finite() {
            return Err(DomainError::Validation("newQuantity must be a finite number".into()));
        }
        self.repos
            .products()
            .update_quantity(id, quantity)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", id))
    }

    pub async fn list(&self, params: PageParams) -> DomainResult<PaginatedResult<Product>> {
        list_page(self.repos.products(), params, None).await
    }

    pub async fn list_by_category(
        &self,
        category_id: &str,
        params: PageParams,
    ) -> DomainResult<PaginatedResult<Product>> {
        let scope = ProductScope::Category(category_id.to_string());
        list_page(self.repos.products(), params, Some(scope)).await
    }

    pub async fn list_by_brand(
        &self,
        brand_id: &str,
        params: PageParams,
    ) -> DomainResult<PaginatedResult<Product>> {
        let scope = ProductScope::Brand(brand_id.to_string());
        list_page(self.repos.products(), params, Some(scope)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn dto(name: &str, category: &str, brand: &str) -> CreateProductDto {
        CreateProductDto {
            name: name.into(),
            description: None,
            price: 10.0,
            quantity: 5.0,
            category_id: category.into(),
            brand_id: brand.into(),
            image_url: None,
        }
    }

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryRepositoryProvider::new()))
    }

    #[tokio::test]
    async fn get_unknown_product_is_not_found() {
        let err = service().get("missing").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Product", .. }));
    }

    #[tokio::test]
    async fn update_quantity_persists() {
        let svc = service();
        let p = svc.create(dto("Mascara", "eyes", "b1")).await.unwrap();
        let updated = svc.update_quantity(&p.id, 2.5).await.unwrap();
        assert_eq!(updated.quantity, 2.5);
        assert_eq!(svc.get(&p.id).await.unwrap().quantity, 2.5);
    }

    #[tokio::test]
    async fn nan_quantity_is_rejected() {
        let svc = service();
        let p = svc.create(dto("Mascara", "eyes", "b1")).await.unwrap();
        let err = svc.update_quantity(&p.id, f64::NAN).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn category_and_brand_scopes_filter() {
        let svc = service();
        svc.create(dto("A", "lips", "b1")).await.unwrap();
        svc.create(dto("B", "lips", "b2")).await.unwrap();
        svc.create(dto("C", "eyes", "b2")).await.unwrap();

        let lips = svc.list_by_category("lips", PageParams::default()).await.unwrap();
        assert_eq!(lips.items.len(), 2);
        assert!(lips.items.iter().all(|p| p.category_id == "lips"));

        let b2 = svc.list_by_brand("b2", PageParams::default()).await.unwrap();
        assert_eq!(b2.items.len(), 2);
        assert!(b2.items.iter().all(|p| p.brand_id == "b2"));

        let none = svc.list_by_brand("nope", PageParams::default()).await.unwrap();
        assert!(none.items.is_empty());
        assert_eq!(none.total_pages, 0);
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let svc = service();
        let p = svc.create(dto("A", "lips", "b1")).await.unwrap();
        svc.delete(&p.id).await.unwrap();
        assert!(matches!(
            svc.delete(&p.id).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }
}
