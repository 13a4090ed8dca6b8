//! In-memory repositories for development and testing
//!
//! Same listing semantics as the SeaORM repositories: scope filter, sort by
//! the requested field (unknown fields sort by creation time), id as the
//! tie-breaker, then slice.

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::{
    DomainError, DomainResult, Order, OrderRepository, OrderScope, OrderStatus, PagedRepository,
    Product, ProductRepository, ProductScope, RepositoryProvider, UserProfile,
    UserProfileRepository,
};
use crate::shared::pagination::{PageRequest, PaginatedResult, SortDirection};

fn paginate<T: Clone>(
    rows: impl Iterator<Item = T>,
    request: &PageRequest,
    compare: impl Fn(&T, &T) -> Ordering,
    id: impl Fn(&T) -> &str,
) -> PaginatedResult<T> {
    let mut rows: Vec<T> = rows.collect();
    rows.sort_by(|a, b| {
        let primary = match request.sort_direction {
            SortDirection::Ascending => compare(a, b),
            SortDirection::Descending => compare(b, a),
        };
        primary.then_with(|| id(a).cmp(id(b)))
    });

    let total = rows.len() as u64;
    let items = rows
        .into_iter()
        .skip(usize::try_from(request.offset()).unwrap_or(usize::MAX))
        .take(usize::try_from(request.limit).unwrap_or(usize::MAX))
        .collect();
    PaginatedResult::new(items, total, request.page, request.limit)
}

// ── Products ────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: DashMap<String, Product>,
}

fn compare_products(field: &str) -> impl Fn(&Product, &Product) -> Ordering + '_ {
    move |a, b| match field {
        "name" => a.name.cmp(&b.name),
        "price" => a.price.total_cmp(&b.price),
        "quantity" => a.quantity.total_cmp(&b.quantity),
        "updatedAt" | "updated_at" => a.updated_at.cmp(&b.updated_at),
        _ => a.created_at.cmp(&b.created_at),
    }
}

#[async_trait]
impl PagedRepository for InMemoryProductRepository {
    type Item = Product;
    type Scope = ProductScope;

    async fn find_page(
        &self,
        scope: Option<ProductScope>,
        request: &PageRequest,
    ) -> DomainResult<PaginatedResult<Product>> {
        let rows = self
            .rows
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|p| match &scope {
                Some(ProductScope::Category(id)) => &p.category_id == id,
                Some(ProductScope::Brand(id)) => &p.brand_id == id,
                None => true,
            });
        Ok(paginate(
            rows,
            request,
            compare_products(&request.sort_field),
            |p| p.id.as_str(),
        ))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Product>> {
        Ok(self.rows.get(id).map(|p| p.clone()))
    }

    async fn save(&self, product: Product) -> DomainResult<Product> {
        if self.rows.contains_key(&product.id) {
            return Err(DomainError::Conflict(format!("Product {} already exists", product.id)));
        }
        self.rows.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> DomainResult<Product> {
        match self.rows.get_mut(&product.id) {
            Some(mut slot) => {
                *slot = product.clone();
                Ok(product)
            }
            None => Err(DomainError::not_found("Product", product.id)),
        }
    }

    async fn update_quantity(&self, id: &str, quantity: f64) -> DomainResult<Option<Product>> {
        Ok(self.rows.get_mut(id).map(|mut p| {
            p.quantity = quantity;
            p.updated_at = Utc::now();
            p.clone()
        }))
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        Ok(self.rows.remove(id).is_some())
    }
}

// ── Orders ──────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryOrderRepository {
    rows: DashMap<String, Order>,
}

fn compare_orders(field: &str) -> impl Fn(&Order, &Order) -> Ordering + '_ {
    move |a, b| match field {
        "totalAmount" | "total_amount" => a.total_amount.total_cmp(&b.total_amount),
        "status" => a.status.to_string().cmp(&b.status.to_string()),
        "updatedAt" | "updated_at" => a.updated_at.cmp(&b.updated_at),
        _ => a.created_at.cmp(&b.created_at),
    }
}

#[async_trait]
impl PagedRepository for InMemoryOrderRepository {
    type Item = Order;
    type Scope = OrderScope;

    async fn find_page(
        &self,
        scope: Option<OrderScope>,
        request: &PageRequest,
    ) -> DomainResult<PaginatedResult<Order>> {
        let rows = self
            .rows
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|o| match &scope {
                Some(OrderScope::User(user_id)) => &o.user_id == user_id,
                None => true,
            });
        Ok(paginate(
            rows,
            request,
            compare_orders(&request.sort_field),
            |o| o.id.as_str(),
        ))
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Order>> {
        Ok(self.rows.get(id).map(|o| o.clone()))
    }

    async fn save(&self, order: Order) -> DomainResult<Order> {
        self.rows.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> DomainResult<Option<Order>> {
        Ok(self.rows.get_mut(id).map(|mut o| {
            o.status = status;
            o.updated_at = Utc::now();
            o.clone()
        }))
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        Ok(self.rows.remove(id).is_some())
    }
}

// ── User profiles ───────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryUserProfileRepository {
    rows: DashMap<String, UserProfile>,
}

fn compare_profiles(field: &str) -> impl Fn(&UserProfile, &UserProfile) -> Ordering + '_ {
    move |a, b| match field {
        "username" => a.username.cmp(&b.username),
        "email" => a.email.cmp(&b.email),
        "name" => a.name.cmp(&b.name),
        "updatedAt" | "updated_at" => a.updated_at.cmp(&b.updated_at),
        _ => a.created_at.cmp(&b.created_at),
    }
}

#[async_trait]
impl PagedRepository for InMemoryUserProfileRepository {
    type Item = UserProfile;
    type Scope = ();

    async fn find_page(
        &self,
        _scope: Option<()>,
        request: &PageRequest,
    ) -> DomainResult<PaginatedResult<UserProfile>> {
        let rows = self.rows.iter().map(|entry| entry.value().clone());
        Ok(paginate(
            rows,
            request,
            compare_profiles(&request.sort_field),
            |p| p.id.as_str(),
        ))
    }
}

#[async_trait]
impl UserProfileRepository for InMemoryUserProfileRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<UserProfile>> {
        Ok(self.rows.get(id).map(|p| p.clone()))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<UserProfile>> {
        Ok(self
            .rows
            .iter()
            .find(|entry| entry.username == username)
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<UserProfile>> {
        Ok(self
            .rows
            .iter()
            .find(|entry| entry.email == email)
            .map(|entry| entry.value().clone()))
    }

    async fn save(&self, profile: UserProfile) -> DomainResult<UserProfile> {
        self.rows.insert(profile.id.clone(), profile.clone());
        Ok(profile)
    }

    async fn update(&self, profile: UserProfile) -> DomainResult<UserProfile> {
        match self.rows.get_mut(&profile.id) {
            Some(mut slot) => {
                *slot = profile.clone();
                Ok(profile)
            }
            None => Err(DomainError::not_found("UserProfile", profile.id)),
        }
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        Ok(self.rows.remove(id).is_some())
    }
}

// ── Provider ────────────────────────────────────────────────────

/// Repository provider backed by concurrent in-memory maps
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    products: InMemoryProductRepository,
    orders: InMemoryOrderRepository,
    user_profiles: InMemoryUserProfileRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn products(&self) -> &dyn ProductRepository {
        &self.products
    }

    fn orders(&self) -> &dyn OrderRepository {
        &self.orders
    }

    fn user_profiles(&self) -> &dyn UserProfileRepository {
        &self.user_profiles
    }
}
