//! API router with Swagger UI
//!
//! Each service keeps its own route prefix and handler state:
//! `/product`, `/order`, `/identity`, `/notification`.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{EmailService, OrderService, ProductService, ProfileService};

use super::modules::health::{self, HealthState};
use super::modules::metrics::{self, http_metrics_middleware, MetricsState};
use super::modules::request_id::request_id_middleware;
use super::modules::{notifications, orders, products, profiles};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Products
        products::create_product,
        products::list_products,
        products::get_product,
        products::update_product,
        products::delete_product,
        products::list_products_by_category,
        products::list_products_by_brand,
        products::update_product_quantity,
        // Orders
        orders::create_order,
        orders::list_orders,
        orders::get_order,
        orders::update_order,
        orders::delete_order,
        orders::list_orders_by_user,
        // Profiles
        profiles::create_profile,
        profiles::list_profiles,
        profiles::get_profile,
        profiles::update_profile,
        profiles::delete_profile,
        // Notifications
        notifications::send_email,
    ),
    components(
        schemas(
            // Products
            products::ProductDto,
            products::ProductListDto,
            products::CreateProductRequest,
            products::UpdateProductRequest,
            // Orders
            orders::OrderItemDto,
            orders::OrderDto,
            orders::OrderListDto,
            orders::CreateOrderRequest,
            orders::UpdateOrderRequest,
            // Profiles
            profiles::ProfileDto,
            profiles::ProfileListDto,
            profiles::CreateProfileRequest,
            profiles::UpdateProfileRequest,
            // Notifications
            notifications::RecipientDto,
            notifications::SendEmailRequest,
            notifications::EmailResponseDto,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Products", description = "Product catalog: CRUD, category and brand listings, stock"),
        (name = "Orders", description = "Order placement, status updates and per-user listings"),
        (name = "Profiles", description = "User profiles of the identity service"),
        (name = "Notifications", description = "Transactional email through the mail provider"),
    ),
    info(
        title = "Storefront Services API",
        version = "0.1.0",
        description = "Product, order, identity and notification services. Listings accept page, limit, sortBy and sortDirection."
    )
)]
pub struct ApiDoc;

/// Application services the router dispatches to
#[derive(Clone)]
pub struct ApiServices {
    pub products: Arc<ProductService>,
    pub orders: Arc<OrderService>,
    pub profiles: Arc<ProfileService>,
    pub email: Arc<EmailService>,
}

/// Create the API router with all routes.
///
/// `/metrics` is mounted only when a Prometheus handle is supplied.
pub fn create_api_router(
    services: ApiServices,
    health_state: HealthState,
    metrics_handle: Option<PrometheusHandle>,
) -> Router {
    let product_routes = Router::new()
        .route("/create-product", post(products::create_product))
        .route("/get-all-products", get(products::list_products))
        .route("/update-product/{id}", put(products::update_product))
        .route("/delete-product/{id}", delete(products::delete_product))
        .route(
            "/category/{category_id}",
            get(products::list_products_by_category),
        )
        .route("/brand/{brand_id}", get(products::list_products_by_brand))
        .route("/{id}/quantity", put(products::update_product_quantity))
        .route("/{id}", get(products::get_product))
        .with_state(products::ProductHandlerState {
            service: services.products,
        });

    let order_routes = Router::new()
        .route("/create-order", post(orders::create_order))
        .route("/get-all-orders", get(orders::list_orders))
        .route("/update-order/{id}", put(orders::update_order))
        .route("/delete-order/{id}", delete(orders::delete_order))
        .route("/user/{user_id}", get(orders::list_orders_by_user))
        .route("/{id}", get(orders::get_order))
        .with_state(orders::OrderHandlerState {
            service: services.orders,
        });

    let profile_routes = Router::new()
        .route("/create-profile", post(profiles::create_profile))
        .route("/get-all-profiles", get(profiles::list_profiles))
        .route("/update-profile/{id}", put(profiles::update_profile))
        .route("/delete-profile/{id}", delete(profiles::delete_profile))
        .route("/{id}", get(profiles::get_profile))
        .with_state(profiles::ProfileHandlerState {
            service: services.profiles,
        });

    let notification_routes = Router::new()
        .route("/email/send", post(notifications::send_email))
        .with_state(notifications::NotificationHandlerState {
            service: services.email,
        });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .nest("/product", product_routes)
        .nest("/order", order_routes)
        .nest("/identity", profile_routes)
        .nest("/notification", notification_routes);

    if let Some(handle) = metrics_handle {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics::prometheus_metrics))
                .with_state(MetricsState { handle }),
        );
    }

    router
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
