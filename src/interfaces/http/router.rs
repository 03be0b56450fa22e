//! API router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, patch},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{CustomerService, OrderService, ProductService};
use crate::domain::RepositoryProvider;

use super::common::ErrorBody;
use super::modules::customers::{self, CustomerState};
use super::modules::health::{self, HealthState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::orders::{self, OrderState};
use super::modules::products::{self, ProductState};
use super::modules::request_id::request_id_middleware;

pub const API_PREFIX: &str = "/api/v1";

/// Shared state for every API route. Handlers pull their own slice through
/// `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub customers: Arc<CustomerService>,
    pub products: Arc<ProductService>,
    pub orders: Arc<OrderService>,
    pub started_at: Arc<Instant>,
}

impl AppState {
    /// Wires the services on top of `repos`.
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            customers: Arc::new(CustomerService::new(repos.customers())),
            products: Arc::new(ProductService::new(repos.products())),
            orders: Arc::new(OrderService::new(
                repos.orders(),
                repos.products(),
                repos.customers(),
            )),
            started_at: Arc::new(Instant::now()),
            repos,
        }
    }
}

impl FromRef<AppState> for CustomerState {
    fn from_ref(s: &AppState) -> Self {
        CustomerState {
            service: Arc::clone(&s.customers),
        }
    }
}

impl FromRef<AppState> for ProductState {
    fn from_ref(s: &AppState) -> Self {
        ProductState {
            service: Arc::clone(&s.products),
        }
    }
}

impl FromRef<AppState> for OrderState {
    fn from_ref(s: &AppState) -> Self {
        OrderState {
            service: Arc::clone(&s.orders),
        }
    }
}

impl FromRef<AppState> for HealthState {
    fn from_ref(s: &AppState) -> Self {
        HealthState {
            repos: Arc::clone(&s.repos),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// Router toggles taken from the `[api]` config section
#[derive(Debug, Clone, Copy)]
pub struct RouterOptions {
    pub swagger_enabled: bool,
    pub cors_permissive: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            swagger_enabled: true,
            cors_permissive: true,
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        customers::create_customer,
        customers::list_customers,
        customers::get_customer,
        customers::get_customer_by_cpf,
        customers::update_customer,
        customers::delete_customer,
        products::create_product,
        products::list_products,
        products::get_product,
        products::update_product,
        products::delete_product,
        orders::fake_checkout,
        orders::list_orders,
        orders::get_order,
        orders::update_order_status,
    ),
    components(
        schemas(
            ErrorBody,
            health::HealthResponse,
            health::ComponentHealth,
            customers::CustomerDto,
            customers::CustomerRequest,
            products::ProductDto,
            products::ProductRequest,
            orders::OrderDto,
            orders::OrderItemDto,
            orders::OrderItemInput,
            orders::CreateOrderRequest,
            orders::CheckoutResponse,
            orders::UpdateStatusRequest,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and database probe"),
        (name = "Customers", description = "Customer registration, identified by CPF"),
        (name = "Products", description = "Menu catalog: snacks, sides, drinks and desserts"),
        (name = "Orders", description = "Checkout and kitchen status tracking"),
    ),
    info(
        title = "Snack Bar API",
        version = "1.0.0",
        description = "Self-service ordering for a fast-food counter",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Builds the full HTTP application.
///
/// `/metrics` is only mounted when a Prometheus handle is given.
pub fn create_api_router(
    state: AppState,
    options: RouterOptions,
    metrics: Option<PrometheusHandle>,
) -> Router {
    let customer_routes = Router::new()
        .route(
            "/",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route("/cpf/{cpf}", get(customers::get_customer_by_cpf))
        .route(
            "/{id}",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        );

    let product_routes = Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        );

    let order_routes = Router::new()
        .route("/", get(orders::list_orders).post(orders::fake_checkout))
        .route("/{id}", get(orders::get_order))
        .route("/{id}/status", patch(orders::update_order_status));

    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .nest("/clientes", customer_routes)
        .nest("/produtos", product_routes)
        .nest("/pedidos", order_routes);

    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .nest(API_PREFIX, api_routes)
        .with_state(state);

    if let Some(handle) = metrics {
        router = router.merge(
            Router::new()
                .route("/metrics", get(prometheus_metrics))
                .with_state(MetricsState { handle }),
        );
    }

    if options.swagger_enabled {
        router = router
            .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()));
    }

    let cors = if options.cors_permissive {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    router
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
}
