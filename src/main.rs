use std::env;
use tracing::{error, info, Instrument};
use storefront::app_system::{setup_tracing, StoreSystem};
use storefront::config::{StoreConfig, DEFAULT_CONFIG_PATH};
use storefront::domain::UserCreate;
use storefront::shop::{categories, place_order, Cart, CatalogQuery, CheckoutForm, Dashboard, SortBy};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = env::args()
        .nth(1)
        .or_else(|| env::var("STOREFRONT_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = StoreConfig::load_or_default(&config_path)?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_level);
    info!(config = %config_path, "Starting storefront");

    let system = StoreSystem::start(&config).await?;

    let admin = system.user_client.create_user(UserCreate::new("admin", "admin")).await?;
    info!(user_id = admin.id, "Admin account created");

    let span = tracing::info_span!("shopping");
    let placed = async {
        let catalog = system.product_client.list_products().await?;
        let shelves: Vec<String> = categories(&catalog).iter().map(ToString::to_string).collect();
        info!(products = catalog.len(), categories = ?shelves, "Browsing catalog");

        let query = CatalogQuery { sort: SortBy::PriceLow, ..Default::default() };
        let mut cart = Cart::new();
        for product in query.apply(catalog).into_iter().take(2) {
            info!(product = %product.name, price = product.price, "Adding to cart");
            cart.add(product);
        }

        let form = CheckoutForm {
            customer_name: "Anna Petrova".to_string(),
            customer_email: "anna@example.com".to_string(),
            customer_phone: String::new(),
            shipping_address: "Nevsky Prospekt 1, Saint Petersburg".to_string(),
        };
        Ok::<_, Box<dyn std::error::Error>>(place_order(&system.order_client, &mut cart, form).await?)
    }
    .instrument(span)
    .await?;

    println!("{}", serde_json::to_string_pretty(&placed)?);

    let span = tracing::info_span!("fulfilment", order_id = placed.order.id);
    async {
        loop {
            match system.order_client.advance_order_status(placed.order.id).await {
                Ok(order) => info!(status = %order.status, "Order advanced"),
                Err(e) => {
                    info!(reason = %e, "Fulfilment finished");
                    break;
                }
            }
        }
    }
    .instrument(span)
    .await;

    match Dashboard::load(&system.product_client, &system.order_client).await {
        Ok(dashboard) => println!("{}", serde_json::to_string_pretty(&dashboard)?),
        Err(e) => error!(error = %e, "Dashboard unavailable"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Storefront stopped");
    Ok(())
}
