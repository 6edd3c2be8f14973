//! Storefront demo
//!
//! Drives list -> view -> add -> checkout against a configured commerce
//! API. Set `SHOP_BASE_URL` and `SHOP_API_PATH` (a `.env` file works),
//! then:
//!
//! ```sh
//! RUST_LOG=info cargo run --example storefront
//! ```

use shop_client::{CartCoordinator, CheckoutForm, ClientConfig, HttpClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env()?;
    let client = HttpClient::new(&config)?;
    let shop = CartCoordinator::new(client);

    shop.initialize().await?;
    let state = shop.store().snapshot().await;
    println!(
        "{} products in the catalog, cart total {}",
        state.products.len(),
        state.cart.total
    );

    if let Some(product) = state.products.first() {
        println!("viewing {} ({})", product.title, product.id);
        shop.view_product(&product.id).await;
        shop.set_quantity(2).await;
        shop.confirm_add().await?;

        let cart = shop.store().snapshot().await.cart;
        println!(
            "cart now has {} line(s), total {} / discounted {}",
            cart.carts.len(),
            cart.total,
            cart.final_total
        );
    }

    let mut form = CheckoutForm {
        email: "a@b.com".to_string(),
        name: "王小明".to_string(),
        tel: "0912345678".to_string(),
        address: "台北市".to_string(),
        message: String::new(),
    };
    shop.submit_order(&mut form).await?;
    println!("order submitted, cart cleared");

    Ok(())
}
