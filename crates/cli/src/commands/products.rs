//! Products command: print the catalog.

use wonderland_core::{CurrencyCode, Price};

#[allow(clippy::print_stdout)] // catalog listing is the command's output
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api_client()?;

    let products = api.products().await?;
    for product in &products {
        let price = Price::new(product.price, CurrencyCode::USD);
        println!(
            "{}  {:<32} {:>8}  {} / {}",
            product.id, product.name, price, product.category, product.complexity
        );
    }
    println!("{} products", products.len());

    Ok(())
}
