use anyhow::Result;
use tokenization::Client;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let _ = dotenv::dotenv();

    // Reads TOKENIZATION_API_KEY, TOKENIZATION_API_SECRET and optionally TOKENIZATION_ENDPOINT.
    let client = Client::builder().build()?;
    println!("Listing customers at {}", client.endpoint());

    for customer in client.get_customers().await? {
        println!(
            "{} {} {}",
            customer.id,
            customer.details.firstname.as_deref().unwrap_or("-"),
            customer.details.lastname.as_deref().unwrap_or("-"),
        );

        for wallet in client.get_retail_wallets(customer.id).await? {
            println!("  wallet {} asset type {}", wallet.id, wallet.asset_type.0);
        }
    }

    Ok(())
}
