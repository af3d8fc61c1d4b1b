use std::env;

use log::info;

use super::*;

/// Client against a real deployment, enabled with `TOKENIZATION_TEST=on`.
fn live_client() -> Option<Client> {
    init_logger();
    let _ = dotenv::dotenv();

    if env::var("TOKENIZATION_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    Some(
        Client::builder()
            .build()
            .expect("TOKENIZATION_API_KEY and TOKENIZATION_API_SECRET must be set"),
    )
}

#[tokio::test]
async fn test_live_get_customers() -> anyhow::Result<()> {
    let Some(client) = live_client() else {
        return Ok(());
    };

    let customers = client.get_customers().await?;
    info!("listed {} customers", customers.len());

    if let Some(customer) = customers.first() {
        let fetched = client.get_customer(customer.id).await?;
        assert_eq!(fetched.id, customer.id);
    }
    Ok(())
}

#[tokio::test]
async fn test_live_search_customers() -> anyhow::Result<()> {
    let Some(client) = live_client() else {
        return Ok(());
    };

    let customers = client.search_customers("Test", 5, 0).await?;
    assert!(customers.len() <= 5);
    Ok(())
}
