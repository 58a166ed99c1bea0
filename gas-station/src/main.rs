use gas_station::{Config, EthGasStation, GasPriceSuggester, GasPriority};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    tracing::info!("Using gas station endpoint {:?}", config.endpoint);

    // Tiers to report, all of them by default
    let priorities = std::env::args()
        .skip(1)
        .map(|name| name.parse::<GasPriority>())
        .collect::<Result<Vec<_>, _>>()?;
    let priorities = if priorities.is_empty() {
        GasPriority::ALL.to_vec()
    } else {
        priorities
    };

    let client = EthGasStation::from_config(&config);
    let suggester = GasPriceSuggester::new(client, config.max_price_age).await?;

    for priority in priorities {
        let wei = suggester.suggest(priority).await?;
        println!("{priority}: {wei} wei");
    }

    Ok(())
}
