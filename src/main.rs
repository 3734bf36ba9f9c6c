use anyhow::Context;
use verbundkarte::{HttpClient, SparqlClient, VerbundConfig};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = VerbundConfig::default();
    let client = HttpClient::new(&config.user_agent).context("Failed to build HTTP client")?;
    let wikidata = SparqlClient::from_config(&config, &client);
    let today = chrono::Local::now().date_naive();

    verbundkarte::run(&config, &client, &wikidata, today).context("Merging authorities failed")?;
    Ok(())
}
