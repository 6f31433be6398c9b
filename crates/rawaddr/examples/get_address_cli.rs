use rawaddr::rawaddr::{Address, RawAddr};
use std::env;
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::Agent;

fn main() -> anyhow::Result<()> {
    let agent = Agent::from(
        Agent::config_builder()
            .tls_config(
                TlsConfig::builder()
                    .provider(TlsProvider::NativeTls)
                    .build(),
            )
            .build(),
    );
    let api_server =
        env::var("RAWADDR_URL").unwrap_or_else(|_| "https://blockchain.info".to_string());
    let rawaddr = RawAddr::new(api_server)?;

    let address = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Missing address"))?;

    let mut resp = agent.run(rawaddr.get_address(&address)?)?;

    let ledger: Address = resp.body_mut().read_json()?;

    println!("{}", serde_json::to_string_pretty(&ledger)?);

    Ok(())
}
