use rawaddr::rawaddr::{Address, RawAddr};
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
    let rawaddr = RawAddr::new("https://blockchain.info")?;
    let address = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";

    let mut resp = agent.run(rawaddr.get_address(address)?)?;

    let address: Address = resp.body_mut().read_json()?;

    println!("{address:#?}");

    Ok(())
}
