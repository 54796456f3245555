use cafe_order::lifecycle::tracing::setup_tracing;
use cafe_order::lifecycle::{AppConfig, CafeSystem};
use cafe_order::model::{CAPPUCCINO, ESPRESSO};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = AppConfig::from_env();
    info!(?config, "Starting cafe demo");
    let system = CafeSystem::new(config).await?;

    system.show_register();
    system.register("alice", "secret").await?;
    let session = system
        .login("alice", "secret")
        .instrument(tracing::info_span!("login"))
        .await?;

    let placed = async {
        system.sessions.toggle(session, ESPRESSO).await?;
        system.sessions.toggle(session, CAPPUCCINO).await?;
        let total = system.sessions.total(session).await?;
        info!(%total, "Selection ready");
        system.place_order(session).await
    }
    .instrument(tracing::info_span!("ordering", %session))
    .await?;

    println!("{}", placed.summary);
    println!("QR: {}", placed.qr_data);

    if let Err(e) = placed.persistence.wait().await {
        warn!(error = %e, "Receipt was not saved");
    }

    system.logout(session).await?;
    system.shutdown().await?;
    Ok(())
}
