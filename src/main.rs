use taxi_fare_gw::api::{fare_service, geo_service, service};
use taxi_fare_gw::config::{Config, VARIABLES};

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{e}");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check the environment variables ({}) hold valid values.",
            VARIABLES.join(", ")
        );
    })?;

    config.log();

    let geo = geo_service::Client::new(
        &config.geocoder_url,
        &config.user_agent,
        config.geocode_timeout,
        config.geocode_cache_ttl,
    )?;
    log::info!("Geocoder client ready ({})", config.geocoder_url);

    let fare = fare_service::Client::new(&config.predict_url, config.predict_timeout)?;
    log::info!("Prediction client ready ({})", config.predict_url);

    let state = service::State::new(geo, fare);

    let listen_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    let router = service::router::router(state);

    log::info!("Listening on {listen_addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
