use std::{net::SocketAddr, sync::Arc};

use anyhow::{anyhow, Context};
use decap_oauth_relay::{
    app, config::Config, responses::RelayResponse, services::oauth::client::OAuthClient, AppState,
};
use tokio::net::TcpListener;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "tls")]
use axum_server::tls_rustls::RustlsConfig;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // LOG_FORMAT=json for log shippers, human-readable otherwise
    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env().context("invalid relay configuration")?;

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(config.rate_limit.per_millisecond)
            .burst_size(config.rate_limit.burst)
            .use_headers()
            .error_handler(|_err| {
                RelayResponse::too_many_requests(
                    "Too many requests. Please wait a moment and try again.",
                )
            })
            .finish()
            .ok_or_else(|| anyhow!("rate limiter needs a non-zero period and burst"))?,
    );

    // Drop rate limiter entries for clients that went quiet
    let governor_limiter = governor_conf.limiter().clone();
    std::thread::spawn(move || {
        let interval = std::time::Duration::from_secs(60);
        loop {
            std::thread::sleep(interval);
            governor_limiter.retain_recent();
        }
    });

    let oauth = OAuthClient::new(config.http_timeout).context("failed to build HTTP client")?;
    let addr = config.bind_addr;
    #[cfg(feature = "tls")]
    let tls = config.tls.clone();

    info!(
        %addr,
        state_check = ?config.state_check,
        allowed_origins = config.allowed_origins.len(),
        "starting OAuth relay"
    );

    let state = AppState::new(config, Arc::new(oauth));
    let app = app(state).layer(GovernorLayer {
        config: governor_conf,
    });
    let make_service = app.into_make_service_with_connect_info::<SocketAddr>();

    #[cfg(feature = "tls")]
    {
        if let Some(tls) = tls {
            let tls_config = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
                .await
                .context("failed to load TLS certs")?;

            info!("running with TLS at https://{}", addr);
            axum_server::bind_rustls(addr, tls_config)
                .serve(make_service)
                .await?;
            return Ok(()); // Skip the plain listener when TLS was used
        }
    }

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("running without TLS at http://{}", addr);
    axum::serve(listener, make_service).await?;
    Ok(())
}
