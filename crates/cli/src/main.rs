use clap::Parser;
use dns_relay_application::ports::UpstreamExchange;
use dns_relay_application::use_cases::HandleRelayQueryUseCase;
use dns_relay_domain::CliOverrides;
use dns_relay_infrastructure::dns::{
    ChannelEventSink, RelayEventCollector, TracingEventSink, UdpTransport,
};
use dns_relay_infrastructure::hosts::load_hosts_file;
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "dns-relay")]
#[command(version)]
#[command(about = "Minimal DNS relay with a local hosts table and blocking")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver (ip:port)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Hosts file path
    #[arg(long, value_name = "FILE")]
    hosts: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        upstream: cli.upstream.clone(),
        hosts_path: cli.hosts.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting DNS relay v{}", env!("CARGO_PKG_VERSION"));

    let name_table = Arc::new(load_hosts_file(&config.hosts.path)?);

    let upstream_addr = config
        .upstream
        .socket_addr()
        .map_err(|e| anyhow::anyhow!(e))?;
    let upstream = Arc::new(UdpTransport::new(upstream_addr, config.upstream.timeout()));
    info!(
        upstream = %upstream.upstream_name(),
        timeout_ms = config.upstream.query_timeout,
        "Upstream configured"
    );

    let (event_sink, event_rx) = ChannelEventSink::new();
    let collector = RelayEventCollector::new(Arc::new(TracingEventSink));
    let stats = collector.stats();
    let _collector_task = collector.start(event_rx);

    let use_case = Arc::new(HandleRelayQueryUseCase::new(
        name_table,
        upstream,
        Arc::new(event_sink),
        config.hosts.local_ttl,
    ));

    let dns_addr = config.server.listen_addr();

    tokio::select! {
        result = server::start_dns_server(dns_addr, use_case) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    let totals = stats.snapshot();
    info!(
        total = totals.total(),
        local = totals.local,
        blocked = totals.blocked,
        forwarded = totals.forwarded,
        dropped = totals.dropped,
        "Server shutdown complete"
    );
    Ok(())
}
