//! Restaurant Backend — order-management REST API.
//!
//! Entry point. Architecture:
//!
//! ```text
//! ┌──────────┐    ┌─────────────┐    ┌────────────┐    ┌────────────┐
//! │  Config  │───▶│   Gateway   │───▶│  Service   │───▶│ PostgreSQL │
//! │  (YAML)  │    │ (axum/HTTP) │    │ (validate) │    │  (orders)  │
//! └──────────┘    └─────────────┘    └────────────┘    └────────────┘
//! ```

use std::sync::Arc;

use restaurant_backend::config::AppConfig;
use restaurant_backend::db::Database;
use restaurant_backend::gateway;
use restaurant_backend::logging::init_logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _guard = init_logging(&config);

    println!("🍽️  Restaurant Backend starting (env: {})", env);

    let db = match Database::connect(&config.postgres_url).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            eprintln!("❌ FATAL: PostgreSQL connection failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db.init_schema().await {
        eprintln!("❌ FATAL: Failed to initialize order store schema: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = db.health_check().await {
        eprintln!("❌ FATAL: Database health check failed: {}", e);
        std::process::exit(1);
    }

    let port = get_port_override().unwrap_or(config.gateway.port);
    gateway::run_server(&config.gateway.host, port, db).await;
}
