use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use af_platform::config::{mask_database_url, DatabaseConfig, EnvironmentConfig};
use af_platform::repositories::PgUserDirectory;
use af_platform::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚢 AF Platform - Operaciones");
    info!("================================================");

    let config = EnvironmentConfig::from_env().context("Configuración inválida")?;
    info!("⚙️ Entorno: {}", config.environment);

    // Inicializar base de datos
    let db_config = DatabaseConfig::from(&config);
    info!("🗄️ Conectando a {}", mask_database_url(&db_config.url));
    let pool = match db_config.create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Error ejecutando migraciones")?;

    let directory = Arc::new(PgUserDirectory::new(pool));
    let app_state = AppState::new(config.clone(), directory)
        .context("Error creando cliente del servicio de embarques")?;
    info!("🔗 Servicio de embarques: {}", config.shipment_api_url);

    let app = create_router(app_state);

    let addr: SocketAddr = config.server_url().parse()?;
    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET   /health");
    info!("   GET   /api/shipments/:shipment_id/route-nodes");
    info!("   PUT   /api/shipments/:shipment_id/route-nodes");
    info!("   PATCH /api/shipments/:shipment_id/route-nodes/:sequence");
    info!("   GET   /api/users");
    info!("   GET   /api/users/:uid");
    info!("   GET   /api/profile");
    info!("   GET   /api/site/company");
    info!("   GET   /api/site/services");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
