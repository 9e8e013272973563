use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use emp_api::{config, create_app, AppState};
use emp_core::repositories::{EmployeeRepository, InMemoryRefreshTokenStore};
use emp_core::services::{EmployeeService, TokenService};
use emp_infra::{DatabasePool, InMemoryEmployeeRepository, MySqlEmployeeRepository};
use emp_shared::config::{AppConfig, Environment, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    let logging = LoggingConfig::for_environment(Environment::from_env());
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(logging.level.as_str()));

    let config = config::load()?;

    info!("Starting employee service ({})", config.environment);

    let token_service = Arc::new(TokenService::new(
        InMemoryRefreshTokenStore::new(),
        config::token_service_config(&config)?,
    )?);

    if config.database.is_in_memory() {
        info!("DATABASE_URL not set, keeping employees in memory");
        return serve(&config, token_service, InMemoryEmployeeRepository::new()).await;
    }

    let pool = DatabasePool::new(config.database.clone()).await?;
    let repository = MySqlEmployeeRepository::new(pool.get_pool().clone());
    repository.ensure_schema().await?;
    info!("Using MySQL employee store ({})", pool.statistics());

    let result = serve(&config, token_service, repository).await;
    pool.close().await;
    result
}

async fn serve<R>(
    config: &AppConfig,
    token_service: Arc<TokenService<InMemoryRefreshTokenStore>>,
    repository: R,
) -> anyhow::Result<()>
where
    R: EmployeeRepository + 'static,
{
    let employee_service = Arc::new(EmployeeService::new(Arc::new(repository)));
    let state = web::Data::new(
        AppState::new(token_service, employee_service).with_json_limit(config.server.max_payload_size),
    );

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;
    Ok(())
}
