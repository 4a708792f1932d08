use mx_store::{
    config::AppConfig,
    db::{create_orm_conn, create_pool, run_migrations},
    repository::PgProductRepository,
    services::seed_service::seed_products,
};

/// `seed [count]`: inserts random products, `SEED_COUNT` (20) by default.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let count = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .map_err(|_| anyhow::anyhow!("count must be a non-negative integer, got {arg:?}"))?,
        None => config.seed_count,
    };

    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;
    let repo = PgProductRepository::new(create_orm_conn(pool));

    let inserted = seed_products(&repo, count).await?;
    println!("Seeded {inserted} products");
    Ok(())
}
