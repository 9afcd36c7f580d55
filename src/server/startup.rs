use sea_orm::DatabaseConnection;

use crate::server::{
    config::{Config, StoreKind},
    data::coupon::{CouponStore, InMemoryCouponRepository},
    error::{config::ConfigError, AppError},
};

/// Installs the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG` and falls back to `info` when it is unset or invalid.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the coupon table exists and is seeded. This
/// function must complete successfully before the database store can serve requests.
///
/// # Arguments
/// - `database_url` - Connection string, e.g. `sqlite://coupons.db?mode=rwc`
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the coupon store selected by configuration.
///
/// The in-memory store starts with the same two coupons the migrations seed.
pub async fn build_store(config: &Config) -> Result<CouponStore, AppError> {
    match config.store {
        StoreKind::Memory => {
            tracing::info!("using in-memory coupon store");
            Ok(CouponStore::InMemory(InMemoryCouponRepository::seeded()))
        }
        StoreKind::Database => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
            let db = connect_to_database(url).await?;
            tracing::info!("using database coupon store");
            Ok(CouponStore::Database(db))
        }
    }
}
