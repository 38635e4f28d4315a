use rand::{distr::Alphanumeric, Rng};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{session_store::ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::{role::Role, user::CreateUserParam},
    util::password::hash_password,
};

const BOOTSTRAP_PASSWORD_LENGTH: usize = 16;

/// How often expired sessions are removed from the store.
const EXPIRED_SESSION_SWEEP: std::time::Duration = std::time::Duration::from_secs(60 * 60);

/// Connects to the database and runs pending migrations.
///
/// This function must complete successfully before the application can access the
/// database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the Postgres session table.
///
/// Migrates the session table, starts a background task that deletes expired
/// sessions, and expires idle sessions after 7 days.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to add to the router
/// - `Err(AppError::SqlxErr)` - Session table migration failed
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<PostgresStore>, AppError> {
    let pool = db.get_postgres_connection_pool();
    let session_store = PostgresStore::new(pool.clone());

    session_store.migrate().await?;

    let deletion_store = session_store.clone();
    tokio::spawn(async move {
        if let Err(e) = deletion_store
            .continuously_delete_expired(EXPIRED_SESSION_SWEEP)
            .await
        {
            tracing::error!("Expired session cleanup stopped: {}", e);
        }
    });

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Creates the first admin account when no admin exists.
///
/// The generated password is logged once; it cannot be recovered afterwards, so
/// it should be changed after the first login.
///
/// # Returns
/// - `Ok(())` - An admin already existed or was created
/// - `Err(AppError::Conflict)` - The configured username belongs to another account
pub async fn bootstrap_admin(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    if user_repo
        .find_by_username(&config.admin_username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(format!(
            "Cannot create admin '{}': username is taken by a non-admin account",
            config.admin_username
        )));
    }

    let password: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(BOOTSTRAP_PASSWORD_LENGTH)
        .map(char::from)
        .collect();

    user_repo
        .create(CreateUserParam {
            username: config.admin_username.clone(),
            password_hash: hash_password(&password, config.bcrypt_cost)?,
            role: Role::Admin,
            email: None,
            name: "Administrator".to_string(),
        })
        .await?;

    tracing::warn!(
        "No admin account found. Created '{}' with password: {}",
        config.admin_username,
        password
    );

    Ok(())
}
