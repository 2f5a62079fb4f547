use crate::core::database::ConnectionProvider;
use crate::shared::constants::DEFAULT_CATEGORIES;

/// Create the `categories` and `files` tables if they are missing and seed
/// default categories when the table is empty.
///
/// Safe to run on every startup. The caller decides whether a failure is
/// fatal; this function only reports it.
pub async fn initialize(db: &ConnectionProvider) -> Result<(), sqlx::Error> {
    let mut conn = db.connect().await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL UNIQUE
        )
        "#,
    )
    .execute(&mut conn)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS files (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            description VARCHAR(255) NOT NULL,
            source_url TEXT NOT NULL,
            category_id INT REFERENCES categories(id) ON DELETE SET NULL,
            media_type VARCHAR(50) NOT NULL
        )
        "#,
    )
    .execute(&mut conn)
    .await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut conn)
        .await?;

    if count == 0 {
        for name in DEFAULT_CATEGORIES {
            sqlx::query("INSERT INTO categories (name) VALUES ($1)")
                .bind(name)
                .execute(&mut conn)
                .await?;
        }
        tracing::info!("Seeded {} default categories", DEFAULT_CATEGORIES.len());
    }

    Ok(())
}
