use sqlx::SqlitePool;

use crate::domain::company::{Company, NewCompany};

const SCHEMA_VERSION: i32 = 1;

/// Applies version 1 of the store schema: the `kununu_top_companies`
/// table, an auto-increment id, and a secondary index on every other
/// column. A no-op once the tracked `user_version` has caught up.
pub async fn init_store(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let version: i32 = sqlx::query_scalar("PRAGMA user_version")
        .fetch_one(pool)
        .await?;
    if version >= SCHEMA_VERSION {
        return Ok(());
    }

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS kununu_top_companies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            verified INTEGER,
            num_reviews INTEGER,
            kununu_score REAL,
            salary_satisfaction REAL,
            recommendation_rate REAL,
            kununu_url TEXT,
            country_code TEXT,
            city TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_top_companies_name ON kununu_top_companies(name);
        CREATE INDEX IF NOT EXISTS idx_top_companies_verified ON kununu_top_companies(verified);
        CREATE INDEX IF NOT EXISTS idx_top_companies_num_reviews ON kununu_top_companies(num_reviews);
        CREATE INDEX IF NOT EXISTS idx_top_companies_kununu_score ON kununu_top_companies(kununu_score);
        CREATE INDEX IF NOT EXISTS idx_top_companies_salary_satisfaction ON kununu_top_companies(salary_satisfaction);
        CREATE INDEX IF NOT EXISTS idx_top_companies_recommendation_rate ON kununu_top_companies(recommendation_rate);
        CREATE INDEX IF NOT EXISTS idx_top_companies_kununu_url ON kununu_top_companies(kununu_url);
        CREATE INDEX IF NOT EXISTS idx_top_companies_country_code ON kununu_top_companies(country_code);
        CREATE INDEX IF NOT EXISTS idx_top_companies_city ON kununu_top_companies(city);
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(&format!("PRAGMA user_version = {}", SCHEMA_VERSION))
        .execute(pool)
        .await?;

    Ok(())
}

/// Inserts one company row and returns the id the store assigned to it.
pub async fn insert_company(
    company: &NewCompany,
    pool: &SqlitePool,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        insert into kununu_top_companies
            (name, verified, num_reviews, kununu_score, salary_satisfaction,
             recommendation_rate, kununu_url, country_code, city)
        values
            (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
    )
    .bind(&company.name)
    .bind(company.verified)
    .bind(company.num_reviews)
    .bind(company.kununu_score)
    .bind(company.salary_satisfaction)
    .bind(company.recommendation_rate)
    .bind(company.kununu_url.as_deref())
    .bind(company.country_code.as_deref())
    .bind(company.city.as_deref())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn get_companies(pool: &SqlitePool) -> Result<Vec<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        r#"
        select
            id, name, verified, num_reviews, kununu_score, salary_satisfaction,
            recommendation_rate, kununu_url, country_code, city
        from
            kununu_top_companies
        order by
            id
        "#,
    )
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    use super::{get_companies, init_store, insert_company};
    use crate::domain::company::NewCompany;

    async fn store() -> SqlitePool {
        // one connection, an in-memory db per connection otherwise
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        init_store(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn name_only_insert_gets_a_store_assigned_id() {
        let pool = store().await;

        let id = insert_company(&NewCompany::named("Siemens"), &pool)
            .await
            .unwrap();

        assert!(id > 0);
        let companies = get_companies(&pool).await.unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].id, id);
        assert_eq!(companies[0].name, "Siemens");
        assert_eq!(companies[0].verified, None);
        assert_eq!(companies[0].kununu_score, None);
    }

    #[tokio::test]
    async fn ids_are_unique_across_inserts() {
        let pool = store().await;

        let first = insert_company(&NewCompany::named("Siemens"), &pool)
            .await
            .unwrap();
        let second = insert_company(&NewCompany::named("Bosch"), &pool)
            .await
            .unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn full_row_round_trips() {
        let pool = store().await;
        let company = NewCompany {
            name: "Zalando".to_string(),
            verified: Some(true),
            num_reviews: Some(1874),
            kununu_score: Some(3.9),
            salary_satisfaction: Some(3.2),
            recommendation_rate: Some(0.71),
            kununu_url: Some("https://www.kununu.com/de/zalando".to_string()),
            country_code: Some("de".to_string()),
            city: Some("Berlin".to_string()),
        };

        let id = insert_company(&company, &pool).await.unwrap();
        let companies = get_companies(&pool).await.unwrap();

        assert_eq!(companies.len(), 1);
        let row = &companies[0];
        assert_eq!(row.id, id);
        assert_eq!(row.name, company.name);
        assert_eq!(row.verified, Some(true));
        assert_eq!(row.num_reviews, Some(1874));
        assert_eq!(row.kununu_url, company.kununu_url);
        assert_eq!(row.city, company.city);
    }

    #[tokio::test]
    async fn schema_v1_has_the_table_indexes_and_version() {
        let pool = store().await;

        let version: i32 = sqlx::query_scalar("PRAGMA user_version")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(version, 1);

        let indexes: Vec<String> = sqlx::query_scalar(
            r#"
            select name from sqlite_master
            where type = 'index'
              and tbl_name = 'kununu_top_companies'
              and name like 'idx_%'
            "#,
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(indexes.len(), 9);
    }

    #[tokio::test]
    async fn init_store_is_idempotent() {
        let pool = store().await;

        insert_company(&NewCompany::named("Siemens"), &pool)
            .await
            .unwrap();
        init_store(&pool).await.unwrap();

        assert_eq!(get_companies(&pool).await.unwrap().len(), 1);
    }
}
