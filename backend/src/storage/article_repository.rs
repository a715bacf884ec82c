use anyhow::Result;
use shared::Article;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::db::DbConnection;

/// Metadata row for an uploaded article
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub file_name: Option<String>,
    pub upload_date: String,
}

/// Repository for the `articles` table
#[derive(Clone)]
pub struct ArticleRepository {
    db: DbConnection,
}

impl ArticleRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert article metadata inside a transaction and return the stored row.
    /// Nothing is visible to readers unless the commit succeeds.
    pub async fn store_article(&self, article: &NewArticle) -> Result<Article> {
        let mut tx = self.db.pool().begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO articles (title, file_name, upload_date)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&article.title)
        .bind(&article.file_name)
        .bind(&article.upload_date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Article {
            id: result.last_insert_rowid(),
            title: article.title.clone(),
            file_name: article.file_name.clone(),
            upload_date: article.upload_date.clone(),
        })
    }

    /// List every article, newest first
    pub async fn list_articles(&self) -> Result<Vec<Article>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, file_name, upload_date
            FROM articles
            ORDER BY id DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        let articles = rows
            .iter()
            .map(article_from_row)
            .collect::<Result<Vec<_>, sqlx::Error>>()?;
        Ok(articles)
    }
}

fn article_from_row(row: &SqliteRow) -> Result<Article, sqlx::Error> {
    Ok(Article {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        file_name: row.try_get("file_name")?,
        upload_date: row.try_get("upload_date")?,
    })
}
