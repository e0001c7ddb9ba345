use async_trait::async_trait;
use sqlx::{Executor, PgPool, Postgres};

use super::model::{Card, CardRequest, CardRow};
use crate::db::RepositoryError;

const CARD_COLUMNS: &str = "id, owner_id, title, description, image_url, set_name, condition, rarity, game, \
                            quantity, price_min, price_max, list_type, created_at";

#[async_trait]
pub trait CardRepository: Send + Sync {
  async fn search(&self, title: Option<&str>) -> Result<Vec<Card>, RepositoryError>;
  async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Card>, RepositoryError>;
  async fn create(&self, owner_id: i32, card: &CardRequest) -> Result<Card, RepositoryError>;
  async fn update(&self, owner_id: i32, card_id: i32, card: &CardRequest) -> Result<Option<Card>, RepositoryError>;
  async fn delete(&self, owner_id: i32, card_id: i32) -> Result<bool, RepositoryError>;
}

pub struct SqlxCardRepository {
  pub pool: PgPool,
}

impl SqlxCardRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CardRepository for SqlxCardRepository {
  async fn search(&self, title: Option<&str>) -> Result<Vec<Card>, RepositoryError> {
    Ok(search(&self.pool, title).await?)
  }

  async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Card>, RepositoryError> {
    Ok(find_by_owner(&self.pool, owner_id).await?)
  }

  async fn create(&self, owner_id: i32, card: &CardRequest) -> Result<Card, RepositoryError> {
    Ok(create(&self.pool, owner_id, card).await?)
  }

  async fn update(&self, owner_id: i32, card_id: i32, card: &CardRequest) -> Result<Option<Card>, RepositoryError> {
    Ok(update(&self.pool, owner_id, card_id, card).await?)
  }

  async fn delete(&self, owner_id: i32, card_id: i32) -> Result<bool, RepositoryError> {
    Ok(delete(&self.pool, owner_id, card_id).await?)
  }
}

/// Case-insensitive substring match on the title; `None` returns every card.
pub async fn search<'e, E>(executor: E, title: Option<&str>) -> Result<Vec<Card>, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let sql = format!(
    "SELECT {} FROM cards WHERE ($1::TEXT IS NULL OR strpos(lower(title), lower($1)) > 0) ORDER BY id",
    CARD_COLUMNS
  );

  let rows = sqlx::query_as::<_, CardRow>(&sql).bind(title).fetch_all(executor).await?;

  Ok(rows.into_iter().map(Card::from).collect())
}

pub async fn find_by_owner<'e, E>(executor: E, owner_id: i32) -> Result<Vec<Card>, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let sql = format!("SELECT {} FROM cards WHERE owner_id = $1 ORDER BY id", CARD_COLUMNS);

  let rows = sqlx::query_as::<_, CardRow>(&sql).bind(owner_id).fetch_all(executor).await?;

  Ok(rows.into_iter().map(Card::from).collect())
}

pub async fn create<'e, E>(executor: E, owner_id: i32, card: &CardRequest) -> Result<Card, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let sql = format!(
    r#"
      INSERT INTO cards (owner_id, title, description, image_url, set_name, condition, rarity, game,
                         quantity, price_min, price_max, list_type)
      VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
      RETURNING {}
    "#,
    CARD_COLUMNS
  );

  let row = sqlx::query_as::<_, CardRow>(&sql)
    .bind(owner_id)
    .bind(&card.title)
    .bind(&card.description)
    .bind(&card.image_url)
    .bind(&card.set_name)
    .bind(&card.condition)
    .bind(&card.rarity)
    .bind(&card.game)
    .bind(card.quantity)
    .bind(card.price_min)
    .bind(card.price_max)
    .bind(card.list.as_str())
    .fetch_one(executor)
    .await?;

  Ok(row.into())
}

pub async fn update<'e, E>(executor: E, owner_id: i32, card_id: i32, card: &CardRequest) -> Result<Option<Card>, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let sql = format!(
    r#"
      UPDATE cards
      SET title = $3, description = $4, image_url = $5, set_name = $6, condition = $7, rarity = $8,
          game = $9, quantity = $10, price_min = $11, price_max = $12, list_type = $13
      WHERE id = $1 AND owner_id = $2
      RETURNING {}
    "#,
    CARD_COLUMNS
  );

  let row = sqlx::query_as::<_, CardRow>(&sql)
    .bind(card_id)
    .bind(owner_id)
    .bind(&card.title)
    .bind(&card.description)
    .bind(&card.image_url)
    .bind(&card.set_name)
    .bind(&card.condition)
    .bind(&card.rarity)
    .bind(&card.game)
    .bind(card.quantity)
    .bind(card.price_min)
    .bind(card.price_max)
    .bind(card.list.as_str())
    .fetch_optional(executor)
    .await?;

  Ok(row.map(Card::from))
}

pub async fn delete<'e, E>(executor: E, owner_id: i32, card_id: i32) -> Result<bool, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  let result = sqlx::query("DELETE FROM cards WHERE id = $1 AND owner_id = $2")
    .bind(card_id)
    .bind(owner_id)
    .execute(executor)
    .await?;

  Ok(result.rows_affected() > 0)
}
