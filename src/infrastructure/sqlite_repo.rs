use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use uuid::Uuid;

use crate::domain::{
    repository::TodoRepository,
    todo::{CreateTodo, Todo, TodoId, UpdateTodo},
};

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteTodoRepository {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Self { pool: Arc::new(pool) })
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn init(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id TEXT PRIMARY KEY,
                completed INTEGER NOT NULL,
                body TEXT NOT NULL
            )",
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }

    async fn create(&self, input: CreateTodo) -> Result<Todo> {
        let todo = Todo { id: TodoId::default(), completed: false, body: input.body };
        sqlx::query("INSERT INTO todos (id, completed, body) VALUES (?1, ?2, ?3)")
            .bind(todo.id.to_string())
            .bind(todo.completed)
            .bind(&todo.body)
            .execute(&*self.pool)
            .await?;
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>> {
        let row = sqlx::query("SELECT id, completed, body FROM todos WHERE id = ?1")
            .bind(id.to_string())
            .fetch_optional(&*self.pool)
            .await?;
        row.map(row_to_todo).transpose()
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        // rowid order is insertion order, matching the in-memory variant
        let rows = sqlx::query("SELECT id, completed, body FROM todos ORDER BY rowid")
            .fetch_all(&*self.pool)
            .await?;
        rows.into_iter().map(row_to_todo).collect()
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> Result<Option<Todo>> {
        let existing = self.get(id).await?;
        let Some(mut todo) = existing else { return Ok(None) };

        if let Some(completed) = input.completed { todo.completed = completed; }
        if let Some(body) = input.body { todo.body = body; }

        sqlx::query("UPDATE todos SET completed = ?2, body = ?3 WHERE id = ?1")
            .bind(todo.id.to_string())
            .bind(todo.completed)
            .bind(&todo.body)
            .execute(&*self.pool)
            .await?;

        Ok(Some(todo))
    }

    async fn delete(&self, id: TodoId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id.to_string())
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn row_to_todo(row: SqliteRow) -> Result<Todo> {
    let id: String = row.try_get("id")?;
    let completed: bool = row.try_get("completed")?;
    let body: String = row.try_get("body")?;
    let id = Uuid::parse_str(&id).with_context(|| format!("stored id {id:?} is not a uuid"))?;
    Ok(Todo { id: TodoId(id), completed, body })
}
