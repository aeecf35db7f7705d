use async_trait::async_trait;

use crate::domain::error::TodoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo};

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError>;
    async fn get(&self, id: TodoId) -> Result<Todo, TodoError>;
    async fn list(&self) -> Result<Vec<Todo>, TodoError>;
    async fn update(&self, id: TodoId, input: UpdateTodo) -> Result<Todo, TodoError>;
    async fn delete(&self, id: TodoId) -> Result<(), TodoError>;
}

/// Owns the validation that must hold for every store variant: a todo body
/// is never persisted empty, on create or on update.
#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError> {
        if input.body.is_empty() {
            tracing::warn!("trying to create a todo without a body");
            return Err(TodoError::BodyRequired);
        }
        Ok(self.repo.create(input).await?)
    }

    async fn get(&self, id: TodoId) -> Result<Todo, TodoError> {
        self.repo.get(id).await?.ok_or(TodoError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.repo.list().await?)
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> Result<Todo, TodoError> {
        if input.body.as_deref() == Some("") {
            return Err(TodoError::BodyRequired);
        }
        self.repo.update(id, input).await?.ok_or(TodoError::NotFound)
    }

    async fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(TodoError::NotFound)
        }
    }
}
