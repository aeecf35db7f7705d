use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    repository::TodoRepository,
    todo::{CreateTodo, Todo, TodoId, UpdateTodo},
};

/// In-process ordered list of todos. The lock makes concurrent mutations
/// safe; ids are random, never derived from the list length.
#[derive(Clone, Default)]
pub struct MemoryTodoRepository {
    items: Arc<RwLock<Vec<Todo>>>,
}

#[async_trait]
impl TodoRepository for MemoryTodoRepository {
    async fn init(&self) -> Result<()> { Ok(()) }

    async fn create(&self, input: CreateTodo) -> Result<Todo> {
        let todo = Todo { id: TodoId::default(), completed: false, body: input.body };
        self.items.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>> {
        Ok(self.items.read().await.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        Ok(self.items.read().await.clone())
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> Result<Option<Todo>> {
        let mut items = self.items.write().await;
        let Some(todo) = items.iter_mut().find(|t| t.id == id) else { return Ok(None) };
        if let Some(completed) = input.completed { todo.completed = completed; }
        if let Some(body) = input.body { todo.body = body; }
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: TodoId) -> Result<bool> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|t| t.id != id);
        Ok(items.len() < before)
    }
}
