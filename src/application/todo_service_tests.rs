#[cfg(test)]
mod tests {
    use super::super::todo_service::{TodoService, TodoServiceImpl};
    use crate::domain::error::TodoError;
    use crate::domain::todo::{CreateTodo, TodoId, UpdateTodo};
    use crate::infrastructure::memory_repo::MemoryTodoRepository;

    fn service() -> TodoServiceImpl<MemoryTodoRepository> {
        TodoServiceImpl::new(MemoryTodoRepository::default())
    }

    #[tokio::test]
    async fn create_assigns_id_and_starts_uncompleted() {
        let service = service();
        let created = service.create(CreateTodo { body: "buy milk".into() }).await.unwrap();
        assert!(!created.completed);
        assert_eq!(created.body, "buy milk");
        let got = service.get(created.id).await.unwrap();
        assert_eq!(got, created);
    }

    #[tokio::test]
    async fn create_rejects_empty_body_and_persists_nothing() {
        let service = service();
        let err = service.create(CreateTodo { body: String::new() }).await.unwrap_err();
        assert!(matches!(err, TodoError::BodyRequired));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_touches_only_provided_fields() {
        let service = service();
        let created = service.create(CreateTodo { body: "a".into() }).await.unwrap();
        let updated = service
            .update(created.id, UpdateTodo { completed: Some(true), body: None })
            .await
            .unwrap();
        assert!(updated.completed);
        assert_eq!(updated.body, "a");
    }

    #[tokio::test]
    async fn update_rejects_empty_body_and_leaves_record_alone() {
        let service = service();
        let created = service.create(CreateTodo { body: "a".into() }).await.unwrap();
        let err = service
            .update(created.id, UpdateTodo { completed: None, body: Some(String::new()) })
            .await
            .unwrap_err();
        assert!(matches!(err, TodoError::BodyRequired));
        assert_eq!(service.get(created.id).await.unwrap().body, "a");
    }

    #[tokio::test]
    async fn missing_ids_surface_not_found() {
        let service = service();
        let id = TodoId::default();
        assert!(matches!(service.get(id).await.unwrap_err(), TodoError::NotFound));
        assert!(matches!(
            service.update(id, UpdateTodo::default()).await.unwrap_err(),
            TodoError::NotFound
        ));
        assert!(matches!(service.delete(id).await.unwrap_err(), TodoError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_exactly_once() {
        let service = service();
        let created = service.create(CreateTodo { body: "a".into() }).await.unwrap();
        service.delete(created.id).await.unwrap();
        assert!(matches!(service.get(created.id).await.unwrap_err(), TodoError::NotFound));
        assert!(matches!(service.delete(created.id).await.unwrap_err(), TodoError::NotFound));
    }

    #[tokio::test]
    async fn list_preserves_creation_order() {
        let service = service();
        for body in ["first", "second", "third"] {
            service.create(CreateTodo { body: body.into() }).await.unwrap();
        }
        let bodies: Vec<String> =
            service.list().await.unwrap().into_iter().map(|t| t.body).collect();
        assert_eq!(bodies, ["first", "second", "third"]);
    }
}
