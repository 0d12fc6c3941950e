#[cfg(test)]
mod tests {
    use ltodo::client::{ApiClient, ClientError};
    use ltodo::db::db::Db;
    use ltodo::server::dto::{CategoryPayload, TodoPayload};
    use ltodo::server::{router, AppState};
    use reqwest::StatusCode;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use tokio::net::TcpListener;

    /// Serves a fresh database on an ephemeral port.
    struct ClientTestContext {
        _temp_dir: TempDir,
        client: ApiClient,
    }

    impl AsyncTestContext for ClientTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("todo.db");
            Db::new(&db_path).unwrap();

            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let address = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, router(AppState::new(db_path))).await.unwrap();
            });

            ClientTestContext {
                _temp_dir: temp_dir,
                client: ApiClient::new(format!("http://{}/api", address)),
            }
        }
    }

    fn todo_payload(title: &str) -> TodoPayload {
        TodoPayload {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test_context(ClientTestContext)]
    #[tokio::test]
    async fn test_health(ctx: &mut ClientTestContext) {
        let health = ctx.client.health().await.unwrap();
        assert_eq!(health.status, "OK");
    }

    #[test_context(ClientTestContext)]
    #[tokio::test]
    async fn test_todo_round_trip(ctx: &mut ClientTestContext) {
        let created = ctx.client.create_todo(&todo_payload("Buy milk")).await.unwrap();
        assert_eq!(created.title, "Buy milk");

        let toggled = ctx.client.toggle_todo(created.id).await.unwrap();
        assert!(toggled.completed);

        let mut payload = todo_payload("Buy oat milk");
        payload.due_date = Some("2024-06-14".to_string());
        let updated = ctx.client.update_todo(created.id, &payload).await.unwrap();
        assert_eq!(updated.title, "Buy oat milk");
        assert!(updated.completed);
        assert_eq!(updated.due_date.map(|d| d.to_string()), Some("2024-06-14".to_string()));

        let listed = ctx.client.list_todos().await.unwrap();
        assert_eq!(listed, vec![ctx.client.get_todo(created.id).await.unwrap()]);

        let deleted = ctx.client.delete_todo(created.id).await.unwrap();
        assert_eq!(deleted.message, "Todo deleted successfully");
        assert!(ctx.client.list_todos().await.unwrap().is_empty());
    }

    #[test_context(ClientTestContext)]
    #[tokio::test]
    async fn test_api_error(ctx: &mut ClientTestContext) {
        let err = ctx.client.get_todo(404).await.unwrap_err();

        assert!(matches!(err, ClientError::Api { .. }));
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.api_message(), Some("Todo not found"));
        assert_eq!(err.to_string(), "HTTP error! status: 404 (Todo not found)");
    }

    #[test_context(ClientTestContext)]
    #[tokio::test]
    async fn test_categories(ctx: &mut ClientTestContext) {
        let payload = CategoryPayload {
            name: Some("Work".to_string()),
            color: Some("#e3f2fd".to_string()),
        };
        let work = ctx.client.create_category(&payload).await.unwrap();

        let err = ctx.client.create_category(&payload).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));

        let mut todo = todo_payload("Report");
        todo.category_id = Some(work.id);
        ctx.client.create_todo(&todo).await.unwrap();

        let in_category = ctx.client.list_category_todos(work.id).await.unwrap();
        assert_eq!(in_category.len(), 1);
        assert_eq!(in_category[0].category_name.as_deref(), Some("Work"));

        let err = ctx.client.delete_category(work.id).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(ctx.client.list_categories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Port 9 (discard) is practically never listening on localhost
        let client = ApiClient::new("http://127.0.0.1:9/api");
        let err = client.list_todos().await.unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
        assert!(err.api_message().is_none());
    }
}
