#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ltodo::db::categories::{Categories, CategoryDraft};
    use ltodo::db::db::Db;
    use ltodo::db::error::StoreError;
    use ltodo::db::todos::Todos;
    use ltodo::libs::todo::TodoDraft;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TodoTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for TodoTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("todo.db");
            Db::new(&db_path).unwrap();
            TodoTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    impl TodoTestContext {
        fn todos(&self) -> Todos {
            Todos::new(&self.db_path).unwrap()
        }
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_insert_with_defaults(ctx: &mut TodoTestContext) {
        let todo = ctx.todos().insert(&TodoDraft::new("Buy milk")).unwrap();

        assert!(todo.id > 0);
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, "");
        assert!(!todo.completed);
        assert_eq!(todo.due_date, None);
        assert_eq!(todo.category_id, None);
        assert_eq!(todo.category_name, None);
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_insert_rejects_blank_title(ctx: &mut TodoTestContext) {
        for title in ["", "   ", "\t\n"] {
            let result = ctx.todos().insert(&TodoDraft::new(title));
            assert!(matches!(result, Err(StoreError::Validation(_))));
        }

        assert!(ctx.todos().list().unwrap().is_empty());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_insert_trims_and_keeps_due_date(ctx: &mut TodoTestContext) {
        let due = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let draft = TodoDraft::new("  Pay rent  ")
            .with_description(" monthly ")
            .with_due_date(Some(due));

        let todo = ctx.todos().insert(&draft).unwrap();
        assert_eq!(todo.title, "Pay rent");
        assert_eq!(todo.description, "monthly");
        assert_eq!(todo.due_date, Some(due));

        let fetched = ctx.todos().get(todo.id).unwrap();
        assert_eq!(fetched, todo);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_list_newest_first(ctx: &mut TodoTestContext) {
        for title in ["A", "B", "C"] {
            ctx.todos().insert(&TodoDraft::new(title)).unwrap();
        }

        let titles: Vec<String> = ctx.todos().list().unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_toggle_twice(ctx: &mut TodoTestContext) {
        let original = ctx.todos().insert(&TodoDraft::new("Walk the dog")).unwrap();

        let first = ctx.todos().toggle(original.id).unwrap();
        assert!(first.completed);
        assert!(first.updated_at > original.updated_at);

        let second = ctx.todos().toggle(original.id).unwrap();
        assert_eq!(second.completed, original.completed);
        assert!(second.updated_at > first.updated_at);
        assert_eq!(second.created_at, original.created_at);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_toggle_missing(ctx: &mut TodoTestContext) {
        assert!(matches!(ctx.todos().toggle(42), Err(StoreError::NotFound(_))));
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_update(ctx: &mut TodoTestContext) {
        let todo = ctx.todos().insert(&TodoDraft::new("Draft")).unwrap();
        let due = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        let updated = ctx
            .todos()
            .update(todo.id, &TodoDraft::new("Final").with_description("done soon").with_due_date(Some(due)))
            .unwrap();

        assert_eq!(updated.title, "Final");
        assert_eq!(updated.description, "done soon");
        assert_eq!(updated.due_date, Some(due));
        assert_eq!(updated.created_at, todo.created_at);
        assert!(updated.updated_at > todo.updated_at);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_update_rejects_empty_title(ctx: &mut TodoTestContext) {
        let todo = ctx.todos().insert(&TodoDraft::new("Keep me")).unwrap();

        let result = ctx.todos().update(todo.id, &TodoDraft::new(" "));
        assert!(matches!(result, Err(StoreError::Validation(_))));

        assert_eq!(ctx.todos().get(todo.id).unwrap().title, "Keep me");
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_update_missing(ctx: &mut TodoTestContext) {
        let result = ctx.todos().update(99, &TodoDraft::new("Nobody"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_delete(ctx: &mut TodoTestContext) {
        let keep = ctx.todos().insert(&TodoDraft::new("Keep")).unwrap();
        let gone = ctx.todos().insert(&TodoDraft::new("Drop")).unwrap();

        ctx.todos().delete(gone.id).unwrap();
        assert!(ctx.todos().find(gone.id).unwrap().is_none());

        // Second delete of the same id changes nothing
        assert!(matches!(ctx.todos().delete(gone.id), Err(StoreError::NotFound(_))));
        let remaining = ctx.todos().list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_category_join(ctx: &mut TodoTestContext) {
        let work = Categories::new(&ctx.db_path)
            .unwrap()
            .insert(&CategoryDraft::new("Work", "#e3f2fd"))
            .unwrap();

        let todo = ctx
            .todos()
            .insert(&TodoDraft::new("Write report").with_category(Some(work.id)))
            .unwrap();
        assert_eq!(todo.category_id, Some(work.id));
        assert_eq!(todo.category_name.as_deref(), Some("Work"));
        assert_eq!(todo.category_color.as_deref(), Some("#e3f2fd"));

        ctx.todos().insert(&TodoDraft::new("Unrelated")).unwrap();

        let in_category = ctx.todos().list_by_category(work.id).unwrap();
        assert_eq!(in_category.len(), 1);
        assert_eq!(in_category[0].id, todo.id);
        assert_eq!(ctx.todos().count_by_category(work.id).unwrap(), 1);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_unknown_category_rejected(ctx: &mut TodoTestContext) {
        let result = ctx.todos().insert(&TodoDraft::new("Orphan").with_category(Some(7)));
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(ctx.todos().list().unwrap().is_empty());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_list_by_missing_category_is_empty(ctx: &mut TodoTestContext) {
        ctx.todos().insert(&TodoDraft::new("Loose")).unwrap();
        assert!(ctx.todos().list_by_category(123).unwrap().is_empty());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_update_category_reference(ctx: &mut TodoTestContext) {
        let mut categories = Categories::new(&ctx.db_path).unwrap();
        let work = categories.insert(&CategoryDraft::new("Work", "#e3f2fd")).unwrap();
        let todo = ctx
            .todos()
            .insert(&TodoDraft::new("Write report").with_category(Some(work.id)))
            .unwrap();

        let result = ctx
            .todos()
            .update(todo.id, &TodoDraft::new("Write report").with_category(Some(999)));
        assert!(matches!(result, Err(StoreError::Validation(_))));
        let stored = ctx.todos().get(todo.id).unwrap();
        assert_eq!(stored.category_id, Some(work.id));
        assert_eq!(stored.updated_at, todo.updated_at);

        let detached = ctx.todos().update(todo.id, &TodoDraft::new("Write report")).unwrap();
        assert_eq!(detached.category_id, None);
        assert_eq!(detached.category_name, None);
        assert_eq!(detached.category_color, None);

        categories.delete(work.id).unwrap();
        assert!(categories.find(work.id).unwrap().is_none());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_concurrent_toggles(ctx: &mut TodoTestContext) {
        const THREADS: usize = 4;
        const TOGGLES_PER_THREAD: usize = 10;

        let original = ctx.todos().insert(&TodoDraft::new("Contended")).unwrap();

        std::thread::scope(|scope| {
            for _ in 0..THREADS {
                let db_path = ctx.db_path.as_path();
                scope.spawn(move || {
                    for _ in 0..TOGGLES_PER_THREAD {
                        Todos::new(db_path).unwrap().toggle(original.id).unwrap();
                    }
                });
            }
        });

        // An even number of flips lands back where it started
        let last = ctx.todos().get(original.id).unwrap();
        assert!(!last.completed);
        assert!(last.updated_at > original.updated_at);
        assert_eq!(last.created_at, original.created_at);
    }
}
