#[cfg(test)]
mod tests {
    use ltodo::db::categories::{Categories, CategoryDraft};
    use ltodo::db::db::Db;
    use ltodo::db::error::StoreError;
    use ltodo::db::todos::Todos;
    use ltodo::libs::todo::TodoDraft;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CategoryTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for CategoryTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("todo.db");
            Db::new(&db_path).unwrap();
            CategoryTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    impl CategoryTestContext {
        fn categories(&self) -> Categories {
            Categories::new(&self.db_path).unwrap()
        }
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_category_crud(ctx: &mut CategoryTestContext) {
        // Create
        let category = ctx.categories().insert(&CategoryDraft::new("Home", "#fff3e0")).unwrap();
        assert!(category.id > 0);
        assert_eq!(category.name, "Home");
        assert!(!category.created_at.is_empty());

        // Update
        let updated = ctx
            .categories()
            .update(category.id, &CategoryDraft::new("House", "#fce4ec"))
            .unwrap();
        assert_eq!(updated.name, "House");
        assert_eq!(updated.color, "#fce4ec");
        assert_eq!(updated.created_at, category.created_at);

        // Delete
        ctx.categories().delete(category.id).unwrap();
        assert!(ctx.categories().find(category.id).unwrap().is_none());
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_list_ordered_by_name(ctx: &mut CategoryTestContext) {
        for name in ["Work", "Errands", "Home"] {
            ctx.categories().insert(&CategoryDraft::new(name, "#e3f2fd")).unwrap();
        }

        let names: Vec<String> = ctx.categories().list().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Errands", "Home", "Work"]);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_duplicate_name_conflicts(ctx: &mut CategoryTestContext) {
        ctx.categories().insert(&CategoryDraft::new("Work", "#e3f2fd")).unwrap();

        let result = ctx.categories().insert(&CategoryDraft::new("Work", "#f3e5f5"));
        assert!(matches!(result, Err(StoreError::Conflict(_))));
        assert_eq!(ctx.categories().list().unwrap().len(), 1);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_rename_to_existing_conflicts(ctx: &mut CategoryTestContext) {
        ctx.categories().insert(&CategoryDraft::new("Work", "#e3f2fd")).unwrap();
        let home = ctx.categories().insert(&CategoryDraft::new("Home", "#fff3e0")).unwrap();

        let result = ctx.categories().update(home.id, &CategoryDraft::new("Work", "#fff3e0"));
        assert!(matches!(result, Err(StoreError::Conflict(_))));
        assert_eq!(ctx.categories().get(home.id).unwrap().name, "Home");
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_name_and_color_required(ctx: &mut CategoryTestContext) {
        for (name, color) in [("", "#e3f2fd"), ("Work", ""), ("  ", "  ")] {
            let result = ctx.categories().insert(&CategoryDraft::new(name, color));
            assert!(matches!(result, Err(StoreError::Validation(_))));
        }
        assert!(ctx.categories().list().unwrap().is_empty());
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_delete_in_use(ctx: &mut CategoryTestContext) {
        let work = ctx.categories().insert(&CategoryDraft::new("Work", "#e3f2fd")).unwrap();
        let todo = Todos::new(&ctx.db_path)
            .unwrap()
            .insert(&TodoDraft::new("Ship it").with_category(Some(work.id)))
            .unwrap();

        let result = ctx.categories().delete(work.id);
        assert!(matches!(result, Err(StoreError::CategoryInUse(_))));
        assert!(ctx.categories().find(work.id).unwrap().is_some());

        // Detach the only referencing todo, then deletion goes through
        Todos::new(&ctx.db_path)
            .unwrap()
            .update(todo.id, &TodoDraft::new("Ship it"))
            .unwrap();
        ctx.categories().delete(work.id).unwrap();
        assert!(ctx.categories().find(work.id).unwrap().is_none());
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_missing_category(ctx: &mut CategoryTestContext) {
        assert!(matches!(ctx.categories().get(5), Err(StoreError::NotFound(_))));
        assert!(matches!(ctx.categories().delete(5), Err(StoreError::NotFound(_))));
        assert!(matches!(
            ctx.categories().update(5, &CategoryDraft::new("Ghost", "#fafafa")),
            Err(StoreError::NotFound(_))
        ));
    }
}
