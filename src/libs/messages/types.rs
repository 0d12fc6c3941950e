#[derive(Debug, Clone)]
pub enum Message {
    // === TODO MESSAGES ===
    TodoCreated(String),
    TodoUpdated(String),
    TodoDeleted(i64),
    TodoCompleted(String),
    TodoReopened(String),
    TodoNotFound,
    TodoDeletedSuccessfully,
    TodosHeader,
    NoTodosYet,
    ConfirmDeleteTodo(String),
    TitleRequired,
    InvalidDueDate(String),

    // === CATEGORY MESSAGES ===
    CategoryCreated(String),
    CategoryUpdated(String),
    CategoryDeleted(String),
    CategoryNotFound,
    CategoryDeletedSuccessfully,
    CategoryNameExists,
    CategoryInUse,
    ReferencedCategoryMissing(i64),
    NameAndColorRequired,
    CategoriesHeader,
    NoCategoriesFound,
    TodosInCategory(String),
    NoTodosInCategory(String),
    ConfirmDeleteCategory(String),

    // === CALENDAR MESSAGES ===
    CalendarHeader(String),
    InvalidMonth(String),

    // === SERVER MESSAGES ===
    ServerStarting(String),
    ServerStopped,
    DevelopmentMode(String),
    ApiRunning,
    DatabaseReady(String),
    DatabaseInitFailed(String),
    InvalidRequestBody(String),
    InvalidId(String),
    InternalError,

    // === CLIENT MESSAGES ===
    LoadTodosFailed,
    CreateTodoFailed,
    UpdateTodoFailed,
    DeleteTodoFailed,
    LoadCategoriesFailed,
    SaveCategoryFailed,
    DeleteCategoryFailed,
    ApiRequestFailed(u16, String),
    ApiUnreachable(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,

    // === PROMPTS ===
    PromptServerHost,
    PromptServerPort,
    PromptDatabasePath,
    PromptTodoTitle,
    PromptTodoDescription,
    PromptTodoDueDate,
    PromptCategoryName,
    PromptCategoryColor,

    // === GENERAL ===
    OperationCancelled,
}
