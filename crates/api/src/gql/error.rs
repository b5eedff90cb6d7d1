use datasource::error::ServiceError;

/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any type implementing `Display` auto-converts via `?`.
///
/// This enum gives us:
///   - `From<ServiceError>` — surfaces the backend's own message (or the
///     "Unknown error" placeholder when it has none)
///   - `From<uuid::Error>` — shows "Invalid ID: …"
///   - `GqlError::new("…")` — custom one-off messages
#[derive(Debug)]
pub enum GqlError {
    Service(ServiceError),
    Uuid(uuid::Error),
    Custom(String),
}

impl GqlError {
    pub fn new(msg: impl Into<String>) -> Self {
        GqlError::Custom(msg.into())
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Service(e) => write!(f, "{e}"),
            GqlError::Uuid(e) => write!(f, "Invalid ID: {e}"),
            GqlError::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<ServiceError> for GqlError {
    fn from(e: ServiceError) -> Self {
        GqlError::Service(e)
    }
}

impl From<uuid::Error> for GqlError {
    fn from(e: uuid::Error) -> Self {
        GqlError::Uuid(e)
    }
}

/// Extension trait that converts any `Result<T, E>` where `E: Display`
/// into `async_graphql::Result<T>` with a contextual message prefix.
///
/// Usage: `Uuid::parse_str(id).gql_err("Invalid user ID")?`
pub trait ResultExt<T> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error> {
        self.map_err(|e| async_graphql::Error::new(format!("{context}: {e}")))
    }
}

/// Normalize a resolver failure into a single structured log line.
///
/// The error's display string is whatever message the failure carries;
/// `ServiceError::Unknown` renders the fixed "Unknown error" placeholder
/// so the logging path itself never fails.
pub fn log_error(context: &str, error: &impl std::fmt::Display) {
    tracing::error!("{context}: {error}");
}

/// Log a not-found condition and hand back the classified error.
///
/// Always produces the error; callers that surface nulls instead catch
/// it in their own resolver body.
pub fn not_found(item: &str, id: impl std::fmt::Display) -> async_graphql::Error {
    log_error(&format!("{item} with ID {id} not found"), &"Not Found");
    async_graphql::Error::new(format!("{item} not found"))
}
