/// Every user-facing message the application can print.
///
/// Text lives in the `Display` implementation in `display.rs`; variants carry
/// only the values that get interpolated.
#[derive(Debug, Clone)]
pub enum Message {
    // === TRACKING MESSAGES ===
    TrackingStarted(String),         // start time
    TrackingStopped(String, String), // start time, end time
    TrackingAlreadyStarted(String),  // start time of the running session
    NoActiveSession,
    RatePrompt(i64), // session id

    // === QUALITY MESSAGES ===
    QualitySaved(i64, String), // session id, quality label
    InvalidQuality(i32),
    SessionNotFound(i64),

    // === HISTORY MESSAGES ===
    SessionsHeader,
    NoSessions,
    SessionsCleared,
    NothingToClear,

    // === DATABASE MESSAGES ===
    DatabaseOpened(String),   // path
    SchemaReset(u32, u32),    // found version, expected version
    SchemaCreated(u32),       // version

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleStorage,
    ConfigModuleDisplay,
    PromptDatabaseFile,
    PromptTimeFormat,
}
