/// Result alias used throughout the crate.
/// Errors are carried as `anyhow::Error` so that typed `ExplorerError`s and
/// ad-hoc context can travel through the same channel.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
