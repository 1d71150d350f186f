/// Default tables shipped in the binary, used when no user file exists.
/// Vocabulary targets Japanese ad transcripts; `adpulse tables init` writes
/// a copy into the config directory for editing.
pub const BUILTIN_TABLES: &str = include_str!("builtin.toml");
