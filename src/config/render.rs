/// Front-end output selection, read from `MAZE_CHASE_RENDER`.
pub const RENDER_ENV: &str = "MAZE_CHASE_RENDER";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Coloured maze drawn on the alternate screen.
    #[default]
    Text,
    /// One JSON snapshot per line on stdout, for an external renderer.
    Json,
}

impl RenderMode {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(RENDER_ENV).map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "json" => RenderMode::Json,
            _ => RenderMode::Text,
        }
    }
}
