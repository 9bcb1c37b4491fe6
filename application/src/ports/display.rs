//! Display port for session output.
//!
//! Handlers never print directly: they log through a [`DisplayPort`] so the
//! same handler can write to a terminal or to a socket.

/// Colour hint for a piece of output.
///
/// Implementations may ignore it (e.g. when colour is disabled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Magenta,
    Green,
    Red,
}

/// Output surface for one session
pub trait DisplayPort: Send + Sync {
    /// Print a line as-is
    fn log(&self, text: &str);

    /// Print a whole line in one colour
    fn log_toned(&self, text: &str, tone: Tone) {
        self.log(&self.colorize(text, tone));
    }

    /// Print an error message
    fn error_log(&self, text: &str);

    /// Print text as a large banner
    fn big_log(&self, text: &str, tone: Tone);

    /// Colour a fragment for embedding in a larger line
    fn colorize(&self, text: &str, tone: Tone) -> String;
}
