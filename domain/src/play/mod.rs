//! Play subdomain: the "play all randomly" game.
//!
//! ```text
//!  Selecting ──(remaining empty)──────────────▶ Finished(Won)
//!      │
//!      │ draw one quiz, remove it
//!      ▼
//!   Asking ──(wrong answer)──────────────────▶ Finished(Missed)
//!      │
//!      └──(right answer, score + 1)──▶ Selecting
//! ```
//!
//! Loading the quiz set is the caller's job; a [`PlaySession`] starts out
//! selecting from the full population.

mod session;

pub use session::{PlayError, PlayOutcome, PlaySession, Round, Verdict};
