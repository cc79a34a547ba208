//! Tongue resolution: per-tile interaction rules, path walking and the commit pass.
//!
//! Resolution is split in two phases. [`compute_path`] walks the board without
//! touching it, so a renderer can animate the result; [`commit_path`] applies
//! the outcome once the caller decides playback is over.
mod commit;
mod interaction;
mod path;

pub use commit::{CommitReport, commit_path};
pub use interaction::{Interaction, Verdict, resolve};
pub use path::{Termination, TonguePath, TongueStep, compute_path};
