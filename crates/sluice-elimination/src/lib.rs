#![forbid(unsafe_code)]

//! Competitor elimination on top of `sluice`.
//!
//! Given a table of [`Standings`] (current wins plus the games each pair of teams still has to
//! play), decide whether a team can still end the season with at least as many wins as everyone
//! else. Each query builds its own flow network and solves it once.
//!
//! ```
//! use sluice_elimination::Standings;
//!
//! let standings = Standings::new(
//!     [("circle", 6), ("square", 4), ("triangle", 4), ("diamond", 2)],
//!     vec![
//!         vec![0, 3, 1, 0],
//!         vec![3, 0, 0, 1],
//!         vec![1, 0, 0, 1],
//!         vec![0, 1, 1, 0],
//!     ],
//! )
//! .unwrap();
//! assert!(!standings.can_finish_first("diamond").unwrap());
//! assert!(standings.can_finish_first("square").unwrap());
//! ```

pub mod elimination;
pub mod error;
pub mod standings;

pub use elimination::{Elimination, Verdict, Vertex};
pub use error::{Error, Result};
pub use standings::Standings;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
