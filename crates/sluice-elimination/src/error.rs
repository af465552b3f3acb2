pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no team named {name:?}")]
    UnknownTeam { name: String },

    #[error("team {name:?} is listed more than once")]
    DuplicateTeam { name: String },

    #[error("games table must be {teams}x{teams}, found {found}")]
    ShapeMismatch { teams: usize, found: String },

    #[error("{a:?} has {a_vs_b} games left against {b:?}, but {b:?} has {b_vs_a} against {a:?}")]
    AsymmetricGames {
        a: String,
        b: String,
        a_vs_b: u32,
        b_vs_a: u32,
    },

    #[error("{team:?} is scheduled to play itself {games} times")]
    SelfGames { team: String, games: u32 },

    #[error("standings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Solver(#[from] sluice::Error),
}
