//! League table: current wins and the games still to be played between each pair of teams.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Validated standings.
///
/// Teams keep the order they were given in. `games[i][j]` is the number of games team `i` still
/// plays against team `j`; the table is square, symmetric, and zero on the diagonal.
///
/// Serializes as `{"teams": [{"name": "...", "wins": N}, ...], "games": [[...], ...]}` and is
/// validated again when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StandingsRecord", into = "StandingsRecord")]
pub struct Standings {
    wins: IndexMap<String, u32>,
    games: Vec<Vec<u32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StandingsRecord {
    teams: Vec<TeamRecord>,
    #[serde(default)]
    games: Vec<Vec<u32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TeamRecord {
    name: String,
    wins: u32,
}

impl TryFrom<StandingsRecord> for Standings {
    type Error = Error;

    fn try_from(record: StandingsRecord) -> Result<Self> {
        Standings::new(record.teams.into_iter().map(|t| (t.name, t.wins)), record.games)
    }
}

impl From<Standings> for StandingsRecord {
    fn from(standings: Standings) -> Self {
        Self {
            teams: standings
                .wins
                .into_iter()
                .map(|(name, wins)| TeamRecord { name, wins })
                .collect(),
            games: standings.games,
        }
    }
}

impl Standings {
    pub fn new<I, S>(teams: I, games: Vec<Vec<u32>>) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut wins: IndexMap<String, u32> = IndexMap::new();
        for (name, w) in teams {
            let name = name.into();
            if wins.contains_key(&name) {
                return Err(Error::DuplicateTeam { name });
            }
            wins.insert(name, w);
        }

        let n = wins.len();
        if games.len() != n {
            return Err(Error::ShapeMismatch {
                teams: n,
                found: format!("{} rows", games.len()),
            });
        }
        if let Some((i, row)) = games.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(Error::ShapeMismatch {
                teams: n,
                found: format!("row {i} with {} columns", row.len()),
            });
        }

        let standings = Self { wins, games };
        for i in 0..n {
            if standings.games[i][i] != 0 {
                return Err(Error::SelfGames {
                    team: standings.name_at(i).to_string(),
                    games: standings.games[i][i],
                });
            }
            for j in (i + 1)..n {
                let (a_vs_b, b_vs_a) = (standings.games[i][j], standings.games[j][i]);
                if a_vs_b != b_vs_a {
                    return Err(Error::AsymmetricGames {
                        a: standings.name_at(i).to_string(),
                        b: standings.name_at(j).to_string(),
                        a_vs_b,
                        b_vs_a,
                    });
                }
            }
        }
        Ok(standings)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let record: StandingsRecord = serde_json::from_str(text)?;
        Self::try_from(record)
    }

    pub fn len(&self) -> usize {
        self.wins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }

    /// Team names in table order.
    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.wins.keys().map(String::as_str)
    }

    pub fn contains(&self, team: &str) -> bool {
        self.wins.contains_key(team)
    }

    pub fn index_of(&self, team: &str) -> Result<usize> {
        self.wins
            .get_index_of(team)
            .ok_or_else(|| Error::UnknownTeam {
                name: team.to_string(),
            })
    }

    pub fn wins(&self, team: &str) -> Result<u32> {
        Ok(self.wins_at(self.index_of(team)?))
    }

    /// Games `team` has left against everyone.
    pub fn remaining(&self, team: &str) -> Result<u64> {
        Ok(self.remaining_at(self.index_of(team)?))
    }

    pub fn games_between(&self, a: &str, b: &str) -> Result<u32> {
        Ok(self.games[self.index_of(a)?][self.index_of(b)?])
    }

    pub(crate) fn name_at(&self, i: usize) -> &str {
        self.wins
            .get_index(i)
            .map(|(name, _)| name.as_str())
            .unwrap_or_default()
    }

    pub(crate) fn wins_at(&self, i: usize) -> u32 {
        self.wins.get_index(i).map(|(_, &w)| w).unwrap_or_default()
    }

    pub(crate) fn remaining_at(&self, i: usize) -> u64 {
        self.games[i].iter().map(|&g| u64::from(g)).sum()
    }

    pub(crate) fn games_at(&self, i: usize, j: usize) -> u32 {
        self.games[i][j]
    }
}
