//! Elimination queries.
//!
//! To decide whether team `x` can still finish first, assume `x` wins every remaining game, for a
//! best possible total of `w(x) + r(x)`. Every other team `i` may then win at most
//! `w(x) + r(x) - w(i)` more games. The games among the other teams are placed in a flow network:
//!
//! ```text
//! Source --g(i,j)--> Game(i, j) --inf--> Team(i) --(w(x) + r(x) - w(i))--> Sink
//!                               --inf--> Team(j)
//! ```
//!
//! `x` can finish first exactly when the maximum flow saturates every edge out of the source, i.e.
//! when all remaining games can be assigned winners without any team overtaking `x`.

use crate::error::Result;
use crate::standings::Standings;
use indexmap::IndexMap;
use serde::Serialize;
use sluice::network::{Capacity, FlowNetwork};

/// Vertex of an elimination network. Team and game vertices hold indices into [`Standings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vertex {
    Source,
    Sink,
    /// Games still to be played between two teams, `i < j`.
    Game(usize, usize),
    Team(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Contending,
    Eliminated(Elimination),
}

impl Verdict {
    pub fn can_finish_first(&self) -> bool {
        matches!(self, Verdict::Contending)
    }
}

/// Why a team cannot finish first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Elimination {
    /// `leader` already has more wins than the team can reach.
    Trivial { leader: String },
    /// No assignment of the remaining games keeps every other team at or below the team's best
    /// total.
    ///
    /// The teams in `certificate` already have more wins between them, counting the games they
    /// play against each other, than `certificate.len()` times that best total, so one of them
    /// must finish ahead.
    Flow {
        certificate: Vec<String>,
        /// Games among the other teams.
        scheduled: i64,
        /// Games the flow could assign without anyone overtaking the team.
        placed: i64,
    },
}

impl Standings {
    /// Whether `team` can finish with at least as many wins as every other team.
    pub fn can_finish_first(&self, team: &str) -> Result<bool> {
        Ok(self.evaluate(team)?.can_finish_first())
    }

    pub fn evaluate(&self, team: &str) -> Result<Verdict> {
        let x = self.index_of(team)?;
        let best = self.best_total(x);

        // Only the strongest other team matters for the pairwise check.
        let leader = (0..self.len())
            .filter(|&i| i != x)
            .max_by_key(|&i| (self.wins_at(i), std::cmp::Reverse(i)));
        if let Some(i) = leader.filter(|&i| u64::from(self.wins_at(i)) > best) {
            let leader = self.name_at(i).to_string();
            tracing::debug!(team, %leader, best, "trivially eliminated");
            return Ok(Verdict::Eliminated(Elimination::Trivial { leader }));
        }

        let network = self.network_for_index(x)?;
        let scheduled = network.capacity_out_of(&Vertex::Source).finite().unwrap_or(0);
        let flow = sluice::solve(network)?;
        let placed = flow.value();

        if placed == scheduled {
            tracing::debug!(team, scheduled, "contending");
            return Ok(Verdict::Contending);
        }

        let certificate: Vec<String> = match flow.min_cut() {
            Some(cut) => (0..self.len())
                .filter(|&i| cut.on_source_side(&Vertex::Team(i)))
                .map(|i| self.name_at(i).to_string())
                .collect(),
            None => Vec::new(),
        };
        tracing::debug!(team, scheduled, placed, ?certificate, "eliminated");
        Ok(Verdict::Eliminated(Elimination::Flow {
            certificate,
            scheduled,
            placed,
        }))
    }

    /// Verdicts for every team, in table order.
    pub fn eliminated(&self) -> Result<IndexMap<String, Verdict>> {
        self.teams()
            .map(|team| Ok((team.to_string(), self.evaluate(team)?)))
            .collect()
    }

    /// Network whose maximum flow decides whether `team` can finish first.
    ///
    /// Fails with a negative-capacity error when `team` is trivially eliminated, since some other
    /// team's edge into the sink would need a capacity below zero.
    pub fn network_for(&self, team: &str) -> Result<FlowNetwork<Vertex>> {
        Ok(self.network_for_index(self.index_of(team)?)?)
    }

    fn network_for_index(&self, x: usize) -> sluice::Result<FlowNetwork<Vertex>> {
        let best = i64::try_from(self.best_total(x)).unwrap_or(i64::MAX);
        let mut network = FlowNetwork::new(Vertex::Source, Vertex::Sink)?;

        let others: Vec<usize> = (0..self.len()).filter(|&i| i != x).collect();
        for (k, &i) in others.iter().enumerate() {
            for &j in &others[k + 1..] {
                let game = Vertex::Game(i, j);
                let games = i64::from(self.games_at(i, j));
                network.add_edge(Vertex::Source, game, Capacity::Finite(games))?;
                network.add_edge(game, Vertex::Team(i), Capacity::Unbounded)?;
                network.add_edge(game, Vertex::Team(j), Capacity::Unbounded)?;
            }
        }
        for &i in &others {
            let room = best - i64::from(self.wins_at(i));
            network.add_edge(Vertex::Team(i), Vertex::Sink, Capacity::Finite(room))?;
        }
        Ok(network)
    }

    fn best_total(&self, x: usize) -> u64 {
        u64::from(self.wins_at(x)) + self.remaining_at(x)
    }
}
