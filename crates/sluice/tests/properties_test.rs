//! Seeded random networks checked against the defining properties of a maximum flow.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sluice::network::{Capacity, EdgeKind, FlowNetwork};
use sluice::{MaxFlow, solve};

const SOURCE: usize = 0;
const SINK: usize = 1;

#[derive(Debug, Clone)]
struct Case {
    vertices: usize,
    edges: Vec<(usize, usize, i64)>,
}

impl Case {
    fn random(rng: &mut StdRng) -> Self {
        let vertices = rng.gen_range(2..=8);
        let edge_count = rng.gen_range(0..=vertices * 3);
        let edges = (0..edge_count)
            .map(|_| {
                (
                    rng.gen_range(0..vertices),
                    rng.gen_range(0..vertices),
                    rng.gen_range(0..=20),
                )
            })
            .collect();
        Self { vertices, edges }
    }

    fn build(&self) -> FlowNetwork<usize> {
        let mut g = FlowNetwork::new(SOURCE, SINK).unwrap();
        for v in 0..self.vertices {
            g.add_vertex(v);
        }
        for &(from, to, capacity) in &self.edges {
            g.add_edge(from, to, Capacity::Finite(capacity)).unwrap();
        }
        g
    }

    /// Smallest capacity over every source/sink partition.
    fn brute_force_min_cut(&self) -> i64 {
        let inner = self.vertices - 2;
        (0u32..(1 << inner))
            .map(|mask| {
                let on_source_side =
                    |v: usize| v == SOURCE || (v >= 2 && mask & (1 << (v - 2)) != 0);
                self.edges
                    .iter()
                    .filter(|&&(from, to, _)| on_source_side(from) && !on_source_side(to))
                    .map(|&(_, _, c)| c)
                    .sum::<i64>()
            })
            .min()
            .unwrap_or(0)
    }
}

fn cases(seed: u64, count: usize) -> Vec<Case> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| Case::random(&mut rng)).collect()
}

fn solved(case: &Case) -> MaxFlow<usize> {
    solve(case.build()).unwrap()
}

#[test]
fn flow_is_conserved_at_every_inner_vertex() {
    for case in cases(0x5eed, 200) {
        let flow = solved(&case);
        let g = flow.network();
        for v in 2..case.vertices {
            assert_eq!(g.net_outflow(&v), Some(0), "{case:?}");
        }
        assert_eq!(g.net_outflow(&SOURCE), Some(flow.value()), "{case:?}");
        assert_eq!(g.net_outflow(&SINK), Some(-flow.value()), "{case:?}");
    }
}

#[test]
fn flows_stay_within_capacity_and_residuals_track_them() {
    for case in cases(7, 200) {
        let flow = solved(&case);
        let g = flow.network();
        for e in g.all_edges() {
            match e.kind {
                EdgeKind::Forward => {
                    assert!(e.flow >= 0, "{case:?}");
                    assert!(e.capacity.admits(e.flow), "{case:?}");
                }
                EdgeKind::Residual => {
                    let partner = g.partner(e.index).and_then(|p| g.edge(p)).unwrap();
                    assert_eq!(e.flow, 0);
                    assert_eq!(e.capacity, Capacity::Finite(partner.flow), "{case:?}");
                }
            }
        }
    }
}

#[test]
fn value_equals_the_minimum_cut() {
    for case in cases(42, 200) {
        let flow = solved(&case);
        let cut = flow.min_cut().unwrap();

        assert_eq!(cut.capacity, Capacity::Finite(flow.value()), "{case:?}");
        assert!(cut.on_source_side(&SOURCE));
        assert!(!cut.on_source_side(&SINK));
        assert_eq!(flow.value(), case.brute_force_min_cut(), "{case:?}");
    }
}

#[test]
fn solving_the_same_network_twice_agrees() {
    for case in cases(99, 100) {
        let first = solved(&case);
        let second = solved(&case);
        assert_eq!(first.value(), second.value());
        assert_eq!(first.augmentations(), second.augmentations());
    }
}

#[test]
fn raising_a_capacity_never_lowers_the_value() {
    let mut rng = StdRng::seed_from_u64(1234);
    for mut case in cases(2024, 150) {
        if case.edges.is_empty() {
            continue;
        }
        let before = solved(&case).value();
        let pick = rng.gen_range(0..case.edges.len());
        let raise = rng.gen_range(1..=10);
        case.edges[pick].2 += raise;
        let after = solved(&case).value();
        assert!(after >= before, "{case:?}");
        assert!(after <= before + raise, "{case:?}");
    }
}
