use sluice::network::{Capacity, FlowNetwork};
use sluice::{EdmondsKarp, FlowObserver, SolveOptions, TracingObserver, solve_with};

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl FlowObserver<&'static str> for Recorder {
    fn on_edge_created(&mut self, from: &&'static str, to: &&'static str) {
        self.events.push(format!("edge {from}>{to}"));
    }

    fn on_path_found(&mut self, path: &[&&'static str]) {
        let names: Vec<&str> = path.iter().map(|v| **v).collect();
        self.events.push(format!("path {}", names.join(">")));
    }

    fn on_augment(&mut self, bottleneck: i64, total: i64) {
        self.events.push(format!("augment {bottleneck} {total}"));
    }

    fn on_complete(&mut self, value: i64, augmentations: usize) {
        self.events.push(format!("complete {value} {augmentations}"));
    }
}

fn cross_edge_network() -> FlowNetwork<&'static str> {
    let mut g = FlowNetwork::new("source", "sink").unwrap();
    g.add_edge("source", "A", Capacity::Finite(1)).unwrap();
    g.add_edge("source", "B", Capacity::Finite(2)).unwrap();
    g.add_edge("A", "B", Capacity::Finite(3)).unwrap();
    g.add_edge("A", "sink", Capacity::Finite(1)).unwrap();
    g.add_edge("B", "sink", Capacity::Finite(2)).unwrap();
    g
}

#[test]
fn events_arrive_in_solve_order() {
    let mut recorder = Recorder::default();
    let flow = solve_with(
        cross_edge_network(),
        &SolveOptions::default(),
        &mut recorder,
    )
    .unwrap();

    assert_eq!(flow.value(), 3);
    assert_eq!(
        recorder.events,
        vec![
            "path source>A>sink",
            "edge A>source",
            "edge sink>A",
            "augment 1 1",
            "path source>B>sink",
            "edge B>source",
            "edge sink>B",
            "augment 2 3",
            "complete 3 2",
        ]
    );
}

#[test]
fn residual_edges_are_reported_once() {
    let mut g = FlowNetwork::new("s", "t").unwrap();
    g.add_edge("s", "a", Capacity::Finite(1)).unwrap();
    g.add_edge("s", "a", Capacity::Finite(1)).unwrap();
    g.add_edge("a", "t", Capacity::Finite(5)).unwrap();

    let mut recorder = Recorder::default();
    let flow = solve_with(g, &SolveOptions::default(), &mut recorder).unwrap();
    assert_eq!(flow.value(), 2);

    // Two parallel forward edges each get a partner; a -> t gets exactly one.
    let created: Vec<&String> = recorder
        .events
        .iter()
        .filter(|e| e.starts_with("edge "))
        .collect();
    assert_eq!(created, vec!["edge a>s", "edge t>a", "edge a>s"]);
    assert_eq!(flow.network().residual_edge_count(), 3);
}

#[test]
fn empty_solve_still_completes_once() {
    let mut g = FlowNetwork::new("source", "sink").unwrap();
    g.add_edge("A", "sink", Capacity::Finite(5)).unwrap();

    let mut recorder = Recorder::default();
    solve_with(g, &SolveOptions::default(), &mut recorder).unwrap();
    assert_eq!(recorder.events, vec!["complete 0 0"]);
}

#[test]
fn stepping_reports_through_the_same_hooks() {
    let mut solver = EdmondsKarp::new(cross_edge_network()).unwrap();
    let mut recorder = Recorder::default();

    assert_eq!(solver.step(&mut recorder).unwrap(), Some(1));
    assert_eq!(recorder.events.last().map(String::as_str), Some("augment 1 1"));
    assert_eq!(solver.step(&mut recorder).unwrap(), Some(2));
    assert_eq!(solver.step(&mut recorder).unwrap(), None);
    assert!(recorder.events.iter().all(|e| !e.starts_with("complete")));
}

#[test]
fn tracing_observer_does_not_change_the_result() {
    let flow = solve_with(
        cross_edge_network(),
        &SolveOptions::default(),
        &mut TracingObserver,
    )
    .unwrap();
    assert_eq!(flow.value(), 3);
}
