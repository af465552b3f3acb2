use sluice::network::{Capacity, FlowNetwork, NetworkDescription};
use sluice::{Error, max_flow, solve};

fn description(edges: &[(&str, &str, u32)]) -> NetworkDescription {
    let mut d: NetworkDescription = NetworkDescription::new();
    d.vertex("source").vertex("sink");
    for &(from, to, capacity) in edges {
        d.edge(from, to, capacity);
    }
    d
}

fn s(v: &str) -> String {
    v.to_string()
}

#[test]
fn two_routes_with_a_cross_edge() {
    let d = description(&[
        ("source", "A", 1),
        ("source", "B", 2),
        ("A", "B", 3),
        ("A", "sink", 1),
        ("B", "sink", 2),
    ]);
    assert_eq!(max_flow(&d).unwrap(), 3);
}

#[test]
fn textbook_network() {
    let d = description(&[
        ("source", "1", 12),
        ("source", "2", 5),
        ("source", "3", 4),
        ("1", "sink", 9),
        ("2", "1", 6),
        ("2", "4", 3),
        ("3", "4", 7),
        ("4", "sink", 10),
    ]);
    let flow = solve(d.build().unwrap()).unwrap();

    // The cut {source, 1, 2} | {3, 4, sink} crosses source->3, 1->sink and 2->4: 4 + 9 + 3.
    assert_eq!(flow.value(), 16);
    let cut = flow.min_cut().unwrap();
    assert_eq!(cut.capacity, Capacity::Finite(16));
}

#[test]
fn two_layer_network() {
    let d = description(&[
        ("source", "1", 4),
        ("source", "2", 4),
        ("1", "3", 6),
        ("1", "6", 5),
        ("2", "4", 7),
        ("3", "5", 3),
        ("4", "6", 3),
        ("5", "sink", 8),
        ("6", "sink", 4),
    ]);
    assert_eq!(max_flow(&d).unwrap(), 7);
}

#[test]
fn source_without_outgoing_edges_yields_zero_in_zero_rounds() {
    let d = description(&[("A", "sink", 5)]);
    let flow = solve(d.build().unwrap()).unwrap();
    assert_eq!(flow.value(), 0);
    assert_eq!(flow.augmentations(), 0);
    assert!(flow.is_complete());
    assert_eq!(flow.network().residual_edge_count(), 0);
}

#[test]
fn unreachable_sink_is_not_an_error() {
    let d = description(&[("source", "A", 5), ("B", "sink", 5)]);
    assert_eq!(max_flow(&d).unwrap(), 0);
}

#[test]
fn later_paths_cancel_flow_committed_by_earlier_ones() {
    // The first shortest path takes a -> b; the second can only finish by cancelling it.
    let d = description(&[
        ("source", "a", 1),
        ("source", "c", 1),
        ("a", "b", 1),
        ("c", "b", 1),
        ("b", "sink", 1),
        ("a", "d", 1),
        ("d", "e", 1),
        ("e", "sink", 1),
    ]);
    let flow = solve(d.build().unwrap()).unwrap();

    assert_eq!(flow.value(), 2);
    assert_eq!(flow.augmentations(), 2);
    assert_eq!(flow.flow_between(&s("a"), &s("b")), 0);
    assert_eq!(flow.flow_between(&s("c"), &s("b")), 1);
    assert_eq!(flow.flow_between(&s("a"), &s("d")), 1);
}

#[test]
fn parallel_edges_add_up() {
    let d = description(&[
        ("source", "a", 2),
        ("source", "a", 3),
        ("a", "sink", 10),
    ]);
    let flow = solve(d.build().unwrap()).unwrap();
    assert_eq!(flow.value(), 5);
    assert_eq!(flow.flow_between(&s("source"), &s("a")), 5);
}

#[test]
fn unbounded_edges_are_limited_by_the_rest_of_the_network() {
    let mut g = FlowNetwork::new(s("source"), s("sink")).unwrap();
    g.add_edge(s("source"), s("game"), Capacity::Finite(4))
        .unwrap();
    g.add_edge(s("game"), s("x"), Capacity::Unbounded).unwrap();
    g.add_edge(s("game"), s("y"), Capacity::Unbounded).unwrap();
    g.add_edge(s("x"), s("sink"), Capacity::Finite(1)).unwrap();
    g.add_edge(s("y"), s("sink"), Capacity::Finite(2)).unwrap();

    let flow = solve(g).unwrap();
    assert_eq!(flow.value(), 3);
    let cut = flow.min_cut().unwrap();
    assert_eq!(cut.capacity, Capacity::Finite(3));
    assert!(cut.edges.iter().all(|e| !e.capacity.is_unbounded()));
}

#[test]
fn all_unbounded_route_is_rejected_before_solving() {
    let d: NetworkDescription = serde_json::from_str(
        r#"{"source": [["a", null]], "a": [["sink", null]], "sink": []}"#,
    )
    .unwrap();
    assert_eq!(max_flow(&d), Err(Error::UnboundedFlow));
}

#[test]
fn construction_errors_surface_before_solving() {
    let mut d = description(&[("source", "sink", 1)]);
    d.edge("source", "x", Capacity::Finite(-2));
    assert!(matches!(
        max_flow(&d),
        Err(Error::Network(sluice::network::Error::NegativeCapacity { .. }))
    ));

    let mut d: NetworkDescription = NetworkDescription::new();
    d.edge("source", "a", 1u32);
    assert!(matches!(
        max_flow(&d),
        Err(Error::Network(sluice::network::Error::MissingTerminal { .. }))
    ));
}

#[test]
fn typed_vertex_keys_need_no_string_encoding() {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum V {
        S,
        T,
        Pair(u8, u8),
        Single(u8),
    }

    let mut g = FlowNetwork::new(V::S, V::T).unwrap();
    // A `|` inside a key cannot collide with anything: keys are never joined into strings.
    g.add_edge(V::S, V::Pair(1, 2), Capacity::Finite(3)).unwrap();
    g.add_edge(V::Pair(1, 2), V::Single(1), Capacity::Unbounded)
        .unwrap();
    g.add_edge(V::Pair(1, 2), V::Single(2), Capacity::Unbounded)
        .unwrap();
    g.add_edge(V::Single(1), V::T, Capacity::Finite(1)).unwrap();
    g.add_edge(V::Single(2), V::T, Capacity::Finite(1)).unwrap();

    let flow = solve(g).unwrap();
    assert_eq!(flow.value(), 2);
    let cut = flow.min_cut().unwrap();
    assert!(cut.on_source_side(&V::Pair(1, 2)));
    assert!(!cut.on_source_side(&V::T));
}

#[test]
fn solves_run_independently_on_separate_threads() {
    let handles: Vec<_> = (1..=4u32)
        .map(|k| {
            std::thread::spawn(move || {
                let d = description(&[("source", "a", k), ("a", "sink", 2 * k)]);
                max_flow(&d).unwrap()
            })
        })
        .collect();
    let values: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(values, vec![1, 2, 3, 4]);
}
