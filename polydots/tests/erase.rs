use polydots::{ConnectOutcome, Puzzle, PuzzleOptions};

const SCENE: &str = r##"<svg>
  <path id="tri" fill="#f80" d="M 0 0 L 10 0 L 5 10 Z"/>
  <path id="quad" fill="#08f" d="M 20 0 L 30 0 L 30 10 L 20 10 Z"/>
</svg>"##;

fn traced() -> Puzzle {
    let mut p = Puzzle::from_svg(SCENE, &PuzzleOptions::default()).unwrap();
    let a = p.vertex_at(0.0, 0.0).unwrap();
    let b = p.vertex_at(10.0, 0.0).unwrap();
    let c = p.vertex_at(5.0, 10.0).unwrap();
    let q0 = p.vertex_at(20.0, 0.0).unwrap();
    let q1 = p.vertex_at(30.0, 0.0).unwrap();
    let q2 = p.vertex_at(30.0, 10.0).unwrap();
    p.connect(a, b);
    p.connect(b, c);
    p.connect(c, a);
    // wrong guesses, plus one correct edge on the open square
    assert!(matches!(p.connect(a, q2), ConnectOutcome::Incorrect { .. }));
    assert!(matches!(p.connect(q0, q2), ConnectOutcome::Incorrect { .. }));
    assert!(matches!(p.connect(q0, q1), ConnectOutcome::Correct { .. }));
    p
}

#[test]
fn erase_keeps_correct_progress() {
    let mut p = traced();
    assert!(p.polygon(0).unwrap().completed);
    let remaining: Vec<u32> = p.vertices().iter().map(|v| v.remaining).collect();

    assert_eq!(p.erase(), 2);
    assert_eq!(p.edge_count(), 4);
    assert!(p.edges().iter().all(|e| e.correct));
    assert!(p.polygon(0).unwrap().completed, "completion survives erase");
    assert_eq!(p.polygon(0).unwrap().opacity, 1.0);
    assert_eq!(p.polygon(1).unwrap().completed_edges, 1);
    let after: Vec<u32> = p.vertices().iter().map(|v| v.remaining).collect();
    assert_eq!(remaining, after);

    // nothing left to remove
    let ver = p.version();
    assert_eq!(p.erase(), 0);
    assert_eq!(p.version(), ver);
}

#[test]
fn erased_pairs_can_be_drawn_again() {
    let mut p = traced();
    let a = p.vertex_at(0.0, 0.0).unwrap();
    let q2 = p.vertex_at(30.0, 10.0).unwrap();
    p.erase();
    assert!(!p.has_edge(a, q2));
    assert!(matches!(p.connect(q2, a), ConnectOutcome::Incorrect { .. }));
}

#[test]
fn erase_clears_selection() {
    let mut p = traced();
    p.select_or_connect(0.0, 0.0);
    assert!(p.selected().is_some());
    p.erase();
    assert_eq!(p.selected(), None);
    assert!(p.vertices().iter().all(|v| !v.selected));
}

#[test]
fn reset_returns_to_loaded_state() {
    let mut p = traced();
    p.select_or_connect(20.0, 10.0);
    p.reset();
    assert_eq!(p.edge_count(), 0);
    assert_eq!(p.selected(), None);
    for v in p.vertices() {
        assert_eq!(v.remaining, v.required);
        assert!(!v.selected);
    }
    for poly in p.polygons() {
        assert!(!poly.completed);
        assert_eq!(poly.opacity, 0.0);
        assert_eq!(poly.completed_edges, 0);
    }
    // the triangle can be completed again from scratch
    let a = p.vertex_at(0.0, 0.0).unwrap();
    let b = p.vertex_at(10.0, 0.0).unwrap();
    let c = p.vertex_at(5.0, 10.0).unwrap();
    p.connect(a, b);
    p.connect(b, c);
    assert!(matches!(p.connect(a, c), ConnectOutcome::Correct { completed, .. } if completed == vec![0]));
}
