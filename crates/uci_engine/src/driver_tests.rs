use super::*;

fn run(driver: &mut Driver, line: &str) -> String {
    let mut out = Vec::new();
    assert!(driver.handle(line, &mut out).unwrap());
    String::from_utf8(out).unwrap()
}

fn driver() -> Driver {
    Driver::new(&EngineConfig {
        depth: 2,
        quiescence_budget_ms: 0,
        ..EngineConfig::default()
    })
}

#[test]
fn test_handshake() {
    let mut d = driver();
    let out = run(&mut d, "uci");
    assert!(out.starts_with("id name "));
    assert!(out.contains("option name Depth type spin default 2"));
    assert!(out.contains("option name QuiescenceMs type spin default 0"));
    assert!(out.trim_end().ends_with("uciok"));
    assert_eq!(run(&mut d, "isready"), "readyok\n");
}

#[test]
fn test_position_and_go() {
    let mut d = driver();
    run(&mut d, "position startpos moves f2f3 e7e5 g2g4");
    assert_eq!(d.history.len(), 4);
    let out = run(&mut d, "go depth 3");
    assert!(out.contains("bestmove d8h4"), "{out}");
}

#[test]
fn test_go_on_mated_position_reports_null() {
    let mut d = driver();
    run(&mut d, "position startpos moves f2f3 e7e5 g2g4 d8h4");
    let out = run(&mut d, "go");
    assert!(out.contains("bestmove 0000"), "{out}");
}

#[test]
fn test_setoption() {
    let mut d = driver();
    run(&mut d, "setoption name Depth value 5");
    run(&mut d, "setoption name QuiescenceMs value 250");
    run(&mut d, "setoption name Ordering value false");
    let limits = d.engine.limits();
    assert_eq!(limits.depth, 5);
    assert_eq!(limits.quiescence_budget, Duration::from_millis(250));
    assert_eq!(limits.ordering, MoveOrdering::Shuffle);

    run(&mut d, "setoption name Depth value 99");
    assert_eq!(d.engine.limits().depth, MAX_DEPTH);
    run(&mut d, "setoption name Depth value nope");
    assert_eq!(d.engine.limits().depth, MAX_DEPTH);
}

#[test]
fn test_bad_position_keeps_history() {
    let mut d = driver();
    run(&mut d, "position startpos moves e2e4");
    run(&mut d, "position fen not-a-fen");
    assert_eq!(d.history.len(), 2);
}

#[test]
fn test_newgame_resets_and_d_prints() {
    let mut d = driver();
    run(&mut d, "position startpos moves e2e4");
    run(&mut d, "ucinewgame");
    assert_eq!(d.current(), &Board::standard());
    let out = run(&mut d, "d");
    assert!(out.contains("fen rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
}

#[test]
fn test_quit_and_blank_lines() {
    let mut d = driver();
    assert_eq!(run(&mut d, "   "), "");
    run(&mut d, "bogus command");
    let mut out = Vec::new();
    assert!(!d.handle("quit", &mut out).unwrap());
}

#[test]
fn test_scenario_sets_board_and_ordering() {
    let mut d = driver();
    run(&mut d, "scenario castling-drill");
    assert_eq!(d.history.len(), 1);
    assert_eq!(d.current(), &Scenario::CastlingDrill.board());
    assert_eq!(d.engine.limits().ordering, MoveOrdering::Heuristic);

    run(&mut d, "scenario shuffled");
    assert_eq!(d.engine.limits().ordering, MoveOrdering::Shuffle);
    assert_eq!(d.current().white_player().active_pieces().len(), 16);
    assert!(run(&mut d, "go depth 1").contains("bestmove "));

    run(&mut d, "scenario standard");
    assert_eq!(d.engine.limits().ordering, MoveOrdering::Heuristic);
    assert_eq!(d.current(), &Board::standard());

    run(&mut d, "scenario nowhere");
    run(&mut d, "scenario");
    assert_eq!(d.current(), &Board::standard());
}
