use neighborvis::{parse_neighbors, parse_particles, ViewerError};

#[test]
fn parses_particles_without_radius_column() {
    let text = "3\n10.0\n1 0.5 0.5\n2 1.5 0.5\n3 2.5 0.5\n";
    let particles = parse_particles(text).expect("well-formed file");
    assert_eq!(particles.len(), 3);
    assert_eq!(particles[0].id, 1);
    assert_eq!(particles[1].x, 1.5);
    assert_eq!(
        particles[2].radius, 0.0,
        "radius must default to 0 when the column is absent"
    );
}

#[test]
fn parses_particles_with_radius_column() {
    let text = "2\n10.0\n1 0.0 0.0 0.25\n2 1.0 1.0 0.5\n";
    let particles = parse_particles(text).expect("well-formed file");
    assert_eq!(particles[0].radius, 0.25);
    assert_eq!(particles[1].radius, 0.5);
}

#[test]
fn header_count_is_advisory_only() {
    // Declares 5 particles but contains 2; this must load.
    let text = "5\n10.0\n1 0.0 0.0\n2 1.0 1.0\n";
    let particles = parse_particles(text).expect("count mismatch is not an error");
    assert_eq!(particles.len(), 2);
}

#[test]
fn empty_particle_file_is_malformed() {
    match parse_particles("") {
        Err(ViewerError::MalformedInput { line: 1, .. }) => {}
        other => panic!("expected MalformedInput at line 1, got {other:?}"),
    }
}

#[test]
fn non_numeric_token_reports_offending_line() {
    let text = "2\n10.0\n1 0.0 0.0\n2 oops 1.0\n";
    match parse_particles(text) {
        Err(ViewerError::MalformedInput { line, reason }) => {
            assert_eq!(line, 4);
            assert!(reason.contains("x coordinate"), "unhelpful reason: {reason}");
        }
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}

#[test]
fn short_particle_row_is_malformed() {
    let text = "1\n10.0\n1 0.5\n";
    match parse_particles(text) {
        Err(ViewerError::MalformedInput { line: 3, .. }) => {}
        other => panic!("expected MalformedInput at line 3, got {other:?}"),
    }
}

#[test]
fn negative_radius_is_malformed() {
    let text = "1\n10.0\n1 0.0 0.0 -0.5\n";
    match parse_particles(text) {
        Err(ViewerError::MalformedInput { line: 3, reason }) => {
            assert!(reason.contains("non-negative"), "unhelpful reason: {reason}");
        }
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}

#[test]
fn bad_header_is_malformed() {
    match parse_particles("abc\n10.0\n") {
        Err(ViewerError::MalformedInput { line: 1, .. }) => {}
        other => panic!("expected MalformedInput at line 1, got {other:?}"),
    }
    match parse_particles("3\nxyz\n") {
        Err(ViewerError::MalformedInput { line: 2, .. }) => {}
        other => panic!("expected MalformedInput at line 2, got {other:?}"),
    }
}

#[test]
fn parses_neighbor_lists_including_empty_ones() {
    let text = "1 2 3\n2 1\n3\n";
    let table = parse_neighbors(text).expect("well-formed file");
    assert_eq!(table.get(1), &[2, 3]);
    assert_eq!(table.get(2), &[1]);
    assert!(
        table.get(3).is_empty(),
        "a line with only an id declares an empty neighbor list"
    );
    assert!(table.get(4).is_empty(), "absent ids yield an empty list");
}

#[test]
fn empty_neighbor_file_is_malformed() {
    match parse_neighbors("  \n") {
        Err(ViewerError::MalformedInput { line: 1, .. }) => {}
        other => panic!("expected MalformedInput at line 1, got {other:?}"),
    }
}

#[test]
fn non_numeric_neighbor_id_is_malformed() {
    let text = "1 2\n2 x\n";
    match parse_neighbors(text) {
        Err(ViewerError::MalformedInput { line: 2, reason }) => {
            assert!(reason.contains("neighbor id"), "unhelpful reason: {reason}");
        }
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}
