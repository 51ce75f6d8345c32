use super::edges::{parse_edge, EdgeSpec};

#[test]
fn test_parse_unweighted_edge() {
    assert_eq!(
        parse_edge("3-7"),
        Ok(EdgeSpec {
            tail: 3,
            head: 7,
            weight: None
        })
    );
    assert_eq!(parse_edge(" 0 - 1 ").map(|e| (e.tail, e.head)), Ok((0, 1)));
}

#[test]
fn test_parse_weighted_edge() {
    let edge = parse_edge("1-2:2.5").unwrap();
    assert_eq!(edge.weight, Some(2.5));
    assert_eq!(edge.to_string(), "1-2:2.5");
    assert_eq!(parse_edge("1-2:0").unwrap().weight, Some(0.0));
}

#[test]
fn test_parse_rejects_malformed_items() {
    assert!(parse_edge("12").unwrap_err().contains("TAIL-HEAD"));
    assert!(parse_edge("a-1").unwrap_err().contains("node ID"));
    assert!(parse_edge("1--2").is_err());
    assert!(parse_edge("1-2:heavy").unwrap_err().contains("weight"));
    assert!(parse_edge("1-2:NaN").is_err());
}
