//! Parsing of `--edges` items such as `0-1` or `1-2:2.5`.

use std::fmt;

/// One edge requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSpec {
    pub tail: u64,
    pub head: u64,
    pub weight: Option<f64>,
}

impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{}-{}:{}", self.tail, self.head, w),
            None => write!(f, "{}-{}", self.tail, self.head),
        }
    }
}

fn parse_id(s: &str) -> Result<u64, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid node ID", s.trim()))
}

/// Parses `TAIL-HEAD[:WEIGHT]`.
pub fn parse_edge(s: &str) -> Result<EdgeSpec, String> {
    let s = s.trim();
    let (pair, weight) = match s.split_once(':') {
        Some((pair, raw)) => {
            let weight: f64 = raw
                .trim()
                .parse()
                .map_err(|_| format!("'{}' is not a valid weight", raw.trim()))?;
            if !weight.is_finite() {
                return Err(format!("weight must be finite, got {}", raw.trim()));
            }
            (pair, Some(weight))
        }
        None => (s, None),
    };

    let (tail, head) = pair
        .split_once('-')
        .ok_or_else(|| format!("'{}' is not of the form TAIL-HEAD[:WEIGHT]", s))?;

    Ok(EdgeSpec {
        tail: parse_id(tail)?,
        head: parse_id(head)?,
        weight,
    })
}
