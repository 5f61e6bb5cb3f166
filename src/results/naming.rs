//! Artifact filename grammar
//!
//! Encode and decode live together so the naming scheme stays a bijection
//! over (trace, parameters): `<trace>_j<k0>_k<k1>_l<k2>_r<R>_f<F>.out`.

use crate::grid::ParameterPoint;

/// Suffix of captured simulator output files
pub const ARTIFACT_SUFFIX: &str = ".out";

/// Build the artifact filename for one (trace, parameters) invocation
pub fn artifact_file_name(trace: &str, params: &ParameterPoint) -> String {
    format!(
        "{}_j{}_k{}_l{}_r{}_f{}{}",
        trace, params.k0, params.k1, params.k2, params.r, params.f, ARTIFACT_SUFFIX
    )
}

/// Decode an artifact filename back into (trace, parameters).
///
/// The trace itself may contain underscores and digits, so the five tagged
/// fields are peeled off right-to-left and the longest possible trace wins.
/// Returns None for anything that is not an experiment artifact.
pub fn parse_artifact_name(name: &str) -> Option<(String, ParameterPoint)> {
    let stem = name.strip_suffix(ARTIFACT_SUFFIX)?;
    let (rest, f) = split_tagged(stem, "_f")?;
    let (rest, r) = split_tagged(rest, "_r")?;
    let (rest, k2) = split_tagged(rest, "_l")?;
    let (rest, k1) = split_tagged(rest, "_k")?;
    let (trace, k0) = split_tagged(rest, "_j")?;
    if trace.is_empty() {
        return None;
    }
    Some((trace.to_string(), ParameterPoint::new(k0, k1, k2, r, f)))
}

/// Split `<head><tag><digits>` at the rightmost occurrence of `tag`; the
/// digits must run to the end of the string.
fn split_tagged<'a>(s: &'a str, tag: &str) -> Option<(&'a str, u32)> {
    let pos = s.rfind(tag)?;
    let digits = &s[pos + tag.len()..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((&s[..pos], digits.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        let p = ParameterPoint::new(2, 1, 2, 4, 8);
        assert_eq!(artifact_file_name("bench1", &p), "bench1_j2_k1_l2_r4_f8.out");
    }

    #[test]
    fn test_decode_simple() {
        let (trace, p) = parse_artifact_name("bench1_j2_k1_l2_r4_f8.out").unwrap();
        assert_eq!(trace, "bench1");
        assert_eq!(p, ParameterPoint::new(2, 1, 2, 4, 8));
    }

    #[test]
    fn test_decode_trace_with_underscores_and_digits() {
        // Greedy trace: tagged fields bind to their rightmost occurrence
        let (trace, p) = parse_artifact_name("gcc_f2_run_j1_k2_l3_r4_f8.out").unwrap();
        assert_eq!(trace, "gcc_f2_run");
        assert_eq!(p, ParameterPoint::new(1, 2, 3, 4, 8));
    }

    #[test]
    fn test_decode_rejects_missing_suffixes() {
        assert!(parse_artifact_name("bench1_bad.out").is_none());
        assert!(parse_artifact_name("bench1_j2_k1_l2_r4.out").is_none());
        assert!(parse_artifact_name("bench1_j2_k1_l2_r4_f8.log").is_none());
        assert!(parse_artifact_name("bench1_j2_k1_l2_r4_f8").is_none());
    }

    #[test]
    fn test_decode_rejects_non_numeric_fields() {
        assert!(parse_artifact_name("bench1_j2_k1_l2_r4_f8b.out").is_none());
        assert!(parse_artifact_name("bench1_j2_k1_l2_rX_f8.out").is_none());
    }

    #[test]
    fn test_decode_rejects_empty_trace() {
        assert!(parse_artifact_name("_j1_k1_l1_r1_f1.out").is_none());
    }

    #[test]
    fn test_round_trip() {
        let p = ParameterPoint::new(1, 2, 3, 4, 8);
        let name = artifact_file_name("perl_2017", &p);
        let (trace, decoded) = parse_artifact_name(&name).unwrap();
        assert_eq!(trace, "perl_2017");
        assert_eq!(decoded, p);
    }
}
