//! Dispatch glue (4.H): maps a reducer's name to a [`ReduceCode`] and back
//! to applying it, mirroring the original's `mf_code_fun`/`mf_switch_fun`
//! pair but with a real enum in place of the encode-as-a-negative-double
//! trick. There's no longer any reason to smuggle the tag through an
//! `f64`, since `ReduceCode` already carries it as a Rust value. The
//! numeric codes below exist only to document where each variant came from
//! in the original's scheme; nothing in this crate parses or serializes
//! them.

use crate::reduce::{reduce, ReduceCode};

/// Looks up a reducer by name, as the original's `mf_code_fun` does.
/// Unlike the original, anything that isn't one of the fixed names and
/// doesn't parse as a percentile in `(0, 100)` is rejected rather than
/// silently falling back to a zero quantile: `mf_code_fun`'s `atof` on
/// garbage input returns `0.0`, clamped to `0` by its own `q > 0 ? q : 0`
/// guard, which the quantile path would then have treated as "not a
/// quantile" anyway. Returning `None` here makes that rejection explicit.
pub fn fun_code(name: &str) -> Option<ReduceCode> {
    Some(match name {
        "sum" => ReduceCode::Sum,       // original code -1
        "mean" => ReduceCode::Mean,     // original code -2
        "sd" => ReduceCode::Sd,         // original code -3
        "max" => ReduceCode::Max,       // original code -4
        "min" => ReduceCode::Min,       // original code -5
        "count" => ReduceCode::Count,   // original code -6
        "percent" => ReduceCode::Percent, // original code -7
        "median" => ReduceCode::Quantile(50.0), // original code 50
        "iqr" => ReduceCode::Iqr,       // original code -9
        "first" => ReduceCode::First,   // original code -10
        "firstnm" => ReduceCode::FirstNm, // original code -11
        "last" => ReduceCode::Last,     // original code -12
        "lastnm" => ReduceCode::LastNm, // original code -13
        other => {
            let p: f64 = other.parse().ok()?;
            if p > 0.0 && p < 100.0 {
                ReduceCode::Quantile(p)
            } else {
                return None;
            }
        }
    })
}

/// Applies the reducer named `name` to `v[start..end)`. Thin wrapper over
/// [`fun_code`] + [`reduce`] for callers that only have the name on hand
/// (e.g. parsed straight out of a user-facing summary-function list).
pub fn fun_apply(name: &str, v: &mut [f64], start: usize, end: usize) -> Option<f64> {
    fun_code(name).map(|code| reduce(code, v, start, end))
}
