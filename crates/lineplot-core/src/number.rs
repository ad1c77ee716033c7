// File: crates/lineplot-core/src/number.rs
// Summary: Shortest round-trip number text that gnuplot reads as a float.

/// Magnitudes at or above this print in exponent form.
const EXP_ABOVE: f64 = 1e15;
/// Non-zero magnitudes below this print in exponent form.
const EXP_BELOW: f64 = 1e-5;

/// Plain decimal for ordinary values (`0`, `-0.06`, `4.12`), `{:e}` for very
/// large or tiny ones so gnuplot never sees an overflowing integer literal.
/// Both forms parse back to the identical `f64`.
pub fn format_number(v: f64) -> String {
    let a = v.abs();
    if a.is_finite() && a != 0.0 && (a >= EXP_ABOVE || a < EXP_BELOW) {
        format!("{v:e}")
    } else {
        v.to_string()
    }
}
