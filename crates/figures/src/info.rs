use crate::figure::Figure;

/// One-line summary `"A {color} {shape} - {area}"`.
///
/// The area uses `f64`'s `Display` (shortest round-trip form), so `12.0`
/// renders as `12` and `12.56` as `12.56`; no padding is added.
///
/// `Display` never switches to exponent notation and spells overflow as
/// `inf`. Large but valid figures therefore render as, e.g.,
/// `10000000000000000000000` for a 1e11 x 1e11 rectangle, and `inf` once
/// the product overflows (1e200 x 1e200).
pub fn info<F: Figure + ?Sized>(figure: &F) -> String {
    format!(
        "A {} {} - {}",
        figure.color(),
        figure.shape(),
        figure.area()
    )
}
