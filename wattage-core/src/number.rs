//! Human-readable number rendering
//!
//! Plain `f64` helpers for rounding to significant figures and for picking
//! the best-fitting magnitude out of a unit table. Rounding is half away
//! from zero.

/// Round to N significant figures
pub fn round_significant(value: f64, sigfigs: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }

    let sigfigs = sigfigs.max(1) as i32;
    let digits = value.abs().log10().floor() as i32 + 1;
    let shift = sigfigs - digits;
    let factor = 10_f64.powi(shift.abs());

    if shift >= 0 {
        (value * factor).round() / factor
    } else {
        (value / factor).round() * factor
    }
}

/// Render with N significant figures, dropping insignificant trailing zeros
pub fn format_significant(value: f64, sigfigs: u32) -> String {
    let rounded = round_significant(value, sigfigs);
    if rounded == 0.0 {
        return "0".to_string();
    }
    if !rounded.is_finite() {
        return format!("{}", rounded);
    }

    let digits = rounded.abs().log10().floor() as i32 + 1;
    let decimals = (sigfigs.max(1) as i32 - digits).max(0) as usize;
    strip_insignificant_zeros(format!("{:.prec$}", rounded, prec = decimals))
}

/// Render `value` against a table of `(decimal exponent, unit label)` pairs
///
/// The value is rounded first, so 999.96 at four figures becomes 1000 and is
/// then shown with the exponent 3 label. The label chosen is the one with the
/// largest exponent not above `floor(log10(|value|))`; values below every
/// entry use the exponent 0 label, or none if the table lacks one. Output is
/// `"<number> <label>"`, trimmed when the label is empty.
pub fn number_to_human<S: AsRef<str>>(value: f64, units: &[(i32, S)], precision: u32) -> String {
    let rounded = round_significant(value, precision);
    let exponent = if rounded != 0.0 && rounded.is_finite() {
        rounded.abs().log10().floor() as i32
    } else {
        0
    };

    let display_exponent = units
        .iter()
        .map(|(e, _)| *e)
        .filter(|e| exponent >= *e)
        .max()
        .unwrap_or(0);

    let label = units
        .iter()
        .find(|(e, _)| *e == display_exponent)
        .map(|(_, label)| label.as_ref())
        .unwrap_or("");

    let scaled = if display_exponent >= 0 {
        rounded / 10_f64.powi(display_exponent)
    } else {
        rounded * 10_f64.powi(-display_exponent)
    };

    format!("{} {}", format_significant(scaled, precision), label)
        .trim()
        .to_string()
}

fn strip_insignificant_zeros(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
