use num_complex::Complex64;

/// Parse one whitespace-delimited token as a complex literal.
///
/// Accepted forms, matching the simulator's text output:
/// - bare real: `1.5`, `-2e-3`
/// - real+imaginary: `a+bj`, `a-bj`, exponents allowed in both parts
/// - pure imaginary: `0.5j`
///
/// The simulator prints rows as `real << "+" << imag << "j"`, so a negative
/// imaginary part arrives as `a+-bj`; that form parses as `a - bj`.
pub fn parse_complex(token: &str) -> Option<Complex64> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let (body, imaginary) = match token.strip_suffix(['j', 'J']) {
        Some(rest) => (rest, true),
        None => (token, false),
    };

    if !imaginary {
        return body.parse::<f64>().ok().map(Complex64::from);
    }

    match split_at_imag_sign(body) {
        Some(pos) => {
            let re = body[..pos].parse::<f64>().ok()?;
            let im = parse_signed(&body[pos..])?;
            Some(Complex64::new(re, im))
        }
        None => {
            // No interior sign: the whole token is the imaginary part.
            let im = body.parse::<f64>().ok()?;
            Some(Complex64::new(0.0, im))
        }
    }
}

/// Index of the `+`/`-` separating real from imaginary part, if any.
///
/// A candidate sign is skipped when it is the leading sign of the token,
/// part of an exponent (`1e-3`), or the second character of a `+-` pair.
fn split_at_imag_sign(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    for pos in (1..bytes.len()).rev() {
        if bytes[pos] != b'+' && bytes[pos] != b'-' {
            continue;
        }
        match bytes[pos - 1] {
            b'e' | b'E' | b'+' | b'-' => continue,
            _ => return Some(pos),
        }
    }
    None
}

/// Parse an imaginary part that keeps its sign, tolerating the `+-x` quirk.
fn parse_signed(s: &str) -> Option<f64> {
    let s = s.strip_prefix('+').unwrap_or(s);
    s.parse::<f64>().ok()
}
