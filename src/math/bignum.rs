//! Precision-carrying helpers over [`dashu_float::DBig`].
//!
//! Every quantity in the lattice and containment pipeline is a decimal
//! big-float that remembers the precision (significant decimal digits) it
//! was constructed with; dashu propagates the larger precision through
//! binary operations. The helpers here cover the operations dashu does not
//! ship: construction with an explicit precision, pi, cube roots, integer
//! powers, mod-1 reduction and plain-decimal serialization.

use crate::error::{NpgenError, Result};
use dashu_float::ops::SquareRoot;
use dashu_float::DBig;

/// Parse a decimal string at the given precision.
pub fn parse(s: &str, precision: usize) -> Result<DBig> {
    let v = DBig::from_str_native(s.trim())
        .map_err(|e| NpgenError::Validation(format!("bad decimal '{s}': {e}")))?;
    Ok(v.with_precision(precision).value())
}

/// An integer as a big decimal at the given precision.
pub fn from_int(n: i64, precision: usize) -> DBig {
    DBig::from(n).with_precision(precision).value()
}

/// n/2 exactly, at the given precision. Grid coordinates are half-integers,
/// so this is the only constructor the coordinate queue needs.
pub fn half_int(n: i64, precision: usize) -> DBig {
    &from_int(n, precision) / &DBig::from(2)
}

pub fn with_prec(x: &DBig, precision: usize) -> DBig {
    x.clone().with_precision(precision).value()
}

pub fn abs(x: &DBig) -> DBig {
    if *x < DBig::ZERO {
        -x
    } else {
        x.clone()
    }
}

/// Checked division.
pub fn div(a: &DBig, b: &DBig) -> Result<DBig> {
    if *b == DBig::ZERO {
        return Err(NpgenError::Arithmetic("division by zero".into()));
    }
    Ok(a / b)
}

/// Checked square root.
pub fn sqrt(x: &DBig) -> Result<DBig> {
    if *x < DBig::ZERO {
        return Err(NpgenError::Arithmetic(
            "square root of a negative number".into(),
        ));
    }
    Ok(x.sqrt())
}

/// Cube root by Newton iteration, seeded from the f64 value. Odd root:
/// negative inputs are allowed.
pub fn cbrt(x: &DBig) -> DBig {
    if *x == DBig::ZERO {
        return x.clone();
    }
    if *x < DBig::ZERO {
        return -cbrt(&-x);
    }
    let p = x.precision().max(1);
    let work = p + 10;
    let xv = with_prec(x, work);
    let seed = xv.to_f64().value().cbrt();
    let mut y = parse(&format!("{seed:.17}"), work).unwrap_or_else(|_| from_int(1, work));
    let three = DBig::from(3);
    // quadratic convergence: ~log2(p/15) rounds suffice, 40 is a hard cap
    let target = pow10(-((p as i64) + 5), work);
    for _ in 0..40 {
        let y2 = &y * &y;
        let next = &(&(&y + &y) + &(&xv / &y2)) / &three;
        let step = abs(&(&next - &y));
        y = next;
        if step <= &target * &y {
            break;
        }
    }
    with_prec(&y, p)
}

/// x^n for integer n by binary exponentiation (errors on 0^-n).
pub fn pow_int(x: &DBig, n: i64) -> Result<DBig> {
    let p = x.precision().max(1);
    if n < 0 {
        return div(&from_int(1, p), &pow_int(x, -n)?);
    }
    let mut acc = from_int(1, p);
    let mut base = x.clone();
    let mut e = n;
    while e > 0 {
        if e & 1 == 1 {
            acc = &acc * &base;
        }
        base = &base * &base;
        e >>= 1;
    }
    Ok(acc)
}

/// x^y for big y, as exp(y ln x); x must be positive.
pub fn pow(x: &DBig, y: &DBig) -> Result<DBig> {
    if *x <= DBig::ZERO {
        return Err(NpgenError::Arithmetic(
            "pow with a non-positive base".into(),
        ));
    }
    Ok((y * &x.ln()).exp())
}

/// e^x (dashu's own series, surfaced for the arithmetic facility).
pub fn exp(x: &DBig) -> DBig {
    x.exp()
}

/// Natural log; input must be positive.
pub fn ln(x: &DBig) -> Result<DBig> {
    if *x <= DBig::ZERO {
        return Err(NpgenError::Arithmetic("ln of a non-positive number".into()));
    }
    Ok(x.ln())
}

/// 10^n at the given precision (n may be negative).
pub fn pow10(n: i64, precision: usize) -> DBig {
    let ten = from_int(10, precision);
    pow_int(&ten, n).expect("10^n cannot fail")
}

/// pi to the given precision, by Machin's formula
/// pi = 16 atan(1/5) - 4 atan(1/239).
pub fn pi(precision: usize) -> DBig {
    let work = precision + 10;
    let a = atan_inv(5, work);
    let b = atan_inv(239, work);
    let v = &(&a * &DBig::from(16)) - &(&b * &DBig::from(4));
    with_prec(&v, precision)
}

/// atan(1/m) by the Taylor series, for integer m > 1.
fn atan_inv(m: i64, work: usize) -> DBig {
    let inv = &from_int(1, work) / &DBig::from(m);
    let inv2 = &inv * &inv;
    let mut term = inv.clone(); // x^(2k+1)
    let mut total = inv.clone();
    let cutoff = pow10(-(work as i64), work);
    let mut k: i64 = 1;
    loop {
        term = &term * &inv2;
        let contrib = &term / &DBig::from(2 * k + 1);
        if contrib < cutoff {
            break;
        }
        if k % 2 == 1 {
            total = &total - &contrib;
        } else {
            total = &total + &contrib;
        }
        k += 1;
    }
    total
}

/// Floor as an i64. Assumes |x| < 2^52, which holds for every grid bound
/// and reduced coordinate this crate produces.
pub fn floor_i64(x: &DBig) -> i64 {
    x.to_f64().value().floor() as i64
}

pub fn ceil_i64(x: &DBig) -> i64 {
    -floor_i64(&-x)
}

/// x mod 1, in [0, 1).
pub fn mod_one(x: &DBig) -> DBig {
    let f = floor_i64(x);
    x - &DBig::from(f)
}

/// Plain positional decimal, never scientific notation. dashu renders
/// base-10 floats positionally for moderate exponents; the expansion here
/// covers the remaining cases so the writers can rely on the format.
pub fn to_plain_string(x: &DBig) -> String {
    let s = x.to_string();
    let Some(epos) = s.find(['e', 'E']) else {
        return s;
    };
    let (mant, rest) = s.split_at(epos);
    let exp: i64 = rest[1..].parse().unwrap_or(0);
    let (sign, mant) = match mant.strip_prefix('-') {
        Some(m) => ("-", m),
        None => ("", mant),
    };
    let (int_part, frac_part) = match mant.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (mant.to_string(), String::new()),
    };
    let digits: String = format!("{int_part}{frac_part}");
    let point = int_part.len() as i64 + exp;
    let mut out = String::from(sign);
    if point <= 0 {
        out.push_str("0.");
        for _ in 0..(-point) {
            out.push('0');
        }
        out.push_str(digits.trim_end_matches('0'));
        if out.ends_with('.') {
            out.push('0');
        }
    } else if (point as usize) >= digits.len() {
        out.push_str(&digits);
        for _ in 0..(point as usize - digits.len()) {
            out.push('0');
        }
    } else {
        out.push_str(&digits[..point as usize]);
        out.push('.');
        out.push_str(&digits[point as usize..]);
    }
    out
}
