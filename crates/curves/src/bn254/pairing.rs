//! The optimal-ate pairing e: G1 x G2 -> mu_r in Fp12*.
//!
//! The Miller loop runs over the binary expansion of |6u+2| (MSB excluded)
//! with the accumulator point kept in affine coordinates on the twist. Lines
//! are evaluated through the untwist map psi(x, y) = (x*w^2, y*w^3), which
//! for a line of twist-slope lambda through (x_r, y_r) evaluated at
//! P = (x_p, y_p) gives
//!
//!   l(P) = y_p - (lambda*x_p)*w + (lambda*x_r - y_r)*w^3,
//!
//! i.e. an Fp12 element that is sparse in exactly three Fp2 slots. After the
//! loop, BN curves take two extra line steps through pi(Q) and -pi^2(Q).
//! Vertical denominators are eliminated as usual for even embedding degree;
//! line values differing by an Fp2 factor are equalized by the final
//! exponentiation.

use super::constants::{MODULUS, ORDER, SIX_U_PLUS_2};
use super::fp::Fp;
use super::fp12::Fp12;
use super::fp2::Fp2;
use super::fp6::Fp6;
use super::g1::G1;
use super::g2::G2;
use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;

/// xi^((p-1)/3): x-multiplier of the untwist-Frobenius-twist endomorphism.
static TWIST_FROB_X: Lazy<Fp2> = Lazy::new(|| {
    let exp = (&*MODULUS - BigUint::one()) / BigUint::from(3u8);
    Fp2::xi().pow(&exp)
});

/// xi^((p-1)/2): y-multiplier of the untwist-Frobenius-twist endomorphism.
static TWIST_FROB_Y: Lazy<Fp2> = Lazy::new(|| {
    let exp = (&*MODULUS - BigUint::one()) / BigUint::from(2u8);
    Fp2::xi().pow(&exp)
});

/// xi^((p^2-1)/3), for the squared endomorphism.
static TWIST_FROB_X2: Lazy<Fp2> = Lazy::new(|| {
    let exp = (MODULUS.pow(2) - BigUint::one()) / BigUint::from(3u8);
    Fp2::xi().pow(&exp)
});

/// xi^((p^2-1)/2), for the squared endomorphism.
static TWIST_FROB_Y2: Lazy<Fp2> = Lazy::new(|| {
    let exp = (MODULUS.pow(2) - BigUint::one()) / BigUint::from(2u8);
    Fp2::xi().pow(&exp)
});

/// (p^4 - p^2 + 1) / r, the hard part of the final exponentiation.
static HARD_EXP: Lazy<BigUint> = Lazy::new(|| {
    let numerator = MODULUS.pow(4) - MODULUS.pow(2) + BigUint::one();
    debug_assert!((&numerator % &*ORDER) == BigUint::from(0u8));
    numerator / &*ORDER
});

/// An affine point on the twist; `None` is infinity.
type TwistPoint = Option<(Fp2, Fp2)>;

/// A line evaluated at P, in the shape the accumulator multiplication needs.
enum Line {
    /// The generic chord/tangent case: three nonzero Fp2 slots.
    Sparse { a: Fp2, b: Fp2, c: Fp2 },
    /// A vertical line; only reachable through non-subgroup twist inputs,
    /// which the BN254 pairing precompile admits.
    Full(Fp12),
    /// The constant line contributed by the point at infinity.
    One,
}

/// Multiplies the accumulator by a sparse line l = c + a*w + b*w^3, using
/// the Karatsuba split with sparse Fp6 products.
pub fn mul_sparse(f: &Fp12, a: &Fp2, b: &Fp2, c: &Fp2) -> Fp12 {
    let aa = f.c0.mul_by_fp2(c);
    let bb = f.c1.mul_by_01(a, b);
    let cross = f.c0.add(&f.c1).mul_by_01(&c.add(a), b);
    Fp12::new(
        aa.add(&bb.mul_by_v()),
        cross.sub(&aa).sub(&bb),
    )
}

/// The vertical line x_p - x_r*w^2 through a twist point with x-coordinate
/// `x`, evaluated at P.
fn vertical_line(px: &Fp, x: &Fp2) -> Fp12 {
    Fp12::new(
        Fp6::new(Fp2::from_fp(px.clone()), x.neg(), Fp2::zero()),
        Fp6::zero(),
    )
}

/// Builds the sparse line of twist-slope `lambda` through `(x_r, y_r)`,
/// evaluated at P = (px, py).
fn sparse_line(lambda: &Fp2, x_r: &Fp2, y_r: &Fp2, px: &Fp, py: &Fp) -> Line {
    Line::Sparse {
        a: lambda.mul_by_fp(px).neg(),
        b: lambda.mul(x_r).sub(y_r),
        c: Fp2::from_fp(py.clone()),
    }
}

/// Tangent step: the line at R doubled, and 2R.
fn tangent_step(r: &TwistPoint, px: &Fp, py: &Fp) -> (Line, TwistPoint) {
    let Some((x, y)) = r else {
        return (Line::One, None);
    };
    if y.is_zero() {
        // order-2 point on the twist; its tangent is vertical
        return (Line::Full(vertical_line(px, x)), None);
    }
    let lambda = x.square().mul_by_fp(&Fp::from_u64(3)).mul(&y.double().invert());
    let x3 = lambda.square().sub(&x.double());
    let y3 = lambda.mul(&x.sub(&x3)).sub(y);
    (sparse_line(&lambda, x, y, px, py), Some((x3, y3)))
}

/// Chord step: the line through R and Q, and R + Q.
fn chord_step(r: &TwistPoint, q: &(Fp2, Fp2), px: &Fp, py: &Fp) -> (Line, TwistPoint) {
    let Some((x_r, y_r)) = r else {
        // line through O and Q is the vertical at Q
        return (
            Line::Full(vertical_line(px, &q.0)),
            Some(q.clone()),
        );
    };
    let (x_q, y_q) = q;
    if x_r == x_q {
        if y_r == y_q {
            return tangent_step(r, px, py);
        }
        return (Line::Full(vertical_line(px, x_r)), None);
    }
    let lambda = y_q.sub(y_r).mul(&x_q.sub(x_r).invert());
    let x3 = lambda.square().sub(x_r).sub(x_q);
    let y3 = lambda.mul(&x_r.sub(&x3)).sub(y_r);
    (sparse_line(&lambda, x_r, y_r, px, py), Some((x3, y3)))
}

fn apply(f: &Fp12, line: Line) -> Fp12 {
    match line {
        Line::Sparse { a, b, c } => mul_sparse(f, &a, &b, &c),
        Line::Full(l) => f.mul(&l),
        Line::One => f.clone(),
    }
}

/// The Miller function f_{|6u+2|,Q}(P) times the two BN extra lines.
/// Returns one when either input is infinity.
pub fn miller_loop(p: &G1, q: &G2) -> Fp12 {
    if p.is_infinity() || q.is_infinity() {
        return Fp12::one();
    }

    let (px, py) = p.to_affine();
    let (qx, qy) = q.to_affine();
    let q_aff = (qx.clone(), qy.clone());

    let mut f = Fp12::one();
    let mut r: TwistPoint = Some(q_aff.clone());

    for i in (0..SIX_U_PLUS_2.bits() - 1).rev() {
        f = f.square();
        let (line, r_next) = tangent_step(&r, &px, &py);
        f = apply(&f, line);
        r = r_next;

        if SIX_U_PLUS_2.bit(i) {
            let (line, r_next) = chord_step(&r, &q_aff, &px, &py);
            f = apply(&f, line);
            r = r_next;
        }
    }

    // Two extra steps through Q1 = pi(Q) and -Q2 = -pi^2(Q).
    let q1 = (
        qx.conjugate().mul(&TWIST_FROB_X),
        qy.conjugate().mul(&TWIST_FROB_Y),
    );
    let q2_neg = (
        qx.mul(&TWIST_FROB_X2),
        qy.mul(&TWIST_FROB_Y2).neg(),
    );

    let (line, r_next) = chord_step(&r, &q1, &px, &py);
    f = apply(&f, line);
    r = r_next;
    let (line, _) = chord_step(&r, &q2_neg, &px, &py);
    apply(&f, line)
}

/// Raises a Miller-loop output to (p^12 - 1)/r: easy part
/// f^((p^6-1)(p^2+1)) by conjugation, inversion and one Frobenius, then the
/// hard part (p^4 - p^2 + 1)/r by plain exponentiation.
pub fn final_exponentiation(f: &Fp12) -> Fp12 {
    if f.is_zero() {
        // degenerate line product from a non-subgroup input; never the
        // identity, so report a non-one value without dividing by zero
        return Fp12::zero();
    }
    let t = f.conjugate().mul(&f.invert());
    let m = t.frobenius(2).mul(&t);
    m.pow(&HARD_EXP)
}

/// The full pairing e(P, Q); e(O, Q) = e(P, O) = 1.
pub fn pairing(p: &G1, q: &G2) -> Fp12 {
    final_exponentiation(&miller_loop(p, q))
}

/// True iff the product of e(P_i, Q_i) over all pairs is the identity.
/// Pairs containing infinity contribute nothing; the empty product holds.
pub fn multi_pairing(pairs: &[(G1, G2)]) -> bool {
    let mut acc = Fp12::one();
    for (p, q) in pairs {
        if p.is_infinity() || q.is_infinity() {
            continue;
        }
        acc = acc.mul(&miller_loop(p, q));
    }
    final_exponentiation(&acc).is_one()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_scalar(rng: &mut impl Rng) -> BigUint {
        let mut buf = [0u8; 32];
        rng.fill(&mut buf[..]);
        BigUint::from_bytes_be(&buf) % &*ORDER
    }

    #[test]
    fn pairing_is_non_degenerate() {
        let e = pairing(&G1::generator(), &G2::generator());
        assert!(!e.is_one());
        assert!(!e.is_zero());
    }

    #[test]
    fn pairing_with_infinity_is_one() {
        assert!(pairing(&G1::infinity(), &G2::generator()).is_one());
        assert!(pairing(&G1::generator(), &G2::infinity()).is_one());
        assert!(multi_pairing(&[(G1::infinity(), G2::infinity())]));
        assert!(multi_pairing(&[]));
    }

    #[test]
    fn pairing_output_has_order_r() {
        let e = pairing(&G1::generator(), &G2::generator());
        assert!(e.pow(&ORDER).is_one());
    }

    #[test]
    fn bilinearity_in_the_first_argument() {
        let mut rng = rand::thread_rng();
        let a = random_scalar(&mut rng);
        let g1 = G1::generator();
        let g2 = G2::generator();
        // e(aG1, G2) * e(-aG1, G2) = 1
        assert!(multi_pairing(&[
            (g1.scalar_mul(&a), g2.clone()),
            (g1.scalar_mul(&a).neg(), g2.clone()),
        ]));
    }

    #[test]
    fn bilinearity_across_both_arguments() {
        let mut rng = rand::thread_rng();
        let a = random_scalar(&mut rng);
        let b = random_scalar(&mut rng);
        let g1 = G1::generator();
        let g2 = G2::generator();
        // e(aG1, bG2) * e(-bG1, aG2) = 1
        assert!(multi_pairing(&[
            (g1.scalar_mul(&a), g2.scalar_mul(&b)),
            (g1.scalar_mul(&b).neg(), g2.scalar_mul(&a)),
        ]));
    }

    #[test]
    fn linearity_of_the_product() {
        let mut rng = rand::thread_rng();
        let a = random_scalar(&mut rng);
        let b = random_scalar(&mut rng);
        let sum = (&a + &b) % &*ORDER;
        let g1 = G1::generator();
        let g2 = G2::generator();
        // e(aG1, G2) * e(bG1, G2) * e(-(a+b)G1, G2) = 1
        assert!(multi_pairing(&[
            (g1.scalar_mul(&a), g2.clone()),
            (g1.scalar_mul(&b), g2.clone()),
            (g1.scalar_mul(&sum).neg(), g2.clone()),
        ]));
    }

    #[test]
    fn single_generator_pair_is_not_the_identity() {
        assert!(!multi_pairing(&[(G1::generator(), G2::generator())]));
    }

    #[test]
    fn sparse_line_multiplication_matches_dense() {
        let mut rng = rand::thread_rng();
        let mut part = || {
            let mut buf = [0u8; 48];
            rng.fill(&mut buf[..]);
            Fp::new(BigUint::from_bytes_be(&buf))
        };
        let a = Fp2::new(part(), part());
        let b = Fp2::new(part(), part());
        let c = Fp2::new(part(), part());
        let mut fp2 = |p: &mut dyn FnMut() -> Fp| Fp2::new(p(), p());
        let f = Fp12::new(
            Fp6::new(fp2(&mut part), fp2(&mut part), fp2(&mut part)),
            Fp6::new(fp2(&mut part), fp2(&mut part), fp2(&mut part)),
        );

        let dense = Fp12::new(
            Fp6::new(c.clone(), Fp2::zero(), Fp2::zero()),
            Fp6::new(a.clone(), b.clone(), Fp2::zero()),
        );
        assert_eq!(mul_sparse(&f, &a, &b, &c), f.mul(&dense));
    }
}
