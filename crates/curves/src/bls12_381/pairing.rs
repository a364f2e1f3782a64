//! The optimal-ate pairing e: G1 x G2 -> mu_r in Fp12*.
//!
//! The Miller loop runs over the binary expansion of |x| (MSB excluded)
//! with the accumulator point in affine coordinates on the twist. The
//! BLS12-381 twist is of M type, so the untwist map is
//! psi(x, y) = (x*w^4/xi, y*w^3/xi) and a line of twist-slope lambda
//! through (x_r, y_r) evaluated at P = (x_p, y_p) becomes (after scaling
//! by xi, which the final exponentiation cancels)
//!
//!   l(P) = xi*y_p + (lambda*x_r - y_r)*w^3 - (lambda*x_p)*w^5.
//!
//! The parameter x is negative, so the accumulator is conjugated after the
//! loop.

use super::constants::{MODULUS, ORDER, X_ABS};
use super::fp::Fp;
use super::fp12::Fp12;
use super::fp2::Fp2;
use super::fp6::Fp6;
use super::g1::G1;
use super::g2::G2;
use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;

/// (p^4 - p^2 + 1) / r, the hard part of the final exponentiation.
static HARD_EXP: Lazy<BigUint> = Lazy::new(|| {
    let numerator = MODULUS.pow(4) - MODULUS.pow(2) + BigUint::one();
    debug_assert!((&numerator % &*ORDER) == BigUint::from(0u8));
    numerator / &*ORDER
});

/// An affine point on the twist; `None` is infinity.
type TwistPoint = Option<(Fp2, Fp2)>;

enum Line {
    /// The generic chord/tangent case: three nonzero Fp2 slots.
    Sparse { a: Fp2, b: Fp2, c: Fp2 },
    /// A vertical line; unreachable for subgroup inputs but handled so the
    /// pairing is total over the whole twist.
    Full(Fp12),
    /// The constant line contributed by the point at infinity.
    One,
}

/// Multiplies the accumulator by a sparse line l = c + b*w^3 + a*w^5.
pub fn mul_sparse(f: &Fp12, a: &Fp2, b: &Fp2, c: &Fp2) -> Fp12 {
    let aa = f.c0.mul_by_fp2(c);
    let bb = f.c1.mul_by_12(b, a);
    let cross = f
        .c0
        .add(&f.c1)
        .mul(&Fp6::new(c.clone(), b.clone(), a.clone()));
    Fp12::new(
        aa.add(&bb.mul_by_v()),
        cross.sub(&aa).sub(&bb),
    )
}

/// The vertical line xi*x_p - x_r*w^4 through a twist point with
/// x-coordinate `x`, evaluated at P.
fn vertical_line(px: &Fp, x: &Fp2) -> Fp12 {
    Fp12::new(
        Fp6::new(Fp2::xi().mul_by_fp(px), Fp2::zero(), x.neg()),
        Fp6::zero(),
    )
}

fn sparse_line(lambda: &Fp2, x_r: &Fp2, y_r: &Fp2, px: &Fp, py: &Fp) -> Line {
    Line::Sparse {
        a: lambda.mul_by_fp(px).neg(),
        b: lambda.mul(x_r).sub(y_r),
        c: Fp2::xi().mul_by_fp(py),
    }
}

fn tangent_step(r: &TwistPoint, px: &Fp, py: &Fp) -> (Line, TwistPoint) {
    let Some((x, y)) = r else {
        return (Line::One, None);
    };
    if y.is_zero() {
        return (Line::Full(vertical_line(px, x)), None);
    }
    let lambda = x.square().mul_by_fp(&Fp::from_u64(3)).mul(&y.double().invert());
    let x3 = lambda.square().sub(&x.double());
    let y3 = lambda.mul(&x.sub(&x3)).sub(y);
    (sparse_line(&lambda, x, y, px, py), Some((x3, y3)))
}

fn chord_step(r: &TwistPoint, q: &(Fp2, Fp2), px: &Fp, py: &Fp) -> (Line, TwistPoint) {
    let Some((x_r, y_r)) = r else {
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

/// The Miller function f_{|x|,Q}(P), conjugated because x < 0.
/// Returns one when either input is infinity.
pub fn miller_loop(p: &G1, q: &G2) -> Fp12 {
    if p.is_infinity() || q.is_infinity() {
        return Fp12::one();
    }

    let (px, py) = p.to_affine();
    let (qx, qy) = q.to_affine();
    let q_aff = (qx, qy);

    let mut f = Fp12::one();
    let mut r: TwistPoint = Some(q_aff.clone());

    for i in (0..X_ABS.bits() - 1).rev() {
        f = f.square();
        let (line, r_next) = tangent_step(&r, &px, &py);
        f = apply(&f, line);
        r = r_next;

        if X_ABS.bit(i) {
            let (line, r_next) = chord_step(&r, &q_aff, &px, &py);
            f = apply(&f, line);
            r = r_next;
        }
    }

    f.conjugate()
}

/// Raises a Miller-loop output to (p^12 - 1)/r.
pub fn final_exponentiation(f: &Fp12) -> Fp12 {
    if f.is_zero() {
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
            let mut buf = [0u8; 64];
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
            Fp6::new(Fp2::zero(), b.clone(), a.clone()),
        );
        assert_eq!(mul_sparse(&f, &a, &b, &c), f.mul(&dense));
    }
}
