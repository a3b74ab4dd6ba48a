//! Tests de propriétés : invariants des primitives + aller-retour via evaluate.
//!
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - opérandes finis seulement ; diviseur non nul pour "/"

use std::time::{Duration, Instant};

use super::{add, divide, evaluate, multiply, square_root, subtract, ErreurCalcul};

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
    /// Flottant fini dans ]-1000, 1000[, parfois entier.
    fn nombre(&mut self) -> f64 {
        let x = f64::from(self.next_u32()) / f64::from(u32::MAX) * 1000.0;
        let x = if self.coin() { x.trunc() } else { x };
        if self.coin() {
            -x
        } else {
            x
        }
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

const TOURS: usize = 2_000;

/* ------------------------ Invariants ------------------------ */

#[test]
fn commutativite() {
    let start = Instant::now();
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..TOURS {
        budget(start, Duration::from_secs(5));
        let (a, b) = (rng.nombre(), rng.nombre());
        assert_eq!(add(a, b, &[]), add(b, a, &[]), "a={a} b={b}");
        assert_eq!(multiply(a, b, &[]), multiply(b, a, &[]), "a={a} b={b}");
    }
}

#[test]
fn elements_neutres() {
    let mut rng = Rng::new(42);

    for _ in 0..TOURS {
        let a = rng.nombre();
        assert_eq!(add(a, 0.0, &[]), a);
        assert_eq!(multiply(a, 1.0, &[]), a);
        assert_eq!(divide(a, 1.0, &[]), Ok(a));
    }
}

#[test]
fn zero_et_negatifs_refuses() {
    let mut rng = Rng::new(7);

    for _ in 0..TOURS {
        let a = rng.nombre();
        assert_eq!(divide(a, 0.0, &[]), Err(ErreurCalcul::DivisionByZero));

        let p = a.abs() + 1.0;
        assert_eq!(
            square_root(-p),
            Err(ErreurCalcul::InvalidInput { valeur: -p })
        );
    }
}

#[test]
fn aller_retour_evaluate() {
    let start = Instant::now();
    let mut rng = Rng::new(0x5EED);

    for _ in 0..TOURS {
        budget(start, Duration::from_secs(5));

        let x = rng.nombre();
        let mut y = rng.nombre();
        let op = ['+', '-', '*', '/'][(rng.next_u32() % 4) as usize];
        if op == '/' && y == 0.0 {
            y = 1.0;
        }

        // Display f64 : jamais d’exposant, et relecture exacte
        let expr = if rng.coin() {
            format!("{x}{op}{y}")
        } else {
            format!("  {x} {op}  {y} ")
        };

        let attendu = match op {
            '+' => Ok(add(x, y, &[])),
            '-' => Ok(subtract(x, y, &[])),
            '*' => Ok(multiply(x, y, &[])),
            _ => divide(x, y, &[]),
        };

        assert_eq!(evaluate(&expr), attendu, "expr={expr:?}");
    }
}

#[test]
fn deux_operateurs_toujours_refuses() {
    let mut rng = Rng::new(99);

    for _ in 0..TOURS {
        let (x, y, z) = (rng.nombre().abs(), rng.nombre().abs(), rng.nombre().abs());
        let expr = format!("{x}+{y}*{z}");
        assert!(
            matches!(evaluate(&expr), Err(ErreurCalcul::OperandParse { .. })),
            "expr={expr:?}"
        );
    }
}
