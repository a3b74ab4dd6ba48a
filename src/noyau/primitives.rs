// src/noyau/primitives.rs
//
// Primitives arithmétiques (pures, sans état)
// -------------------------------------------
// Contrats :
// - au moins deux opérandes (a, b) + une queue ordonnée `reste`
// - pli à gauche : ((a op b) op reste[0]) op reste[1] ...
// - division : échoue au PREMIER diviseur nul (résultat partiel jeté)
// - √ : échoue si a < 0 ; √0 = 0
//
// Génériques sur `Float` : l’API publique sert f64, mais f32 passe aussi.

use num_traits::{Float, Zero};
use tracing::trace;

use super::erreur::{ErreurCalcul, Resultat};

/* ------------------------ Deux opérandes + queue ------------------------ */

/// Somme de tous les opérandes.
pub fn add<T: Float>(a: T, b: T, reste: &[T]) -> T {
    reste.iter().fold(a + b, |acc, &n| acc + n)
}

/// `((a - b) - reste[0]) - ...`
pub fn subtract<T: Float>(a: T, b: T, reste: &[T]) -> T {
    reste.iter().fold(a - b, |acc, &n| acc - n)
}

/// Produit de tous les opérandes.
pub fn multiply<T: Float>(a: T, b: T, reste: &[T]) -> T {
    reste.iter().fold(a * b, |acc, &n| acc * n)
}

/// `((a / b) / reste[0]) / ...`
///
/// `DivisionByZero` dès qu’un diviseur vaut exactement 0 (`-0.0` compris),
/// même s’il est au fond de la queue.
pub fn divide<T: Float>(a: T, b: T, reste: &[T]) -> Resultat<T> {
    let premier = divise_un(a, b)?;
    reste.iter().try_fold(premier, |acc, &n| divise_un(acc, n))
}

fn divise_un<T: Float>(acc: T, diviseur: T) -> Resultat<T> {
    if diviseur.is_zero() {
        trace!("diviseur nul, division abandonnée");
        return Err(ErreurCalcul::DivisionByZero);
    }
    Ok(acc / diviseur)
}

/// Racine carrée (non négative).
///
/// NaN passe tel quel (NaN < 0 est faux).
pub fn square_root<T: Float>(a: T) -> Resultat<T> {
    if a < T::zero() {
        let valeur = a.to_f64().unwrap_or(f64::NAN);
        trace!(valeur, "racine carrée d’un négatif");
        return Err(ErreurCalcul::InvalidInput { valeur });
    }
    Ok(a.sqrt())
}

/* ------------------------ Formes “tranche” ------------------------ */
//
// Tranche vide => 0 ; un seul élément => lui-même ; sinon pli à gauche.

pub fn add_n<T: Float>(nums: &[T]) -> T {
    match nums {
        [] => T::zero(),
        [seul] => *seul,
        [a, b, reste @ ..] => add(*a, *b, reste),
    }
}

pub fn subtract_n<T: Float>(nums: &[T]) -> T {
    match nums {
        [] => T::zero(),
        [seul] => *seul,
        [a, b, reste @ ..] => subtract(*a, *b, reste),
    }
}

pub fn multiply_n<T: Float>(nums: &[T]) -> T {
    match nums {
        [] => T::zero(),
        [seul] => *seul,
        [a, b, reste @ ..] => multiply(*a, *b, reste),
    }
}

/// Le dividende peut valoir 0 (`[0, 1.1, 2.5]` => 0) ; seuls les diviseurs sont testés.
pub fn divide_n<T: Float>(nums: &[T]) -> Resultat<T> {
    match nums {
        [] => Ok(T::zero()),
        [seul] => Ok(*seul),
        [a, b, reste @ ..] => divide(*a, *b, reste),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presque_egal(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9
    }

    fn assert_proche(nom: &str, attendu: f64, obtenu: f64) {
        if !presque_egal(attendu, obtenu) {
            panic!("{nom}: attendu {attendu}, obtenu {obtenu}");
        }
    }

    // --- Deux opérandes ---

    #[test]
    fn add_cas_de_base() {
        // (nom, attendu, a, b)
        let cas = [
            ("deux positifs", 5.0, 3.0, 2.0),
            ("zéro et négatif", -2.0, 0.0, -2.0),
            ("positif et négatif", -1.0, -5.0, 4.0),
            ("deux négatifs", -11.0, -8.0, -3.0),
            ("deux fractions", 6.5, 3.3, 3.2),
        ];
        for (nom, attendu, a, b) in cas {
            assert_proche(nom, attendu, add(a, b, &[]));
        }
    }

    #[test]
    fn subtract_cas_de_base() {
        let cas = [
            ("deux positifs", 3.0, 5.0, 2.0),
            ("zéro moins positif", -2.0, 0.0, 2.0),
            ("négatif moins positif", -9.0, -5.0, 4.0),
            ("deux négatifs", -5.0, -8.0, -3.0),
            ("deux fractions", 0.1, 3.3, 3.2),
        ];
        for (nom, attendu, a, b) in cas {
            assert_proche(nom, attendu, subtract(a, b, &[]));
        }
    }

    #[test]
    fn multiply_cas_de_base() {
        let cas = [
            ("deux positifs", 10.0, 5.0, 2.0),
            ("zéro", 0.0, 0.0, 2.0),
            ("positif et négatif", -20.0, -5.0, 4.0),
            ("deux négatifs", 24.0, -8.0, -3.0),
            ("deux fractions", 4.03, 3.1, 1.3),
        ];
        for (nom, attendu, a, b) in cas {
            assert_proche(nom, attendu, multiply(a, b, &[]));
        }
    }

    #[test]
    fn divide_cas_de_base() {
        assert_proche("deux positifs", 5.0, divide(10.0, 2.0, &[]).unwrap());
        assert_proche("zéro divisé", 0.0, divide(0.0, 2.0, &[]).unwrap());
        assert_proche("signes mêlés", -1.25, divide(5.0, -4.0, &[]).unwrap());
        assert_proche("deux négatifs", 4.0, divide(-8.0, -2.0, &[]).unwrap());
        assert_proche("deux fractions", 2.75, divide(5.5, 2.0, &[]).unwrap());
        assert_eq!(divide(5.0, 0.0, &[]), Err(ErreurCalcul::DivisionByZero));
    }

    // --- Queue variadique ---

    #[test]
    fn pli_a_gauche() {
        assert_eq!(subtract(10.0, 2.0, &[3.0]), 5.0);
        assert_eq!(divide(40.0, 5.0, &[2.0, 2.0]), Ok(2.0));
        assert_eq!(add(1.0, 2.0, &[3.0, 4.0]), 10.0);
        assert_eq!(multiply(1.0, 2.0, &[3.0, 4.0]), 24.0);
    }

    #[test]
    fn zero_au_fond_de_la_queue() {
        assert_eq!(divide(20.0, 2.0, &[0.0]), Err(ErreurCalcul::DivisionByZero));
        assert_eq!(
            divide(20.0, 2.0, &[5.0, -0.0, 1.0]),
            Err(ErreurCalcul::DivisionByZero)
        );
    }

    // --- √ ---

    #[test]
    fn racine_carree() {
        assert_eq!(square_root(16.0), Ok(4.0));
        assert_eq!(square_root(0.0), Ok(0.0));
        assert_eq!(
            square_root(-1.0),
            Err(ErreurCalcul::InvalidInput { valeur: -1.0 })
        );
    }

    #[test]
    fn generique_f32() {
        assert_eq!(add(1.5f32, 2.5, &[]), 4.0f32);
        assert_eq!(square_root(9.0f32), Ok(3.0f32));
        assert_eq!(
            square_root(-4.0f32),
            Err(ErreurCalcul::InvalidInput { valeur: -4.0 })
        );
    }

    // --- Formes tranche ---

    #[test]
    fn formes_tranche() {
        let vide: [f64; 0] = [];
        assert_eq!(add_n(&vide), 0.0);
        assert_eq!(subtract_n(&vide), 0.0);
        assert_eq!(multiply_n(&vide), 0.0);
        assert_eq!(divide_n(&vide), Ok(0.0));

        assert_eq!(add_n(&[5.0]), 5.0);
        assert_eq!(subtract_n(&[5.0]), 5.0);
        assert_eq!(multiply_n(&[5.0]), 5.0);
        assert_eq!(divide_n(&[5.0]), Ok(5.0));

        assert_proche("add_n", 10.6, add_n(&[1.1, 2.2, 3.1, 4.2]));
        assert_proche("subtract_n", -8.0, subtract_n(&[1.0, 2.0, 3.0, 4.0]));
        assert_proche("subtract_n fractions", 2.2, subtract_n(&[5.5, 1.1, 2.2]));
        assert_proche("multiply_n", 13.31, multiply_n(&[1.1, 1.1, 11.0]));
        assert_proche("divide_n", 1.0, divide_n(&[20.0, 5.0, 2.0, 2.0]).unwrap());
        assert_proche("divide_n fractions", 2.0, divide_n(&[5.5, 1.1, 2.5]).unwrap());
    }

    #[test]
    fn divide_n_dividende_nul_accepte() {
        assert_eq!(divide_n(&[0.0, 1.1, 2.5]), Ok(0.0));
        assert_eq!(divide_n(&[5.5, 0.0, 2.2]), Err(ErreurCalcul::DivisionByZero));
    }
}
