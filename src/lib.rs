//! Calculatrice binaire — bibliothèque
//!
//! Noyau réutilisable : primitives + - * / √ sur f64 et évaluation d’une
//! chaîne “a op b” (un seul opérateur). Aucun état, aucune E/S.
//!
//! ```
//! use calculatrice_binaire::{divide, evaluate, ErreurCalcul};
//!
//! assert_eq!(evaluate("    4 *1.5"), Ok(6.0));
//! assert_eq!(divide(20.0, 2.0, &[0.0]), Err(ErreurCalcul::DivisionByZero));
//! ```

pub mod noyau;

// API publique (ré-export)
pub use noyau::{
    add, add_n, decoupe, divide, divide_n, evaluate, lire_operande, multiply, multiply_n,
    square_root, subtract, subtract_n, Decoupage, ErreurCalcul, Operande, Operateur, Resultat,
};
