//! Noyau binaire
//!
//! Organisation interne :
//! - erreur.rs     : ErreurCalcul (taxonomie typée) + Resultat
//! - primitives.rs : + - * / √ (pli à gauche, au moins deux opérandes)
//! - eval.rs       : découpage “a op b” + lecture des opérandes + dispatch

pub mod erreur;
pub mod eval;
pub mod primitives;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::{ErreurCalcul, Operande, Resultat};
pub use eval::{decoupe, evaluate, lire_operande, Decoupage, Operateur};
pub use primitives::{
    add, add_n, divide, divide_n, multiply, multiply_n, square_root, subtract, subtract_n,
};
