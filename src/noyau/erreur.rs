// src/noyau/erreur.rs
//
// Erreurs du noyau : une variante par cas, jamais de panic.
// Le message (Display) est celui affiché tel quel par l’UI.

use std::fmt;

use thiserror::Error;

/// Quel opérande n’a pas pu être lu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operande {
    Premier,
    Second,
}

impl fmt::Display for Operande {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operande::Premier => f.write_str("premier"),
            Operande::Second => f.write_str("second"),
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ErreurCalcul {
    /// Un diviseur vaut exactement 0 (direct ou via `evaluate`).
    #[error("division par zéro")]
    DivisionByZero,

    /// Racine carrée d’un nombre négatif.
    #[error("entrée invalide : {valeur} ; la racine carrée n’est pas définie pour un nombre négatif")]
    InvalidInput { valeur: f64 },

    /// Aucun caractère parmi + - * / ne sert de point de coupe.
    #[error("aucun opérateur trouvé (+, -, *, /)")]
    NoOperatorFound,

    /// Un des deux morceaux n’est pas un nombre décimal.
    #[error("{operande} opérande invalide : {texte:?}")]
    OperandParse { operande: Operande, texte: String },

    /// Caractère hors de {+, -, *, /} au moment du dispatch.
    #[error("opérateur non supporté : '{0}'")]
    UnsupportedOperator(char),
}

pub type Resultat<T> = Result<T, ErreurCalcul>;
