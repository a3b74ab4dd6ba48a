//! Noyau — évaluation “a op b”
//!
//! entrée -> découpage (1er opérateur) -> trim -> lecture f64 x2 -> primitive
//!
//! Un seul opérateur : pas de précédence, pas de parenthèses, pas de variables.
//! Un `+`/`-` en tête (après les espaces) est le signe du premier opérande,
//! jamais le point de coupe : "-5+3" => -2.

use std::fmt;

use tracing::debug;

use super::erreur::{ErreurCalcul, Operande, Resultat};
use super::primitives::{add, divide, multiply, subtract};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Ensemble fermé des caractères reconnus comme point de coupe.
    pub const SYMBOLES: [char; 4] = ['+', '-', '*', '/'];

    pub fn depuis_char(c: char) -> Resultat<Self> {
        match c {
            '+' => Ok(Operateur::Plus),
            '-' => Ok(Operateur::Moins),
            '*' => Ok(Operateur::Fois),
            '/' => Ok(Operateur::Divise),
            autre => Err(ErreurCalcul::UnsupportedOperator(autre)),
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// Dispatch vers la primitive, avec exactement deux opérandes.
    pub fn applique(self, a: f64, b: f64) -> Resultat<f64> {
        match self {
            Operateur::Plus => Ok(add(a, b, &[])),
            Operateur::Moins => Ok(subtract(a, b, &[])),
            Operateur::Fois => Ok(multiply(a, b, &[])),
            Operateur::Divise => divide(a, b, &[]),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Résultat du découpage : deux morceaux déjà “trimés” + l’opérateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoupage<'a> {
    pub gauche: &'a str,
    pub operateur: Operateur,
    pub droite: &'a str,
    /// Position (en octets) de l’opérateur dans l’entrée d’origine.
    pub index: usize,
}

/// Découpe `expr` au premier opérateur (signe de tête exclu).
///
/// Ne lit pas les nombres : "2+" donne `droite == ""`, l’erreur viendra de la lecture.
pub fn decoupe(expr: &str) -> Resultat<Decoupage<'_>> {
    let (index, c) = index_operateur(expr).ok_or(ErreurCalcul::NoOperatorFound)?;
    let operateur = Operateur::depuis_char(c)?;

    Ok(Decoupage {
        gauche: expr[..index].trim(),
        operateur,
        droite: expr[index + c.len_utf8()..].trim(),
        index,
    })
}

fn index_operateur(expr: &str) -> Option<(usize, char)> {
    let debut = expr.len() - expr.trim_start().len();
    let corps = &expr[debut..];

    // signe du premier opérande : pas un point de coupe
    let saut = if corps.starts_with(|c: char| c == '+' || c == '-') {
        1
    } else {
        0
    };

    corps[saut..]
        .char_indices()
        .find(|(_, c)| Operateur::SYMBOLES.contains(c))
        .map(|(i, c)| (debut + saut + i, c))
}

/// Lit un opérande décimal : signe optionnel, chiffres, partie fractionnaire optionnelle.
///
/// Refuse l’exposant, `inf`, `NaN` et tout espace intérieur.
pub fn lire_operande(texte: &str, operande: Operande) -> Resultat<f64> {
    let invalide = || ErreurCalcul::OperandParse {
        operande,
        texte: texte.to_string(),
    };

    if !est_decimal(texte) {
        return Err(invalide());
    }
    texte.parse::<f64>().map_err(|_| invalide())
}

fn est_decimal(s: &str) -> bool {
    let sans_signe = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    let (entier, frac) = sans_signe.split_once('.').unwrap_or((sans_signe, ""));

    let chiffres = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
    (!entier.is_empty() || !frac.is_empty()) && chiffres(entier) && chiffres(frac)
}

/// API publique : évalue “a op b” et retourne le nombre, ou l’erreur classée.
///
/// "2+2+3" est refusé comme second opérande invalide ("2+3").
pub fn evaluate(expr: &str) -> Resultat<f64> {
    let d = decoupe(expr)?;
    debug!(
        index = d.index,
        operateur = %d.operateur,
        gauche = d.gauche,
        droite = d.droite,
        "découpage"
    );

    let a = lire_operande(d.gauche, Operande::Premier)?;
    let b = lire_operande(d.droite, Operande::Second)?;

    let resultat = d.operateur.applique(a, b);
    if let Err(e) = &resultat {
        debug!(erreur = %e, "évaluation refusée");
    }
    resultat
}
