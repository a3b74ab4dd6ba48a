//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, chiffres, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de découpage).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur la précision d’affichage (chiffres).

/// Précision d’affichage par défaut (chiffres après la virgule).
const CHIFFRES_DEFAUT: usize = 6;

/// Au-delà, f64 n’a plus rien à dire.
pub const CHIFFRES_MAX: usize = 17;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub gauche: String,
    pub operateur: String,
    pub droite: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub valeur: Option<f64>, // dernier résultat brut (None si rien / erreur)
    pub resultat: String,    // affichage (arrondi à `chiffres`)
    pub erreur: String,      // message d’erreur (si découpage/lecture/calcul échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub chiffres: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            valeur: None,
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            chiffres: CHIFFRES_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + chiffres par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.chiffres = CHIFFRES_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.valeur = None;
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Choix UX : on CONSERVE le dernier résultat affiché, on coupe la démarche.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, valeur: f64, demarche: Demarche) {
        self.erreur.clear();
        self.valeur = Some(valeur);
        self.resultat = formate(valeur, self.chiffres);
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Borne les chiffres puis ré-affiche le dernier résultat avec la nouvelle précision.
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.chiffres = chiffres.min(CHIFFRES_MAX);
        if let Some(v) = self.valeur {
            self.resultat = formate(v, self.chiffres);
        }
        self.focus_entree = true;
    }
}

/// Arrondi à `chiffres` décimales, zéros finaux retirés ("6.000000" -> "6").
pub fn formate(valeur: f64, chiffres: usize) -> String {
    let mut s = format!("{valeur:.chiffres$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
