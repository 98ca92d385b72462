//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état du convertisseur (entrée, résultat, erreur, notation, mode, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune conversion ici (pas d’appel au noyau).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : borne sur la longueur de l’entrée.

use log::warn;

use notation_qpur::noyau::{Mode, Operation};

/// Mode au démarrage (surchargeable par NOTATION_MODE en natif).
const MODE_DEFAUT: Mode = Mode::Strict;

/// Variable d’environnement lue au démarrage : "strict" | "tolerant".
pub const ENV_MODE: &str = "NOTATION_MODE";

/// Garde-fou : longueur max de l’entrée (en caractères).
pub const LONGUEUR_MAX: usize = 256;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub miroir: String,
    pub etapes: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppNotation {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // chaîne dense (aucun séparateur)
    pub erreur: String,   // message d’erreur (mode strict)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub operation: Operation,
    pub mode: Mode,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppNotation {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            operation: Operation::default(),
            mode: MODE_DEFAUT,
            focus_entree: true,
        }
    }
}

/// Mode lu depuis une valeur de configuration (absente ou invalide => défaut).
pub fn mode_depuis(valeur: Option<&str>) -> Mode {
    match valeur {
        None => MODE_DEFAUT,
        Some(v) => v.parse().unwrap_or_else(|e| {
            warn!("{ENV_MODE}: {e}, mode {MODE_DEFAUT} conservé");
            MODE_DEFAUT
        }),
    }
}

impl AppNotation {
    /// État initial avec le mode lu dans l’environnement.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn depuis_env() -> Self {
        let valeur = std::env::var(ENV_MODE).ok();
        Self {
            mode: mode_depuis(valeur.as_deref()),
            ..Self::default()
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + réglages par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.operation = Operation::default();
        self.mode = MODE_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On efface la démarche (elle ne correspond plus à l’entrée).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (résultat + démarche).
    pub fn set_resultats(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    pub fn set_operation(&mut self, operation: Operation) {
        self.operation = operation;
        self.focus_entree = true;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.focus_entree = true;
    }
}
