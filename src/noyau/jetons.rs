// src/noyau/jetons.rs
//
// Jetons : un caractère = un jeton.
// La catégorie se déduit du caractère seul (pas de position, pas d'état).

/// Opérateurs binaires reconnus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

/// Table de précédence (constante, jamais modifiée).
/// Plus le rang est haut, plus l'opérateur lie fort.
pub const PRECEDENCES: [(Operateur, u8); 5] = [
    (Operateur::Plus, 1),
    (Operateur::Minus, 1),
    (Operateur::Star, 2),
    (Operateur::Slash, 2),
    (Operateur::Caret, 3),
];

impl Operateur {
    pub const fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Minus),
            '*' => Some(Operateur::Star),
            '/' => Some(Operateur::Slash),
            '^' => Some(Operateur::Caret),
            _ => None,
        }
    }

    pub const fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Minus => '-',
            Operateur::Star => '*',
            Operateur::Slash => '/',
            Operateur::Caret => '^',
        }
    }

    pub const fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Minus => 1,
            Operateur::Star | Operateur::Slash => 2,
            Operateur::Caret => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tok {
    /// Opérande : un seul caractère alphanumérique, opaque pour le convertisseur.
    Operande(char),
    Op(Operateur),

    LPar,
    RPar,

    // Tout le reste (espace, '.', '%', ...). Rang 0 en mode tolérant.
    Inconnu(char),
}

impl Tok {
    /// Caractère d'origine du jeton.
    pub const fn symbole(self) -> char {
        match self {
            Tok::Operande(c) | Tok::Inconnu(c) => c,
            Tok::Op(op) => op.symbole(),
            Tok::LPar => '(',
            Tok::RPar => ')',
        }
    }
}

/// Rang de précédence d'un jeton : 0 pour tout ce qui n'est pas un opérateur.
pub fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::Op(op) => op.precedence(),
        _ => 0,
    }
}

/// Classe un caractère (fonction pure du caractère).
pub fn classer(c: char) -> Tok {
    if c.is_alphanumeric() {
        return Tok::Operande(c);
    }
    match c {
        '(' => Tok::LPar,
        ')' => Tok::RPar,
        _ => match Operateur::depuis_char(c) {
            Some(op) => Tok::Op(op),
            None => Tok::Inconnu(c),
        },
    }
}

/// Tokenize une chaîne : un jeton par caractère, aucun espace requis.
/// Ne peut pas échouer : les caractères hors alphabet deviennent `Tok::Inconnu`,
/// c'est la conversion qui décide quoi en faire (selon le mode).
pub fn tokenize(s: &str) -> Vec<Tok> {
    s.chars().map(classer).collect()
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Inconnu(' ') => "' '".to_string(),
            Tok::Inconnu(c) => format!("?{c}"),
            t => t.symbole().to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
