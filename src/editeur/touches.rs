//! Touches typées de la calculatrice (ensemble fermé, pas de dispatch par chaîne).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

/// Opérateurs reconnus dans le texte (contrôles de syntaxe + réécritures).
pub const OPERATEURS: [char; 4] = ['+', '-', '*', '/'];

pub fn est_operateur(c: char) -> bool {
    OPERATEURS.contains(&c)
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }
}

/// Fonctions insérées sous la forme `nom(`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Log,
    Ln,
    Sec,
    Csc,
    Cot,
}

impl Fonction {
    pub const TOUTES: [Fonction; 14] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Asin,
        Fonction::Acos,
        Fonction::Atan,
        Fonction::Sinh,
        Fonction::Cosh,
        Fonction::Tanh,
        Fonction::Log,
        Fonction::Ln,
        Fonction::Sec,
        Fonction::Csc,
        Fonction::Cot,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Sinh => "sinh",
            Fonction::Cosh => "cosh",
            Fonction::Tanh => "tanh",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Sec => "sec",
            Fonction::Csc => "csc",
            Fonction::Cot => "cot",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn texte(self) -> &'static str {
        match self {
            Constante::Pi => "pi",
            Constante::E => "e",
        }
    }
}

/// Fonctions appliquées au RÉSULTAT de l’expression courante.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionUnaire {
    Carre,
    Inverse,
    Racine,
    DixPuissance,
    Plancher,
    Plafond,
    ValeurAbsolue,
}

impl FonctionUnaire {
    pub const TOUTES: [FonctionUnaire; 7] = [
        FonctionUnaire::Carre,
        FonctionUnaire::Inverse,
        FonctionUnaire::Racine,
        FonctionUnaire::DixPuissance,
        FonctionUnaire::Plancher,
        FonctionUnaire::Plafond,
        FonctionUnaire::ValeurAbsolue,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            FonctionUnaire::Carre => "x²",
            FonctionUnaire::Inverse => "1/x",
            FonctionUnaire::Racine => "√x",
            FonctionUnaire::DixPuissance => "10ˣ",
            FonctionUnaire::Plancher => "floor",
            FonctionUnaire::Plafond => "ceil",
            FonctionUnaire::ValeurAbsolue => "|x|",
        }
    }
}
