// src/noyau/jetons.rs

/// Jeton de l’expression infixe.
///
/// - `Nombre(texte)` : le texte saisi est la représentation de référence
///   (il peut finir par '.' pendant la saisie, ex: "3.") ; la valeur f64
///   n’est exigée qu’au moment de l’évaluation.
/// - Opérateurs : + - * / ^
/// - Parenthèses : ( )
///
/// Les jetons sont des valeurs immuables : « modifier » le dernier nombre
/// revient à le remplacer dans la séquence, jamais à le muter en place.
#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(String),

    Plus,
    Moins,
    Fois,
    Division,
    Puissance,

    ParG,
    ParD,
}

impl Jeton {
    /// Forme canonique d’affichage (sans espace ajouté).
    pub fn texte(&self) -> &str {
        match self {
            Jeton::Nombre(t) => t.as_str(),

            Jeton::Plus => "+",
            Jeton::Moins => "-",
            Jeton::Fois => "*",
            Jeton::Division => "/",
            Jeton::Puissance => "^",

            Jeton::ParG => "(",
            Jeton::ParD => ")",
        }
    }

    pub fn est_nombre(&self) -> bool {
        matches!(self, Jeton::Nombre(_))
    }

    pub fn est_operateur(&self) -> bool {
        matches!(
            self,
            Jeton::Plus | Jeton::Moins | Jeton::Fois | Jeton::Division | Jeton::Puissance
        )
    }
}

/// Classe un caractère opérateur (ensemble fermé : + - * / ^).
pub fn jeton_operateur(c: char) -> Option<Jeton> {
    match c {
        '+' => Some(Jeton::Plus),
        '-' => Some(Jeton::Moins),
        '*' => Some(Jeton::Fois),
        '/' => Some(Jeton::Division),
        '^' => Some(Jeton::Puissance),
        _ => None,
    }
}

/// Classe un caractère parenthèse (ensemble fermé : ( et )).
pub fn jeton_parenthese(c: char) -> Option<Jeton> {
    match c {
        '(' => Some(Jeton::ParG),
        ')' => Some(Jeton::ParD),
        _ => None,
    }
}

/// Format utilitaire (debug/affichage) : liste de jetons, séparés par un espace.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let morceaux: Vec<&str> = jetons.iter().map(Jeton::texte).collect();
    morceaux.join(" ")
}
