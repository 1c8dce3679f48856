// src/noyau/format.rs
//
// Affichage du résultat — politique explicite, indépendante de la locale :
// - scientifique si |v| >= 1e15, ou si v != 0 et |v| < 1e-2
// - sinon notation fixe, milliers groupés par apostrophe (1'234'567.89)
// - décimales affichées = chiffres fractionnaires de la représentation
//   la plus courte qui fait l’aller-retour (Display de f64)
// - non finis : "NaN", "Infinity", "-Infinity" (affichés, pas des erreurs)

/// Séparateur de milliers (convention fixe, aucune locale consultée).
const SEPARATEUR_MILLIERS: char = '\'';

/// Seuils de bascule vers la notation scientifique.
const SEUIL_SCIENTIFIQUE_HAUT: f64 = 1e15;
const SEUIL_SCIENTIFIQUE_BAS: f64 = 1e-2;

/// Formate un résultat d’évaluation pour l’affichage et l’historique.
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let scientifique =
        v.abs() >= SEUIL_SCIENTIFIQUE_HAUT || (v != 0.0 && v.abs() < SEUIL_SCIENTIFIQUE_BAS);

    if scientifique {
        let places = decimales_mantisse(v);
        format!("{v:.places$E}")
    } else {
        let places = decimales_courtes(v);
        groupe_milliers(&format!("{v:.places$}"))
    }
}

/// Chiffres fractionnaires de la représentation la plus courte (Display).
fn decimales_courtes(v: f64) -> usize {
    let s = format!("{v}");
    match s.find('.') {
        Some(i) => s.len() - i - 1,
        None => 0,
    }
}

/// Chiffres fractionnaires de la mantisse normalisée (pour {:E}).
fn decimales_mantisse(v: f64) -> usize {
    let s = format!("{v:e}");
    let mantisse = s.split('e').next().unwrap_or("");
    match mantisse.find('.') {
        Some(i) => mantisse.len() - i - 1,
        None => 0,
    }
}

/// Insère le séparateur de milliers dans la partie entière.
fn groupe_milliers(s: &str) -> String {
    let (signe, reste) = match s.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", s),
    };
    let (entier, fraction) = match reste.find('.') {
        Some(i) => (&reste[..i], &reste[i..]),
        None => (reste, ""),
    };

    let chiffres: Vec<char> = entier.chars().collect();
    let mut groupe = String::with_capacity(entier.len() + entier.len() / 3);
    for (k, c) in chiffres.iter().enumerate() {
        if k > 0 && (chiffres.len() - k) % 3 == 0 {
            groupe.push(SEPARATEUR_MILLIERS);
        }
        groupe.push(*c);
    }

    format!("{signe}{groupe}{fraction}")
}
