// src/noyau/postfixe.rs
//
// Shunting-yard -> postfixe -> évaluation f64
// Objectif:
// - Convertir la séquence infixe de Jeton en postfixe
// - Puis évaluer le postfixe sur une pile de valeurs
//
// Règles:
// - Précédence : + - (1) < * / (2) < ^ (3)
// - ^ est associatif à droite (2^3^2 = 2^(3^2) = 512), le reste à gauche
// - `)` sans `(` sur la pile => erreur (jamais de dépilage silencieux)
// - `(` restante en fin de conversion => erreur
// - Division par zéro : sémantique IEEE (inf / NaN), PAS une erreur

use super::erreur::ErreurEval;
use super::jetons::Jeton;

fn precedence(j: &Jeton) -> i32 {
    match j {
        Jeton::Plus | Jeton::Moins => 1,
        Jeton::Fois | Jeton::Division => 2,
        Jeton::Puissance => 3,
        _ => 0,
    }
}

fn est_associatif_droite(j: &Jeton) -> bool {
    matches!(j, Jeton::Puissance)
}

/// Convertit une séquence infixe en postfixe (notation polonaise inversée).
///
/// Exemple:
///   infixe:   [2, *, (, 3, +, 4, )]
///   postfixe: [2, 3, 4, +, *]
pub fn en_postfixe(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurEval> {
    let mut sortie: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Nombre(_) => sortie.push(jeton),

            Jeton::ParG => ops.push(jeton),

            Jeton::ParD => {
                // dépile jusqu’à '(' ; si la pile s’épuise avant, la ')' est orpheline
                let mut appariee = false;
                while let Some(haut) = ops.pop() {
                    if matches!(haut, Jeton::ParG) {
                        appariee = true;
                        break;
                    }
                    sortie.push(haut);
                }
                if !appariee {
                    return Err(ErreurEval::ParentheseNonAppariee);
                }
            }

            // opérateur
            _ => {
                while let Some(haut) = ops.last() {
                    if matches!(haut, Jeton::ParG) {
                        break;
                    }

                    let p_haut = precedence(haut);
                    let p_jeton = precedence(&jeton);

                    let doit_depiler = if est_associatif_droite(&jeton) {
                        p_haut > p_jeton
                    } else {
                        p_haut >= p_jeton
                    };

                    if doit_depiler {
                        sortie.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(jeton);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::ParG) {
            return Err(ErreurEval::ParentheseNonAppariee);
        }
        sortie.push(op);
    }

    Ok(sortie)
}

/// Évalue une séquence postfixe sur une pile de f64.
///
/// Chaque dépilage est validé (opérande manquante => erreur, pas de panic),
/// et il doit rester EXACTEMENT une valeur à la fin.
pub fn evaluer_postfixe(postfixe: &[Jeton]) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in postfixe {
        match jeton {
            Jeton::Nombre(texte) => {
                let v: f64 = texte
                    .parse()
                    .map_err(|_| ErreurEval::ExpressionMalFormee)?;
                pile.push(v);
            }

            Jeton::ParG | Jeton::ParD => return Err(ErreurEval::ExpressionMalFormee),

            op => {
                // droite d’abord : l’ordre compte pour - / ^
                let droite = pile.pop().ok_or(ErreurEval::ExpressionMalFormee)?;
                let gauche = pile.pop().ok_or(ErreurEval::ExpressionMalFormee)?;
                pile.push(applique_operateur(op, gauche, droite));
            }
        }
    }

    if pile.len() != 1 {
        return Err(ErreurEval::ExpressionMalFormee);
    }
    Ok(pile.pop().unwrap())
}

fn applique_operateur(op: &Jeton, gauche: f64, droite: f64) -> f64 {
    match op {
        Jeton::Plus => gauche + droite,
        Jeton::Moins => gauche - droite,
        Jeton::Fois => gauche * droite,
        Jeton::Division => gauche / droite,
        Jeton::Puissance => gauche.powf(droite),
        _ => unreachable!("appelé seulement sur un opérateur"),
    }
}
