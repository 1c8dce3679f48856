//! Tests du moteur (campagne) : scénarios de saisie complets, touche par touche.
//!
//! Chaque scénario passe par l’API publique du moteur, comme le ferait l’UI :
//! - la saisie refusée ne mute jamais l’état
//! - l’évaluation en erreur laisse la saisie intacte
//! - l’historique reste borné à 6, plus récent en tête

use super::erreur::ErreurEval;
use super::moteur::Moteur;

/* ------------------------ Helpers ------------------------ */

fn tape(m: &mut Moteur, touches: &[&str]) {
    for t in touches {
        assert!(m.ajouter_caractere(t), "touche refusée : {t:?}");
    }
}

fn eval_ok(m: &mut Moteur) -> String {
    m.evaluer()
        .unwrap_or_else(|e| panic!("évaluation en erreur : {e}"))
}

/* ------------------------ Arithmétique de base ------------------------ */

#[test]
fn addition_simple() {
    let mut m = Moteur::new();
    tape(&mut m, &["5", "+", "3"]);
    assert_eq!(eval_ok(&mut m), "8");
    assert!(m.historique().starts_with('8'));
}

#[test]
fn precedence_et_parentheses() {
    let mut m = Moteur::new();
    tape(&mut m, &["2", "*", "(", "3", "+", "4", ")"]);
    assert_eq!(m.calcul_courant(), "2*(3+4)");
    assert_eq!(eval_ok(&mut m), "14");
}

#[test]
fn precedence_sans_parentheses() {
    let mut m = Moteur::new();
    tape(&mut m, &["2", "+", "3", "*", "4"]);
    assert_eq!(eval_ok(&mut m), "14");
}

#[test]
fn puissance_au_dessus_du_produit() {
    let mut m = Moteur::new();
    tape(&mut m, &["2", "^", "3"]);
    assert_eq!(eval_ok(&mut m), "8");

    let mut m = Moteur::new();
    tape(&mut m, &["2", "*", "3", "^", "2"]);
    assert_eq!(eval_ok(&mut m), "18");
}

#[test]
fn multiplication_implicite_evaluee() {
    // 5(3) == 5 * 3
    let mut m = Moteur::new();
    tape(&mut m, &["5", "(", "3", ")"]);
    assert_eq!(m.calcul_courant(), "5*(3)");
    assert_eq!(eval_ok(&mut m), "15");
}

#[test]
fn nombres_decimaux() {
    let mut m = Moteur::new();
    tape(&mut m, &["1"]);
    assert!(m.ajouter_point());
    tape(&mut m, &["5", "+", "2"]);
    assert!(m.ajouter_point());
    tape(&mut m, &["2", "5"]);
    assert_eq!(m.calcul_courant(), "1.5+2.25");
    assert_eq!(eval_ok(&mut m), "3.75");
}

#[test]
fn signe_bascule_puis_evalue() {
    let mut m = Moteur::new();
    tape(&mut m, &["7"]);
    assert!(m.basculer_signe());
    tape(&mut m, &["+", "3"]);
    assert_eq!(m.calcul_courant(), "-7+3");
    assert_eq!(eval_ok(&mut m), "-4");
}

/* ------------------------ Retour arrière ------------------------ */

#[test]
fn retour_arriere_ronge_le_nombre() {
    let mut m = Moteur::new();
    tape(&mut m, &["1", "2"]);
    assert!(m.retour_arriere());
    assert_eq!(m.calcul_courant(), "1");
    assert!(m.retour_arriere());
    assert_eq!(m.calcul_courant(), "");
    // séquence vide : plus rien à ronger
    assert!(!m.retour_arriere());
}

#[test]
fn retour_arriere_retire_operateur_entier() {
    let mut m = Moteur::new();
    tape(&mut m, &["1", "2", "+"]);
    assert!(m.retour_arriere());
    assert_eq!(m.calcul_courant(), "12");
}

#[test]
fn retour_arriere_apres_evaluation_repart_a_neuf() {
    let mut m = Moteur::new();
    tape(&mut m, &["5", "+", "3"]);
    eval_ok(&mut m);
    assert!(!m.retour_arriere());
    assert_eq!(m.calcul_courant(), "");
}

/* ------------------------ Après « = » ------------------------ */

#[test]
fn nouvelle_saisie_remplace_le_resultat() {
    let mut m = Moteur::new();
    tape(&mut m, &["5", "+", "3"]);
    eval_ok(&mut m);
    tape(&mut m, &["5"]);
    assert_eq!(m.calcul_courant(), "5");
}

#[test]
fn operateur_enchaine_sur_le_resultat() {
    let mut m = Moteur::new();
    tape(&mut m, &["5", "+", "3"]);
    eval_ok(&mut m);
    tape(&mut m, &["+", "2"]);
    assert_eq!(m.calcul_courant(), "8+2");
    assert_eq!(eval_ok(&mut m), "10");
}

#[test]
fn detail_postfixe_de_la_derniere_evaluation() {
    let mut m = Moteur::new();
    tape(&mut m, &["5", "+", "3"]);
    assert_eq!(m.derniere_postfixe(), "");
    eval_ok(&mut m);
    assert_eq!(m.derniere_postfixe(), "5 3 +");
}

/* ------------------------ Historique ------------------------ */

#[test]
fn historique_borne_a_six_plus_recent_en_tete() {
    let mut m = Moteur::new();
    for k in 1..=8 {
        m.effacer();
        for c in k.to_string().chars() {
            assert!(m.ajouter_caractere(&c.to_string()));
        }
        tape(&mut m, &["+", "0"]);
        eval_ok(&mut m);
    }

    let historique = m.historique();
    let lignes: Vec<&str> = historique.lines().collect();
    assert_eq!(lignes, ["8", "7", "6", "5", "4", "3"]);
}

#[test]
fn historique_formate_avec_milliers() {
    let mut m = Moteur::new();
    tape(&mut m, &["2", "0", "0", "0", "*", "5", "0", "0"]);
    assert_eq!(eval_ok(&mut m), "1'000'000");
    assert_eq!(m.historique(), "1'000'000");
    // le jeton résultat reste ré-éditable (forme brute, sans apostrophes)
    assert_eq!(m.calcul_courant(), "1000000");
}

/* ------------------------ Erreurs et non-finis ------------------------ */

#[test]
fn division_par_zero_affiche_infini() {
    let mut m = Moteur::new();
    tape(&mut m, &["5", "/", "0"]);
    assert_eq!(eval_ok(&mut m), "Infinity");
    assert!(m.historique().starts_with("Infinity"));
}

#[test]
fn zero_sur_zero_affiche_nan() {
    let mut m = Moteur::new();
    tape(&mut m, &["0", "/", "0"]);
    assert_eq!(eval_ok(&mut m), "NaN");
}

#[test]
fn parenthese_orpheline_laisse_la_saisie_intacte() {
    let mut m = Moteur::new();
    tape(&mut m, &["5", ")"]);
    assert_eq!(m.evaluer(), Err(ErreurEval::ParentheseNonAppariee));
    assert_eq!(m.calcul_courant(), "5)");
    // rien ne doit avoir été poussé dans l’historique
    assert_eq!(m.historique(), "");
}

#[test]
fn parenthese_jamais_fermee_laisse_la_saisie_intacte() {
    let mut m = Moteur::new();
    tape(&mut m, &["(", "5", "+", "3"]);
    assert_eq!(m.evaluer(), Err(ErreurEval::ParentheseNonAppariee));
    assert_eq!(m.calcul_courant(), "(5+3");
}

#[test]
fn operateur_final_est_mal_forme() {
    let mut m = Moteur::new();
    tape(&mut m, &["5", "+"]);
    assert_eq!(m.evaluer(), Err(ErreurEval::ExpressionMalFormee));
    assert_eq!(m.calcul_courant(), "5+");
}

/* ------------------------ Bascule scientifique (bout en bout) ------------------------ */

#[test]
fn petit_resultat_en_scientifique() {
    // 5 / 1000 = 0.005 => sous le seuil 1e-2
    let mut m = Moteur::new();
    tape(&mut m, &["5", "/", "1", "0", "0", "0"]);
    assert_eq!(eval_ok(&mut m), "5E-3");
}

#[test]
fn grand_resultat_en_scientifique() {
    // 1e8 * 1e8 = 1e16 => au-dessus du seuil 1e15
    let mut m = Moteur::new();
    for c in "100000000*100000000".chars() {
        assert!(m.ajouter_caractere(&c.to_string()));
    }
    assert_eq!(eval_ok(&mut m), "1E16");
}
