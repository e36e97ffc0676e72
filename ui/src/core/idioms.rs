//! Lead phrases for products that are about to be killed.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Fixed corpus of Spanish idioms used as list-item lead text.
pub const IDIOMS: [&str; 22] = [
    "Sentenciado a muerte",
    "¡Que les corten la cabeza!",
    "Estirar la pata",
    "Muerto como un clavo",
    "Está acabado",
    "Expirando",
    "Colgar los tenis",
    "Camino del matadero",
    "Otro que muerde el polvo",
    "Apagar el interruptor",
    "Como un tenedor en el enchufe",
    "Programado para ser eliminado",
    "Ser exterminado",
    "Tirado por el inodoro",
    "Desenchufado",
    "Desapareciendo",
    "Haciendo ¡puf!",
    "Volverse cenizas",
    "Recibir un KO",
    "Quedarse sin energía",
    "Desvaneciéndose en la oscuridad",
    "Flotando boca arriba",
];

/// A single idiom drawn uniformly from [`IDIOMS`]. The choice is made once at
/// construction and kept for the lifetime of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadPhraseSelector {
    idiom: &'static str,
}

impl LeadPhraseSelector {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            idiom: IDIOMS[rng.gen_range(0..IDIOMS.len())],
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(&mut StdRng::seed_from_u64(seed))
    }

    pub fn random() -> Self {
        Self::new(&mut rand::thread_rng())
    }

    pub fn idiom(&self) -> &'static str {
        self.idiom
    }

    /// `"<idiom> in <relative_date>, "`; the trailing comma and space are part
    /// of the contract, callers append the product name directly.
    pub fn render(&self, relative_date: &str) -> String {
        format!("{} in {relative_date}, ", self.idiom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn corpus_has_22_distinct_entries() {
        let unique: HashSet<_> = IDIOMS.iter().collect();
        assert_eq!(unique.len(), 22);
        assert!(IDIOMS.iter().all(|i| !i.trim().is_empty()));
    }

    #[test]
    fn render_matches_fixed_format() {
        let selector = LeadPhraseSelector::from_seed(7);
        let text = selector.render("3 months");
        assert!(IDIOMS.contains(&selector.idiom()));
        assert_eq!(text, format!("{} in 3 months, ", selector.idiom()));
        assert!(text.ends_with(", "));
    }

    #[test]
    fn choice_is_stable_across_renders() {
        let selector = LeadPhraseSelector::random();
        let first = selector.render("1 day");
        let second = selector.render("2 years");
        assert_eq!(first.strip_suffix(" in 1 day, "), Some(selector.idiom()));
        assert_eq!(second.strip_suffix(" in 2 years, "), Some(selector.idiom()));
    }

    #[test]
    fn seeded_selection_is_deterministic() {
        assert_eq!(
            LeadPhraseSelector::from_seed(42),
            LeadPhraseSelector::from_seed(42)
        );
    }

    #[test]
    fn every_idiom_is_reachable() {
        let seen: HashSet<_> = (0..2_000u64)
            .map(|seed| LeadPhraseSelector::from_seed(seed).idiom())
            .collect();
        assert_eq!(seen.len(), IDIOMS.len());
    }
}
