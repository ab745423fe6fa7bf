//! Static UI string table. Keys are dotted paths such as `nav.audit`.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use crate::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            other => Err(Error::External(anyhow::anyhow!("Unsupported language: {}", other))),
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("nav.dashboard", "Dashboard"),
    ("nav.audit", "SEO Audit"),
    ("nav.keywords", "Keywords"),
    ("nav.writer", "AI Writer"),
    ("nav.tracker", "Rank Tracker"),
    ("nav.billing", "Billing"),
    ("nav.signout", "Sign Out"),
    ("common.analyze", "Analyze"),
    ("common.loading", "Processing..."),
    ("common.error", "An error occurred"),
    ("common.export", "Export CSV"),
    ("common.filters", "Filters"),
    ("common.difficulty", "Difficulty"),
    ("common.volume", "Volume"),
    ("common.intent", "Intent"),
    ("common.keyword", "Keyword"),
    ("common.actions", "Actions"),
    ("common.score", "Score"),
    ("common.impact", "Impact"),
    ("common.critical", "Critical"),
    ("common.warning", "Warning"),
    ("common.info", "Info"),
    ("common.upgrade", "Upgrade"),
    ("common.currentPlan", "Current Plan"),
    ("keywords.title", "Keyword Explorer"),
    ("keywords.subtitle", "Uncover high-intent keywords using Gemini AI insights."),
    ("keywords.placeholder", "Enter seed keyword (e.g., 'sustainable fashion')"),
    ("keywords.analyzeBtn", "Analyze Keywords"),
    ("keywords.sortByKd", "Sort by Difficulty"),
    ("keywords.noKeywords", "No keywords to display"),
    ("keywords.noKeywordsSub", "Enter a seed keyword above to start generating AI-powered suggestions."),
    ("audit.title", "SEO Intelligence Scan"),
    ("audit.subtitle", "Deep crawling & technical diagnostic powered by Gemini 3 Logic Layer."),
    ("audit.scanBtn", "Start Audit"),
    ("audit.exportPdf", "Export White-Label PDF"),
    ("audit.scoreLabel", "Aggregate SEO Score"),
    ("audit.securityTitle", "Security Intelligence"),
    ("audit.protocol", "Protocol Integrity"),
];

const FR: &[(&str, &str)] = &[
    ("nav.dashboard", "Tableau de bord"),
    ("nav.audit", "Audit SEO"),
    ("nav.keywords", "Mots-clés"),
    ("nav.writer", "Rédacteur IA"),
    ("nav.tracker", "Suivi de position"),
    ("nav.billing", "Facturation"),
    ("nav.signout", "Déconnexion"),
    ("common.analyze", "Analyser"),
    ("common.loading", "Traitement..."),
    ("common.error", "Une erreur est survenue"),
    ("common.export", "Exporter CSV"),
    ("common.filters", "Filtres"),
    ("common.difficulty", "Difficulté"),
    ("common.volume", "Volume"),
    ("common.intent", "Intention"),
    ("common.keyword", "Mot-clé"),
    ("common.actions", "Actions"),
    ("common.score", "Score"),
    ("common.impact", "Impact"),
    ("common.critical", "Critique"),
    ("common.warning", "Avertissement"),
    ("common.info", "Info"),
    ("common.upgrade", "Améliorer"),
    ("common.currentPlan", "Plan Actuel"),
    ("keywords.title", "Explorateur de Mots-clés"),
    ("keywords.subtitle", "Découvrez des mots-clés à forte intention via l'IA Gemini."),
    ("keywords.placeholder", "Entrez un mot-clé (ex: 'mode durable')"),
    ("keywords.analyzeBtn", "Analyser les Mots-clés"),
    ("keywords.sortByKd", "Trier par Difficulté"),
    ("keywords.noKeywords", "Aucun mot-clé à afficher"),
    ("keywords.noKeywordsSub", "Entrez un mot-clé racine pour générer des suggestions boostées par l'IA."),
    ("audit.title", "Scan d'Intelligence SEO"),
    ("audit.subtitle", "Exploration profonde et diagnostic technique via Gemini 3."),
    ("audit.scanBtn", "Lancer l'Audit"),
    ("audit.exportPdf", "Exporter PDF White-Label"),
    ("audit.scoreLabel", "Score SEO Global"),
    ("audit.securityTitle", "Intelligence Sécurité"),
    ("audit.protocol", "Intégrité du Protocole"),
];

lazy_static! {
    static ref TABLES: HashMap<Language, HashMap<&'static str, &'static str>> = {
        let mut tables = HashMap::new();
        tables.insert(Language::En, EN.iter().copied().collect());
        tables.insert(Language::Fr, FR.iter().copied().collect());
        tables
    };
}

/// Looks `key` up for `lang`, falling back to English and then to the key itself.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    TABLES
        .get(&lang)
        .and_then(|t| t.get(key))
        .or_else(|| TABLES.get(&Language::En).and_then(|t| t.get(key)))
        .copied()
        .unwrap_or(key)
}

pub fn table(lang: Language) -> BTreeMap<&'static str, &'static str> {
    TABLES
        .get(&lang)
        .map(|t| t.iter().map(|(k, v)| (*k, *v)).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(translate(Language::En, "nav.audit"), "SEO Audit");
        assert_eq!(translate(Language::Fr, "nav.audit"), "Audit SEO");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(translate(Language::Fr, "nav.unknown"), "nav.unknown");
    }

    #[test]
    fn test_tables_cover_the_same_keys() {
        let en: Vec<_> = table(Language::En).into_keys().collect();
        let fr: Vec<_> = table(Language::Fr).into_keys().collect();
        assert_eq!(en, fr);
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("FR".parse::<Language>().unwrap(), Language::Fr);
        assert!("de".parse::<Language>().is_err());
    }
}
