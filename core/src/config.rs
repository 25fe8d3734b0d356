//! Normalizer configuration — the header alias table and the
//! answered-outcome vocabulary.
//!
//! The source spreadsheets come from a Brazilian call-center PBX export
//! whose column headings drift between exports ("Operador" vs "operador",
//! "Tempo Falado" vs "tempo falado"). Rather than fuzzy substring search
//! over headers, the accepted spellings live in an explicit table here,
//! resolved once when the normalizer is built.

use crate::error::MetricsResult;
use serde::{Deserialize, Serialize};

/// The canonical fields a row must be matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Date,
    Operator,
    Outcome,
    TalkTime,
    RatingAttendance,
    RatingResolution,
}

/// Accepted header spellings for one canonical field.
/// Matching is trimmed and case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnAlias {
    pub field:    CanonicalField,
    pub headers:  Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    pub aliases:           Vec<ColumnAlias>,
    /// Outcome labels that mark a call as answered. Rows with any other
    /// outcome are dropped during normalization, silently.
    pub answered_outcomes: Vec<String>,
}

impl NormalizerConfig {
    /// Load overrides from a JSON file. In tests and in deployments with
    /// standard PBX exports, `NormalizerConfig::default()` is enough.
    pub fn load(path: &str) -> MetricsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn from_json_str(json: &str) -> MetricsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        fn alias(field: CanonicalField, headers: &[&str]) -> ColumnAlias {
            ColumnAlias {
                field,
                headers: headers.iter().map(|h| h.to_string()).collect(),
            }
        }

        Self {
            aliases: vec![
                alias(CanonicalField::Date, &["data", "date", "data da chamada"]),
                alias(
                    CanonicalField::Operator,
                    &["operador", "operator", "atendente"],
                ),
                alias(
                    CanonicalField::Outcome,
                    &["status", "situação", "situacao", "resultado", "chamada"],
                ),
                alias(
                    CanonicalField::TalkTime,
                    &["tempo falado", "tempo de fala", "talk time", "duração"],
                ),
                alias(
                    CanonicalField::RatingAttendance,
                    &["pergunta 1", "pergunta1", "nota atendimento", "avaliação do atendimento"],
                ),
                alias(
                    CanonicalField::RatingResolution,
                    &["pergunta 2", "pergunta2", "nota solução", "avaliação da solução"],
                ),
            ],
            answered_outcomes: vec![
                "Atendidas".to_string(),
                "Atendida".to_string(),
                "Atendido".to_string(),
                "Answered".to_string(),
                "Atendida com sucesso".to_string(),
                "Concluída".to_string(),
            ],
        }
    }
}
