// =============================================================================
// ERROR — Les échecs possibles du protocole d'énumération
// =============================================================================
//
// Trois familles d'erreurs peuvent interrompre la construction d'une table :
//
//   UnsupportedOperation → un dictionnaire de domaine ne sait pas énumérer
//   Serialization        → un dictionnaire refuse de sérialiser une valeur
//   Json                 → l'encodage textuel final a échoué
//
// Les erreurs levées par la fonction elle-même (ApplicationFailure) ne
// figurent PAS ici : elles appartiennent à l'appelant et remontent telles
// quelles (voir core::table).
//
// Aucune erreur n'est rattrapée, réessayée ou journalisée par la librairie.
//
// =============================================================================

use thiserror::Error;

/// Erreur du protocole domaine → énumération → application → sérialisation.
#[derive(Debug, Error)]
pub enum TableError {
    /// Le dictionnaire ne fournit pas la capacité demandée
    /// (typiquement `enumerate` sur `Number` ou `String`).
    #[error("opération non supportée : le dictionnaire '{dictionary}' ne sait pas faire '{operation}'")]
    UnsupportedOperation {
        dictionary: String,
        operation: &'static str,
    },

    /// Le `serialize` d'un dictionnaire a échoué.
    #[error("échec de sérialisation dans le dictionnaire '{dictionary}' : {reason}")]
    Serialization { dictionary: String, reason: String },

    #[error("échec de l'encodage JSON : {0}")]
    Json(#[from] serde_json::Error),
}

impl TableError {
    pub fn unsupported(dictionary: &str, operation: &'static str) -> Self {
        TableError::UnsupportedOperation {
            dictionary: dictionary.to_string(),
            operation,
        }
    }

    pub fn serialization(dictionary: &str, reason: impl Into<String>) -> Self {
        TableError::Serialization {
            dictionary: dictionary.to_string(),
            reason: reason.into(),
        }
    }

    /// Vrai si l'erreur signale une capacité absente
    pub fn is_unsupported(&self) -> bool {
        matches!(self, TableError::UnsupportedOperation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message_names_dictionary() {
        let err = TableError::unsupported("Number", "enumerate");
        assert!(err.is_unsupported());
        let msg = err.to_string();
        assert!(msg.contains("Number"));
        assert!(msg.contains("enumerate"));
    }

    #[test]
    fn test_serialization_is_not_unsupported() {
        let err = TableError::serialization("Number", "NaN n'a pas de forme JSON");
        assert!(!err.is_unsupported());
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_json_error_converts() {
        let raw = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TableError = raw.into();
        assert!(matches!(err, TableError::Json(_)));
    }
}
