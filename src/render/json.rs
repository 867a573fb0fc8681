// =============================================================================
// RENDER JSON — La table au format d'échange standard
// =============================================================================
//
// Format compact (canonique) pour la négation booléenne :
//
//   [{"domain":false,"codomain":true},{"domain":true,"codomain":false}]
//
// Chaque ligne est un objet à exactement deux clés, `domain` puis
// `codomain`. Le tableau suit l'ordre d'énumération du domaine.
//
// =============================================================================

use crate::core::error::TableError;
use crate::core::plain::Pair;
use super::Renderer;

/// Rendu JSON, compact ou indenté.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Json {
    pub pretty: bool,
}

impl Json {
    pub fn compact() -> Self {
        Json { pretty: false }
    }

    pub fn pretty() -> Self {
        Json { pretty: true }
    }
}

impl Renderer for Json {
    fn name(&self) -> &str {
        if self.pretty { "json-pretty" } else { "json" }
    }

    fn render(&self, table: &[Pair]) -> Result<String, TableError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(table)?
        } else {
            serde_json::to_string(table)?
        };
        Ok(text)
    }
}
