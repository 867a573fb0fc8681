// =============================================================================
// RENDER — Mise en texte de la table de comportement
// =============================================================================
//
// Le cœur (module core) produit une BehaviorTable : des données simples.
// Ce module la transforme en TEXTE, pour l'affichage ou l'inspection.
//
// Grâce au trait Renderer, plusieurs formats coexistent :
//   - JSON compact (le format d'échange canonique, stable)
//   - JSON indenté (lecture humaine)
//   - Markdown (tableau à deux colonnes, pour la documentation)
//
// Le cœur ne connaît JAMAIS les renderers.
//
// =============================================================================

pub mod derive;
pub mod json;
pub mod markdown;

use crate::core::error::TableError;
use crate::core::plain::Pair;

/// Un format de sortie pour une table de comportement.
pub trait Renderer {
    /// Nom du format
    fn name(&self) -> &str;

    /// Transforme la table en texte, lignes dans l'ordre reçu.
    fn render(&self, table: &[Pair]) -> Result<String, TableError>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn render(&self, table: &[Pair]) -> Result<String, TableError> {
        (**self).render(table)
    }
}
