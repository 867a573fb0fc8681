// =============================================================================
// RENDER MARKDOWN — La table pour un humain
// =============================================================================
//
//   | domain | codomain |
//   |--------|----------|
//   | false  | true     |
//   | true   | false    |
//
// Chaque cellule contient le JSON compact de la donnée simple.
// Les `|` sont échappés pour ne pas casser les colonnes.
//
// =============================================================================

use serde_json::Value;
use crate::core::error::TableError;
use crate::core::plain::Pair;
use super::Renderer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markdown;

fn cell(value: &Value) -> Result<String, TableError> {
    Ok(serde_json::to_string(value)?.replace('|', "\\|"))
}

impl Renderer for Markdown {
    fn name(&self) -> &str {
        "markdown"
    }

    fn render(&self, table: &[Pair]) -> Result<String, TableError> {
        let mut md = String::new();
        md.push_str("| domain | codomain |\n");
        md.push_str("|--------|----------|\n");
        for pair in table {
            md.push_str(&format!("| {} | {} |\n", cell(&pair.domain)?, cell(&pair.codomain)?));
        }
        Ok(md)
    }
}
