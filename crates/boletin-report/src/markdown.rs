//! Narrative markdown report

use crate::order::sorted_records;
use boletin_domain::EnrichedRecord;
use std::collections::BTreeMap;

/// Render the narrative report for the full corpus.
pub fn render_markdown(records: &BTreeMap<String, EnrichedRecord>) -> String {
    let mut lines = Vec::new();

    lines.push("# Boletín de decretos – Resumen automático\n".to_string());
    lines.push(format!(
        "_Total de documentos resumidos: {}_\n",
        records.len()
    ));
    lines.push("---\n".to_string());

    for record in sorted_records(records) {
        lines.push(format!("## {}\n", record.display_name));

        if let Some(partition) = &record.partition {
            lines.push(format!("- Período: {}", partition));
        }
        lines.push(format!("- URL original: {}", record.url));
        if !record.local_artifact_path.is_empty() {
            lines.push(format!("- Archivo local: `{}`", record.local_artifact_path));
        }
        lines.push(format!("- Fuente: {}", record.source));
        if !record.themes.is_empty() {
            lines.push(format!("- Temas: {}", record.themes.join(", ")));
        }

        lines.push("\n**Resumen:**\n".to_string());
        lines.push(record.summary.trim().to_string());
        lines.push("\n---\n".to_string());
    }

    lines.join("\n")
}
