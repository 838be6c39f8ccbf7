//! Browsable HTML report with client-side filtering

use crate::order::sorted_records;
use boletin_domain::EnrichedRecord;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Render the browsing report for the full corpus.
///
/// The page filters client-side: free-text match against title, summary,
/// themes, and partition, plus an exact-match dropdown on the source.
pub fn render_html(records: &BTreeMap<String, EnrichedRecord>) -> String {
    let mut html = String::new();

    html.push_str(HEADER);

    html.push_str("<h1>Boletín de decretos – Resumen automático</h1>\n");
    html.push_str(&format!(
        "<p class='subtitle'>Total de documentos resumidos: <strong>{}</strong>. \
         Use el buscador para filtrar por número, tema o contenido.</p>\n",
        records.len()
    ));

    // Filters: free-text search plus exact source selection
    html.push_str(
        r#"<div class="filters">
  <input id="searchInput" class="search-input" type="text" placeholder="Buscar por texto en el título, resumen o temas...">
  <select id="sourceSelect" class="source-select">
    <option value="">Todas las fuentes</option>
"#,
    );
    for source in distinct_sources(records) {
        html.push_str(&format!(
            "    <option value=\"{0}\">{0}</option>\n",
            escape(&source)
        ));
    }
    html.push_str("  </select>\n</div>\n");
    html.push_str(
        "<div id=\"noResults\" class=\"no-results\" style=\"display:none;\">\
         No se encontraron documentos con ese criterio.</div>\n",
    );

    html.push_str("<div id=\"cardsContainer\">\n");
    for record in sorted_records(records) {
        html.push_str(&render_card(record));
    }
    html.push_str("</div>\n");

    html.push_str(SCRIPT);
    html.push_str("</body>\n</html>\n");

    html
}

fn render_card(record: &EnrichedRecord) -> String {
    let partition = record.partition.as_deref().unwrap_or("");
    let search_blob = format!(
        "{} {} {} {}",
        record.display_name,
        record.summary,
        record.themes.join(" "),
        partition
    )
    .to_lowercase();

    let mut card = String::new();
    card.push_str(&format!(
        "<div class=\"card\" data-search=\"{}\" data-source=\"{}\">\n",
        escape(&search_blob),
        escape(&record.source)
    ));
    card.push_str(&format!("<h2>{}</h2>\n", escape(&record.display_name)));

    card.push_str("<div class=\"meta\">\n");
    if !partition.is_empty() {
        card.push_str(&format!("Período: {}<br>\n", escape(partition)));
    }
    card.push_str(&format!("Fuente: {}<br>\n", escape(&record.source)));
    card.push_str(&format!(
        "URL original: <a href=\"{0}\" target=\"_blank\">{0}</a><br>\n",
        escape(&record.url)
    ));
    if !record.local_artifact_path.is_empty() {
        card.push_str(&format!(
            "Archivo local (en entorno de ejecución): <code>{}</code><br>\n",
            escape(&record.local_artifact_path)
        ));
    }
    if !record.themes.is_empty() {
        card.push_str("Temas: ");
        for theme in &record.themes {
            card.push_str(&format!("<span class=\"theme\">{}</span> ", escape(theme)));
        }
        card.push_str("<br>\n");
    }
    card.push_str("</div>\n");

    card.push_str(&format!(
        "<div class=\"summary\">{}</div>\n",
        escape(record.summary.trim()).replace('\n', "<br>\n")
    ));
    card.push_str("</div>\n");
    card
}

fn distinct_sources(records: &BTreeMap<String, EnrichedRecord>) -> Vec<String> {
    let sources: BTreeSet<String> = records.values().map(|r| r.source.clone()).collect();
    sources.into_iter().collect()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const HEADER: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8">
  <title>Boletín de decretos – Resumen automático</title>
  <style>
    body {
      font-family: system-ui, -apple-system, BlinkMacSystemFont, sans-serif;
      max-width: 1024px;
      margin: 2rem auto;
      padding: 0 1.5rem;
      line-height: 1.6;
      background-color: #f7f7f9;
    }
    h1 {
      border-bottom: 2px solid #333;
      padding-bottom: 0.5rem;
      margin-bottom: 0.5rem;
    }
    .subtitle {
      color: #555;
      margin-bottom: 1.5rem;
    }
    .filters {
      display: flex;
      gap: 0.8rem;
      margin-bottom: 1.5rem;
    }
    .search-input {
      flex: 1;
      padding: 0.6rem 0.8rem;
      font-size: 1rem;
      border-radius: 0.5rem;
      border: 1px solid #ccc;
      box-sizing: border-box;
    }
    .source-select {
      padding: 0.6rem 0.8rem;
      font-size: 1rem;
      border-radius: 0.5rem;
      border: 1px solid #ccc;
      background-color: #fff;
    }
    .card {
      margin-bottom: 1.5rem;
      padding: 1rem 1.2rem;
      border-radius: 0.7rem;
      background-color: #ffffff;
      box-shadow: 0 1px 3px rgba(0,0,0,0.08);
    }
    .card h2 {
      margin: 0 0 0.3rem 0;
      font-size: 1.05rem;
    }
    .meta {
      font-size: 0.85rem;
      color: #666;
      margin-bottom: 0.4rem;
    }
    .theme {
      display: inline-block;
      padding: 0.05rem 0.5rem;
      border-radius: 0.6rem;
      background-color: #eef1f6;
      font-size: 0.8rem;
    }
    .summary {
      margin-top: 0.5rem;
      white-space: pre-wrap;
      font-size: 0.95rem;
    }
    a {
      color: #0645ad;
      text-decoration: none;
    }
    a:hover {
      text-decoration: underline;
    }
    .no-results {
      margin-top: 1rem;
      color: #777;
      font-style: italic;
    }
  </style>
</head>
<body>
"#;

const SCRIPT: &str = r#"<script>
  const input = document.getElementById('searchInput');
  const sourceSelect = document.getElementById('sourceSelect');
  const cardsContainer = document.getElementById('cardsContainer');
  const noResults = document.getElementById('noResults');

  function applyFilters() {
    const query = input.value.toLowerCase().trim();
    const source = sourceSelect.value;
    const cards = cardsContainer.getElementsByClassName('card');
    let visibleCount = 0;

    for (const card of cards) {
      const haystack = card.getAttribute('data-search') || '';
      const cardSource = card.getAttribute('data-source') || '';
      const matchesText = !query || haystack.indexOf(query) !== -1;
      const matchesSource = !source || cardSource === source;
      if (matchesText && matchesSource) {
        card.style.display = '';
        visibleCount++;
      } else {
        card.style.display = 'none';
      }
    }

    if (visibleCount === 0 && (query || source)) {
      noResults.style.display = 'block';
    } else {
      noResults.style.display = 'none';
    }
  }

  input.addEventListener('input', applyFilters);
  sourceSelect.addEventListener('change', applyFilters);
</script>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use boletin_domain::{DocumentReference, Enrichment};

    fn record(url: &str, name: &str, partition: Option<&str>, source: &str) -> EnrichedRecord {
        EnrichedRecord::from_parts(
            &DocumentReference::new(url, name, partition.map(String::from)),
            "downloads/x.pdf",
            Enrichment {
                summary: format!("Resumen de {}", name),
                themes: vec!["comercio".into(), "aduanas".into()],
                source: source.into(),
            },
        )
    }

    fn corpus(records: Vec<EnrichedRecord>) -> BTreeMap<String, EnrichedRecord> {
        records.into_iter().map(|r| (r.url.clone(), r)).collect()
    }

    #[test]
    fn test_report_lists_every_record() {
        let records = corpus(vec![
            record("https://x/1", "Decreto-1.pdf", Some("2025"), "MinCIT"),
            record("https://x/2", "Decreto-2.pdf", Some("2025"), "MinCIT"),
        ]);

        let html = render_html(&records);
        assert!(html.contains("Total de documentos resumidos: <strong>2</strong>"));
        assert!(html.contains("<h2>Decreto-1.pdf</h2>"));
        assert!(html.contains("<h2>Decreto-2.pdf</h2>"));
    }

    #[test]
    fn test_search_blob_covers_title_summary_themes_partition() {
        let records = corpus(vec![record(
            "https://x/1",
            "Decreto-1.pdf",
            Some("2025"),
            "MinCIT",
        )]);

        let html = render_html(&records);
        assert!(html.contains("data-search=\"decreto-1.pdf resumen de decreto-1.pdf comercio aduanas 2025\""));
    }

    #[test]
    fn test_source_dropdown_lists_distinct_sources() {
        let records = corpus(vec![
            record("https://x/1", "a.pdf", None, "MinCIT"),
            record("https://x/2", "b.pdf", None, "DIAN"),
            record("https://x/3", "c.pdf", None, "MinCIT"),
        ]);

        let html = render_html(&records);
        assert!(html.contains("<option value=\"DIAN\">DIAN</option>"));
        assert!(html.contains("<option value=\"MinCIT\">MinCIT</option>"));
        assert_eq!(html.matches("<option value=\"MinCIT\"").count(), 1);
    }

    #[test]
    fn test_source_is_exact_match_attribute() {
        let records = corpus(vec![record("https://x/1", "a.pdf", None, "MinCIT")]);
        let html = render_html(&records);
        assert!(html.contains("data-source=\"MinCIT\""));
    }

    #[test]
    fn test_markup_in_fields_is_escaped() {
        let mut r = record("https://x/1", "a.pdf", None, "MinCIT");
        r.summary = "<script>alert('x')</script>".into();

        let html = render_html(&corpus(vec![r]));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let records = corpus(vec![
            record("https://x/1", "a.pdf", Some("2025"), "MinCIT"),
            record("https://x/2", "b.pdf", None, "DIAN"),
        ]);

        assert_eq!(render_html(&records), render_html(&records));
    }
}
