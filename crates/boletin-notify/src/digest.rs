//! Digest composition - pure and independently testable

use boletin_domain::EnrichedRecord;

/// Characters of each summary included in the digest body.
pub const SUMMARY_SNIPPET_CHARS: usize = 400;

/// A composed digest message, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    /// Subject line naming the number of new items
    pub subject: String,

    /// Plain-text body listing each new item
    pub body: String,
}

/// Compose the digest for the items processed in this run.
///
/// Returns `None` when the run processed nothing; no email is owed then.
pub fn compose_digest(items: &[EnrichedRecord]) -> Option<Digest> {
    if items.is_empty() {
        return None;
    }

    let subject = format!("[Boletín] Nuevos documentos: {} nuevo(s)", items.len());

    let mut lines = Vec::new();
    lines.push("Se han detectado nuevos documentos en el índice de publicaciones.\n".to_string());

    for item in items {
        match &item.partition {
            Some(partition) => lines.push(format!("- {} ({})", item.display_name, partition)),
            None => lines.push(format!("- {}", item.display_name)),
        }
        lines.push(format!("  Fuente: {}", item.source));
        lines.push(format!("  URL original: {}", item.url));
        lines.push(String::new());

        let summary = item.summary.trim();
        if !summary.is_empty() {
            lines.push("  Resumen:".to_string());
            lines.push(format!("  {}", snippet(summary).replace('\n', "\n  ")));
            lines.push(String::new());
        }

        if !item.themes.is_empty() {
            lines.push(format!("  Temas: {}", item.themes.join(", ")));
            lines.push(String::new());
        }
    }

    Some(Digest {
        subject,
        body: lines.join("\n"),
    })
}

fn snippet(summary: &str) -> String {
    if summary.chars().count() <= SUMMARY_SNIPPET_CHARS {
        summary.to_string()
    } else {
        let truncated: String = summary.chars().take(SUMMARY_SNIPPET_CHARS).collect();
        format!("{}...", truncated)
    }
}
