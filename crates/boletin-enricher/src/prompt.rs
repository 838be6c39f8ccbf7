//! Prompt engineering for the structured summary request

/// Builds the strict-JSON summary prompt for one document.
pub struct PromptBuilder {
    text: String,
    title: String,
    fallback_source: String,
    partition: Option<String>,
    truncated: bool,
}

impl PromptBuilder {
    /// Create a prompt builder for the given document text and title.
    pub fn new(
        text: impl Into<String>,
        title: impl Into<String>,
        fallback_source: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            title: title.into(),
            fallback_source: fallback_source.into(),
            partition: None,
            truncated: false,
        }
    }

    /// Supply the partition (e.g. the publication year) as context.
    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = Some(partition.into());
        self
    }

    /// Note in the prompt that the text was truncated to the length budget.
    pub fn truncated(mut self, truncated: bool) -> Self {
        self.truncated = truncated;
        self
    }

    /// Build the complete prompt.
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Instruction and format specification
        prompt.push_str(SUMMARY_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Document context
        let truncated_note = if self.truncated {
            " (Texto truncado para el resumen por límite de longitud.)"
        } else {
            ""
        };
        prompt.push_str(&format!(
            "Título del archivo: {}{}\n",
            self.title, truncated_note
        ));
        if let Some(partition) = &self.partition {
            prompt.push_str(&format!("Año estimado de expedición: {}\n", partition));
        }
        prompt.push_str(&format!(
            "Entidad emisora por defecto (si el texto no la indica): {}\n\n",
            self.fallback_source
        ));

        // 3. The text to summarize
        prompt.push_str("Texto del documento:\n");
        prompt.push_str("---\n");
        prompt.push_str(&self.text);
        prompt.push_str("\n---\n\n");

        // 4. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const SUMMARY_INSTRUCTIONS: &str = r#"Eres un asistente experto en derecho administrativo colombiano. Resume en español claro y no técnico el siguiente decreto o regulación.

El resumen debe indicar:
- De qué trata
- A quién aplica
- Los puntos clave principales
Máximo 200 palabras."#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Responde ÚNICAMENTE con un objeto JSON válido con estas claves:
{
  "summary": "resumen en español claro y conciso",
  "themes": ["etiqueta corta", "otra etiqueta"],
  "source": "entidad que expide el documento"
}

Recuerda: solo JSON válido, sin bloques de código markdown, sin explicaciones adicionales."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_title_and_text() {
        let prompt = PromptBuilder::new("Artículo 1. ...", "Decreto-0123.pdf", "MinCIT").build();
        assert!(prompt.contains("Decreto-0123.pdf"));
        assert!(prompt.contains("Artículo 1. ..."));
    }

    #[test]
    fn test_prompt_includes_partition_when_present() {
        let prompt = PromptBuilder::new("x", "d.pdf", "MinCIT")
            .with_partition("2025")
            .build();
        assert!(prompt.contains("Año estimado de expedición: 2025"));
    }

    #[test]
    fn test_prompt_omits_partition_line_when_absent() {
        let prompt = PromptBuilder::new("x", "d.pdf", "MinCIT").build();
        assert!(!prompt.contains("Año estimado"));
    }

    #[test]
    fn test_prompt_includes_fallback_source() {
        let prompt = PromptBuilder::new("x", "d.pdf", "Ministerio de Comercio").build();
        assert!(prompt.contains("Ministerio de Comercio"));
    }

    #[test]
    fn test_truncation_note() {
        let with_note = PromptBuilder::new("x", "d.pdf", "MinCIT").truncated(true).build();
        assert!(with_note.contains("Texto truncado"));

        let without = PromptBuilder::new("x", "d.pdf", "MinCIT").build();
        assert!(!without.contains("Texto truncado"));
    }

    #[test]
    fn test_prompt_requests_strict_json_keys() {
        let prompt = PromptBuilder::new("x", "d.pdf", "MinCIT").build();
        assert!(prompt.contains("\"summary\""));
        assert!(prompt.contains("\"themes\""));
        assert!(prompt.contains("\"source\""));
    }
}
