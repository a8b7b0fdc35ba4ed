//! Prompt templates for Spanish spelling and grammar correction.

const PLAIN_TEXT_INSTRUCTIONS: &str = "\
Corrige ortografía y gramática del texto. Devuelve únicamente el texto corregido, \
sin ninguna explicación adicional.";

const NUMBERED_BLOCKS_INSTRUCTIONS: &str = "\
Eres un corrector profesional de textos en español.
Corrige la ortografía, la gramática y la puntuación del texto, sin cambiar su significado ni su estilo.

Reglas:
1. Divide el texto corregido en bloques numerados, uno por párrafo, empezando en \"1\".
2. Registra cada palabra corregida como un par con la forma original y la forma corregida.
3. Si el texto no tiene errores, devuelve los bloques sin cambios y una lista vacía.
4. Responde SOLO con un objeto JSON válido, sin texto adicional, con esta forma exacta:
{\"text\": {\"1\": \"<bloque corregido>\", \"2\": \"<bloque corregido>\"}, \
\"corrections_made\": [{\"original\": \"<palabra original>\", \"corrected\": \"<palabra corregida>\"}]}";

const ERROR_LIST_INSTRUCTIONS: &str = "\
Eres un corrector profesional de textos en español.
Corrige la ortografía, la gramática y la puntuación del texto, sin cambiar su significado ni su estilo.

Reglas:
1. Devuelve el texto completo corregido en un único campo de texto.
2. Enumera cada error encontrado como un par con la forma original y la forma corregida.
3. Si el texto no tiene errores, devuelve el texto sin cambios y una lista vacía.
4. Responde SOLO con un objeto JSON válido, sin texto adicional, con esta forma exacta:
{\"text\": \"<texto corregido>\", \
\"errors\": [{\"original\": \"<palabra original>\", \"corrected\": \"<palabra corregida>\"}]}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTemplate {
    PlainText,
    NumberedBlocks,
    ErrorList,
}

impl PromptTemplate {
    #[must_use]
    pub fn instructions(self) -> &'static str {
        match self {
            PromptTemplate::PlainText => PLAIN_TEXT_INSTRUCTIONS,
            PromptTemplate::NumberedBlocks => NUMBERED_BLOCKS_INSTRUCTIONS,
            PromptTemplate::ErrorList => ERROR_LIST_INSTRUCTIONS,
        }
    }

    /// Substitutes the caller's text into the template.
    #[must_use]
    pub fn render(self, input_text: &str) -> String {
        let text = sanitize_input(input_text);
        format!("{}\nTexto original: {text}", self.instructions())
    }
}

/// Strips control characters other than line breaks and tabs.
#[must_use]
pub fn sanitize_input(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
        .collect()
}
