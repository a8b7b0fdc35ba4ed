use spellcheck::ai::prompt_builder::{PromptTemplate, sanitize_input};

#[test]
fn test_plain_prompt_embeds_input_after_instructions() {
    let prompt = PromptTemplate::PlainText.render("Este es un texto con erores");

    assert!(prompt.starts_with("Corrige ortografía y gramática del texto."));
    assert!(prompt.contains("sin ninguna explicación adicional"));
    assert!(prompt.ends_with("Texto original: Este es un texto con erores"));
}

#[test]
fn test_structured_prompts_describe_their_output_shape() {
    let blocks = PromptTemplate::NumberedBlocks.render("hola");
    assert!(blocks.contains("\"corrections_made\""));
    assert!(blocks.contains("bloques numerados"));
    assert!(!blocks.contains("\"errors\""));

    let errors = PromptTemplate::ErrorList.render("hola");
    assert!(errors.contains("\"errors\""));
    assert!(!errors.contains("\"corrections_made\""));

    for prompt in [&blocks, &errors] {
        assert!(prompt.contains("SOLO con un objeto JSON"));
        assert!(prompt.ends_with("Texto original: hola"));
    }
}

#[test]
fn test_templates_are_distinct() {
    let templates = [
        PromptTemplate::PlainText,
        PromptTemplate::NumberedBlocks,
        PromptTemplate::ErrorList,
    ];
    for (i, a) in templates.iter().enumerate() {
        for b in &templates[i + 1..] {
            assert_ne!(a.instructions(), b.instructions());
        }
    }
}

#[test]
fn test_sanitize_input_keeps_line_breaks() {
    let input = "Primer párrafo.\n\n\tSegundo\u{0000} párrafo\u{007F}.\r\n";
    assert_eq!(
        sanitize_input(input),
        "Primer párrafo.\n\n\tSegundo párrafo.\r\n"
    );
}

#[test]
fn test_render_strips_control_characters() {
    let prompt = PromptTemplate::PlainText.render("ho\u{0007}la");
    assert!(prompt.ends_with("Texto original: hola"));
}
