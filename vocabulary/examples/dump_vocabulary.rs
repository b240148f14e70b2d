//! Demonstrates loading the full vocabulary and serializing it.
//!
//! Run with: `cargo run --example dump_vocabulary -p token-namer-vocabulary`

fn main() {
    let vocabulary = token_namer_vocabulary::Vocabulary::full();

    println!("Token naming vocabulary v{}", vocabulary.version);
    println!("  Frameworks:  {}", vocabulary.frameworks.len());
    println!("  Terms:       {}", vocabulary.term_count());
    println!("  Modifiers:   {}", vocabulary.modifiers.len());
    println!("  Presets:     {}", vocabulary.presets.len());
    println!();

    for module in &vocabulary.frameworks {
        println!(
            "  {:10} {:>2} term lists, {:>2} primitive properties  {}",
            module.framework.as_str(),
            module.lists.len(),
            module.properties.len(),
            module.label,
        );
    }

    println!();

    let json = token_namer_vocabulary::serializer::json::to_json(vocabulary);
    let json_str =
        serde_json::to_string_pretty(&json).unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("JSON output ({} bytes):", json_str.len());
    let preview_end = json_str
        .char_indices()
        .nth(200)
        .map_or(json_str.len(), |(i, _)| i);
    println!("{}...", &json_str[..preview_end]);
}
