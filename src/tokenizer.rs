/// Split the input text into lowercase word and punctuation tokens.
/// In a real system, you'd have a real vocab and a trained tokenizer.
/// This is just a naive demonstration.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.trim().to_lowercase();
    if lowered.is_empty() {
        return Vec::new();
    }

    // Pad every non-word, non-whitespace character with spaces so that
    // punctuation ends up as its own token after the whitespace split.
    let mut spaced = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if is_word_char(c) || c.is_whitespace() {
            spaced.push(c);
        } else {
            spaced.push(' ');
            spaced.push(c);
            spaced.push(' ');
        }
    }

    spaced.split_whitespace().map(str::to_string).collect()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
