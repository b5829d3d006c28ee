//! Word-aligned chunking of extracted text.
//!
//! The splitter tokenizes on whitespace and greedily accumulates words until the space-joined
//! buffer exceeds the character budget; the word that crossed the threshold is deferred to the
//! next chunk. Words are never split, so joining the words of all chunks reproduces the input
//! word sequence exactly (whitespace normalized to single spaces).

/// Split text into bounded, word-aligned chunks of at most `max_chunk_chars` rendered
/// characters.
///
/// A single word longer than the budget is emitted alone: it closes out its own chunk once
/// the next word arrives, or becomes the final chunk. Empty or all-whitespace input yields
/// no chunks.
pub fn split_into_chunks(text: &str, max_chunk_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut buffer_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        buffer_chars = if buffer.is_empty() {
            word_chars
        } else {
            buffer_chars + 1 + word_chars
        };
        buffer.push(word);

        if buffer_chars > max_chunk_chars && buffer.len() > 1 {
            let deferred = buffer[buffer.len() - 1];
            buffer.truncate(buffer.len() - 1);
            chunks.push(buffer.join(" "));
            buffer.clear();
            buffer.push(deferred);
            buffer_chars = word_chars;
        }
    }

    if !buffer.is_empty() {
        chunks.push(buffer.join(" "));
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::split_into_chunks;

    fn words_of(chunks: &[String]) -> Vec<String> {
        chunks
            .iter()
            .flat_map(|chunk| chunk.split_whitespace().map(str::to_string))
            .collect()
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(split_into_chunks("", 1000).is_empty());
        assert!(split_into_chunks("   \n\t ", 1000).is_empty());
    }

    #[test]
    fn short_input_is_a_single_chunk() {
        let chunks = split_into_chunks("one two three", 1000);
        assert_eq!(chunks, vec!["one two three"]);
    }

    #[test]
    fn threshold_defers_the_crossing_word() {
        // "alpha beta" renders at 10 chars; "gamma" pushes the buffer to 16.
        let chunks = split_into_chunks("alpha beta gamma delta", 10);
        assert_eq!(chunks, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn chunk_round_trip_preserves_word_sequence() {
        let text = "The quick brown fox jumps over the lazy dog and keeps on running far away";
        let chunks = split_into_chunks(text, 16);
        let original: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        assert_eq!(words_of(&chunks), original);
    }

    #[test]
    fn all_chunks_except_last_respect_the_budget() {
        let text = "aa bb cc dd ee ff gg hh ii jj kk ll mm nn oo pp";
        let max = 11;
        let chunks = split_into_chunks(text, max);
        assert!(chunks.len() > 1);
        for chunk in &chunks[..chunks.len() - 1] {
            assert!(chunk.chars().count() <= max, "chunk over budget: {chunk:?}");
        }
    }

    #[test]
    fn oversized_word_is_never_split() {
        let long_word = "x".repeat(40);
        let text = format!("{long_word} tail");
        let chunks = split_into_chunks(&text, 10);
        assert_eq!(chunks, vec![long_word.clone(), "tail".to_string()]);

        // As the final word it simply becomes the last chunk.
        let chunks = split_into_chunks(&format!("head {long_word}"), 10);
        assert_eq!(chunks, vec!["head".to_string(), long_word]);
    }

    #[test]
    fn twelve_hundred_single_char_words_split_into_multiple_chunks() {
        // 600 one-character words separated by spaces render at 1199 chars.
        let words: Vec<&str> = std::iter::repeat("a").take(600).collect();
        let text = words.join(" ");
        assert_eq!(text.chars().count(), 1199);

        let chunks = split_into_chunks(&text, 1000);
        assert!(chunks.len() >= 2);
        assert_eq!(words_of(&chunks).len(), 600);
    }
}
