/// Splits extracted text into fixed-length character chunks.
///
/// Every chunk except possibly the last holds exactly `chunk_size`
/// characters. Splitting counts characters, never bytes, so multi-byte
/// text is never cut inside a code point. Concatenating the returned
/// chunks reproduces the input exactly.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<String> {
    let chunk_size = chunk_size.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for ch in text.chars() {
        current.push(ch);
        count += 1;
        if count == chunk_size {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_concatenate_to_original() {
        let text = "a".repeat(2500);
        let chunks = chunk_text(&text, 1000);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_all_but_last_chunk_are_full() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(40);
        let chunks = chunk_text(&text, 100);
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.chars().count(), 100);
        }
        assert!(chunks.last().unwrap().chars().count() <= 100);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert!(chunk_text("", 1000).is_empty());
    }

    #[test]
    fn test_input_shorter_than_chunk_size() {
        let chunks = chunk_text("short", 1000);
        assert_eq!(chunks, vec!["short".to_string()]);
    }

    #[test]
    fn test_exact_multiple_of_chunk_size() {
        let chunks = chunk_text("abcdef", 3);
        assert_eq!(chunks, vec!["abc".to_string(), "def".to_string()]);
    }

    #[test]
    fn test_multibyte_text_never_splits_code_points() {
        let text = "héllo wörld ü".repeat(50);
        let chunks = chunk_text(&text, 7);
        assert_eq!(chunks.concat(), text);
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.chars().count(), 7);
        }
    }

    #[test]
    fn test_zero_chunk_size_does_not_loop() {
        let chunks = chunk_text("abc", 0);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.concat(), "abc");
    }
}
