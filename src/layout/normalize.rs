/// Split raw input into an ordered sequence of paragraphs.
///
/// Carriage returns are stripped outright, then the text splits on `\n`.
/// Empty and whitespace-only paragraphs are kept: each becomes a blank line
/// that still consumes one vertical slot in the final layout. Running this
/// over already-normalized text changes nothing.
pub fn paragraphs(text: &str) -> Vec<String> {
    text.replace('\r', "")
        .split('\n')
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carriage_returns_are_stripped() {
        assert_eq!(paragraphs("a\r\nb"), vec!["a", "b"]);
        assert_eq!(paragraphs("a\rb"), vec!["ab"]);
    }

    #[test]
    fn blank_paragraphs_survive() {
        assert_eq!(paragraphs("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(paragraphs("a\n   \nb"), vec!["a", "   ", "b"]);
    }

    #[test]
    fn idempotent_on_normalized_text() {
        let text = "one\ntwo\n\nthree";
        let once = paragraphs(text);
        let twice = paragraphs(&once.join("\n"));
        assert_eq!(once, twice);
    }

    #[test]
    fn single_paragraph() {
        assert_eq!(paragraphs("no breaks here"), vec!["no breaks here"]);
        assert_eq!(paragraphs(""), vec![""]);
    }
}
