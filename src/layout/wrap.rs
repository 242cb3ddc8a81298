use crate::measure::TextMeasure;
use crate::units::Px;

/// Greedily wrap one paragraph into lines no wider than `usable_width`.
///
/// Words are packed left to right, space-joined, with no look-ahead and no
/// rebalancing. A word that doesn't fit moves whole to the next line; a
/// single word wider than `usable_width` is emitted as its own line and
/// allowed to overrun the right margin rather than being split. Empty and
/// whitespace-only paragraphs produce exactly one empty line.
pub fn wrap_paragraph(
    paragraph: &str,
    usable_width: Px,
    measure: &impl TextMeasure,
) -> Vec<String> {
    if paragraph.trim().is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    for word in paragraph.split(' ') {
        let candidate = if line.is_empty() {
            word.to_owned()
        } else {
            format!("{line} {word}").trim().to_owned()
        };

        if measure.width_of(&candidate) <= usable_width {
            line = candidate;
        } else {
            if !line.is_empty() {
                lines.push(line);
            }
            line = word.to_owned();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
