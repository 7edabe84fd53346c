use std::collections::HashSet;

use crate::models::Footnote;

pub fn check(footnotes: &[Footnote]) {
    let mut seen = HashSet::new();
    for note in footnotes {
        assert!(seen.insert(note.id.as_str()), "duplicate id: {:?}", note.id);
        assert!(
            note.is_referenced() || note.is_defined(),
            "footnote {:?} was neither cited nor defined",
            note.id
        );
        assert!(
            note.references
                .windows(2)
                .all(|w| w[0].position < w[1].position),
            "references of {:?} are not in scan order",
            note.id
        );
        assert_eq!(note.body, note.body.trim(), "body of {:?} is not trimmed", note.id);
    }

    let cited = footnotes.iter().take_while(|n| n.is_referenced()).count();
    assert!(
        footnotes[cited..].iter().all(|n| !n.is_referenced()),
        "definition-only footnotes must follow every cited footnote"
    );
    assert!(
        footnotes[..cited]
            .windows(2)
            .all(|w| w[0].first_reference() < w[1].first_reference()),
        "cited footnotes are not ordered by first citation"
    );
}
