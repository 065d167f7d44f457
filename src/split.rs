use crate::{DESCRIPTION_MARKER, POSTSCRIPT_MARKER, SOLUTION_MARKER};

/// The four ordered sections of one quest write-up, still raw: markup
/// remnants and padding are cleaned up later by the normalizer.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Sections {
    pub preamble: String,
    pub description: String,
    pub solution: String,
    pub postscript: String,
}

/// Partitions a raw write-up blob on the three section markers, in order.
/// Each split is on the FIRST occurrence of the marker; a missing marker
/// leaves its boundary unset and passes the whole remainder forward, so a
/// blob with no markers at all ends up entirely in `solution`.
pub(crate) fn split_sections(blob: &str) -> Sections {
    let mut sections = Sections::default();

    let rest = match blob.split_once(DESCRIPTION_MARKER) {
        Some((before, after)) => {
            sections.preamble = before.to_owned();
            after
        }
        None => blob,
    };

    let rest = match rest.split_once(SOLUTION_MARKER) {
        Some((before, after)) => {
            sections.description = before.to_owned();
            after
        }
        None => rest,
    };

    match rest.split_once(POSTSCRIPT_MARKER) {
        Some((before, after)) => {
            sections.solution = before.to_owned();
            sections.postscript = after.to_owned();
        }
        None => sections.solution = rest.to_owned(),
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_a_full_write_up_on_all_three_markers() {
        let blob = "Intro text<br/>Opis: desc text<br/>Solucja: sol text<br/>Dodatkowo: extra";
        let sections = split_sections(blob);
        assert_eq!(sections.preamble, "Intro text<br/>");
        assert_eq!(sections.description, " desc text<br/>");
        assert_eq!(sections.solution, " sol text<br/>");
        assert_eq!(sections.postscript, " extra");
    }

    #[test]
    fn reinserting_the_markers_reconstructs_the_blob() {
        let blob = "aOpis:bSolucja:cDodatkowo:d";
        let s = split_sections(blob);
        let rebuilt = format!(
            "{}Opis:{}Solucja:{}Dodatkowo:{}",
            s.preamble, s.description, s.solution, s.postscript
        );
        assert_eq!(rebuilt, blob);
    }

    #[test]
    fn blob_without_markers_lands_in_solution() {
        let sections = split_sections("just some text");
        assert_eq!(sections.solution, "just some text");
        assert_eq!(sections.preamble, "");
        assert_eq!(sections.description, "");
        assert_eq!(sections.postscript, "");
    }

    #[test]
    fn missing_description_marker_leaves_preamble_empty() {
        let sections = split_sections("everything Solucja: the fix");
        assert_eq!(sections.preamble, "");
        assert_eq!(sections.description, "everything ");
        assert_eq!(sections.solution, " the fix");
    }

    #[test]
    fn first_marker_occurrence_wins() {
        let sections = split_sections("Opis: a Opis: b Solucja: c");
        assert_eq!(sections.preamble, "");
        assert_eq!(sections.description, " a Opis: b ");
        assert_eq!(sections.solution, " c");
    }

    #[test]
    fn missing_postscript_marker_keeps_remainder_as_solution() {
        let sections = split_sections("pre Opis: d Solucja: everything else");
        assert_eq!(sections.solution, " everything else");
        assert_eq!(sections.postscript, "");
    }
}
