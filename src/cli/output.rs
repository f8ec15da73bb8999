//! Output formatting utilities

use crate::application::Form;
use crate::domain::{Collection, Entry};

/// Title line printed above the list
pub const HEADER: &str = "Diario da Nana";

/// Render the header followed by every entry in order
pub fn format_entry_list(entries: &Collection) -> String {
    let mut output = format!("{}\n\n", HEADER);

    if entries.is_empty() {
        output.push_str("No entries yet\n");
        return output;
    }

    for entry in entries {
        output.push_str(&format_entry(entry));
    }
    output
}

fn format_entry(entry: &Entry) -> String {
    let mut output = format!("[{}] {}\n", entry.id, entry.title);
    for line in entry.description.lines() {
        output.push_str(&format!("    {}\n", line));
    }
    output
}

/// Render the add-entry form with its current draft
pub fn format_form(form: &Form) -> String {
    if !form.visible {
        return "No form open\n".to_string();
    }

    format!(
        "New entry\n  Title:       {}\n  Description: {}\n",
        form.draft.title, form.draft.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Draft;

    #[test]
    fn test_format_empty_list() {
        let output = format_entry_list(&Collection::new());
        assert_eq!(output, "Diario da Nana\n\nNo entries yet\n");
    }

    #[test]
    fn test_format_keeps_order() {
        let entries = Collection::seeded(Entry::default_seed()).add_at(5, "Feliz", "Foi um bom dia");
        let output = format_entry_list(&entries);

        assert_eq!(
            output,
            "Diario da Nana\n\n\
             [1] Ei você...\n    Como você está?\n\
             [5] Feliz\n    Foi um bom dia\n"
        );
    }

    #[test]
    fn test_format_multiline_description_is_indented() {
        let entries = Collection::new().add_at(1, "t", "one\ntwo");
        let output = format_entry_list(&entries);
        assert!(output.contains("    one\n    two\n"));
    }

    #[test]
    fn test_format_empty_description_has_no_body_line() {
        let entries = Collection::new().add_at(1, "", "");
        assert!(format_entry_list(&entries).ends_with("[1] \n"));
    }

    #[test]
    fn test_format_form() {
        let closed = Form::default();
        assert_eq!(format_form(&closed), "No form open\n");

        let open = Form {
            visible: true,
            draft: Draft {
                title: "Feliz".to_string(),
                description: "Foi um bom dia".to_string(),
            },
        };
        let output = format_form(&open);
        assert!(output.contains("Title:       Feliz"));
        assert!(output.contains("Description: Foi um bom dia"));
    }
}
