//! Labels for wizard choice lists.

use console::style;
use hfget_core::{FileEntry, RepositorySummary};
use hfget_download::format_bytes;

/// Key hints printed above a prompt.
pub fn navigation_hint(multi_select: bool) -> String {
    let text = if multi_select {
        "Numbers or ranges (1,3-5) • all Select everything • Enter Confirm • Ctrl+C Quit"
    } else {
        "Number or text to filter • Enter Select • Ctrl+C Quit"
    };
    style(text).dim().to_string()
}

/// `owner/model (likes: 12)`.
pub fn repository_choice_label(repo: &RepositorySummary) -> String {
    format!(
        "{} {}",
        repo.name,
        style(format!("(likes: {})", repo.likes)).dim()
    )
}

/// Quantization, size and path in aligned columns.
pub fn file_choice_label(file: &FileEntry) -> String {
    format!(
        "{:<12} {:<10} {}",
        file.quantization_label(),
        format_bytes(file.size),
        style(&file.path).dim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_label_pads_columns() {
        let file = FileEntry::new("llama.Q4_K_M.gguf", Some(1536));
        let label = console::strip_ansi_codes(&file_choice_label(&file)).to_string();
        assert_eq!(label, "Q4_K_M       1.5 KB     llama.Q4_K_M.gguf");
    }

    #[test]
    fn file_label_without_size() {
        let file = FileEntry::new("model.safetensors", None);
        let label = console::strip_ansi_codes(&file_choice_label(&file)).to_string();
        assert!(label.starts_with("unknown      unknown    "));
    }

    #[test]
    fn repository_label_includes_likes() {
        let label = repository_choice_label(&RepositorySummary::new("org/model", 42));
        assert_eq!(console::strip_ansi_codes(&label), "org/model (likes: 42)");
    }
}
