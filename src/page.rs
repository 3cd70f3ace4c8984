// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Standalone HTML page around a gallery fragment.

/// Title of the generated page.
pub const PAGE_TITLE: &str = "Projects";

const SCRIPT: &str = r#"<script>
document.addEventListener('DOMContentLoaded', () => {
  document.querySelectorAll('.project-card').forEach((card) => {
    card.addEventListener('click', (event) => {
      if (!event.target.closest('.project-link') && card.dataset.source) {
        window.open(card.dataset.source, '_blank', 'noopener');
      }
    });
  });
  document.querySelectorAll('[data-action="retry"]').forEach((button) => {
    button.addEventListener('click', () => window.location.reload());
  });
});
</script>"#;

/// Wraps a gallery fragment into a complete HTML document.
///
/// The fragment is placed inside `.projects-grid`; the embedded script opens a
/// card's source page when the card (but not one of its links) is clicked and
/// reloads the page when a retry button is pressed.
pub fn wrap_document(fragment: &str) -> String {
    let mut html = String::with_capacity(fragment.len() + SCRIPT.len() + 512);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>");
    html.push_str(PAGE_TITLE);
    html.push_str("</title>\n</head>\n<body>\n");
    html.push_str("<section id=\"projects\" class=\"projects\">\n<div class=\"projects-grid\">\n");
    html.push_str(fragment);
    html.push_str("</div>\n</section>\n");
    html.push_str(SCRIPT);
    html.push_str("\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::wrap_document;

    #[test]
    fn places_fragment_inside_grid() {
        let page = wrap_document("<div class=\"project-card\"></div>\n");

        assert!(page.starts_with("<!DOCTYPE html>"));
        let grid = page.find("<div class=\"projects-grid\">").expect("grid present");
        let card = page.find("project-card\"></div>").expect("card present");
        assert!(grid < card);
        assert!(page.contains("card.dataset.source"));
        assert!(page.contains("closest('.project-link')"));
        assert!(page.trim_end().ends_with("</html>"));
    }
}
