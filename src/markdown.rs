//! List-indentation normalization for summary bodies.
//!
//! The service emits nested bullet lists with whatever indentation the
//! model felt like (often 2-space), while downstream markdown rendering
//! only recognizes nesting in 4-space steps. This pass quantizes bullet
//! indentation to that step size and leaves everything else alone.

/// Normalize the indentation of `*` list markers to multiples of 4 spaces.
///
/// For each line whose trimmed content starts with `*`, the leading space
/// count is mapped to a nesting level (`leading / 4`) and the line is
/// rewritten as `level * 4` spaces plus the trimmed content. Only literal
/// space characters count toward the leading run; a tab ends it. All other
/// lines pass through byte-identical.
///
/// Pure and idempotent: normalizing twice changes nothing.
pub fn normalize(text: &str) -> String {
    text.split('\n')
        .map(normalize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn normalize_line(line: &str) -> String {
    let trimmed = line.trim();
    if !trimmed.starts_with('*') {
        return line.to_string();
    }

    let leading_spaces = line.chars().take_while(|c| *c == ' ').count();
    let indent_level = leading_spaces / 4;
    format!("{}{}", " ".repeat(indent_level * 4), trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn non_list_lines_pass_through_unchanged() {
        let text = "# Heading\n   indented prose\n\t* tab-led bullet is still a bullet";
        // The first two lines are untouched; the third trims to a bullet.
        let result = normalize(text);
        let lines: Vec<&str> = result.split('\n').collect();
        assert_eq!(lines[0], "# Heading");
        assert_eq!(lines[1], "   indented prose");
        assert_eq!(lines[2], "* tab-led bullet is still a bullet");
    }

    #[test]
    fn quantizes_four_and_eight_space_indents() {
        assert_eq!(
            normalize("    * a\n        * b"),
            "    * a\n        * b"
        );
    }

    #[test]
    fn collapses_shallow_indents_to_level_zero() {
        assert_eq!(normalize("  * a"), "* a");
        assert_eq!(normalize("   * a"), "* a");
    }

    #[test]
    fn rounds_down_between_levels() {
        // 5..7 leading spaces are still level 1.
        assert_eq!(normalize("      * a"), "    * a");
        assert_eq!(normalize("       * a"), "    * a");
    }

    #[test]
    fn strips_trailing_whitespace_on_bullet_lines_only() {
        assert_eq!(normalize("* a   "), "* a");
        assert_eq!(normalize("prose   "), "prose   ");
    }

    #[test]
    fn tabs_do_not_count_toward_indentation() {
        // The tab ends the leading-space run: 0 spaces, level 0.
        assert_eq!(normalize("\t    * a"), "* a");
        // Spaces before the tab count; the tab ends the run at 4.
        assert_eq!(normalize("    \t* a"), "    * a");
    }

    #[test]
    fn blank_and_whitespace_only_lines_are_untouched() {
        assert_eq!(normalize("* a\n\n* b"), "* a\n\n* b");
        assert_eq!(normalize("   "), "   ");
    }

    #[test]
    fn preserves_trailing_newline() {
        assert_eq!(normalize("* a\n"), "* a\n");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "",
            "  * a\n      * b\n* c",
            "prose\n\t* d",
            "    * already\n        * normal",
            "   \n* x   \n",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {:?}", input);
        }
    }
}
