//! Markdown rendering of the catalog.

use super::CatalogSummary;

/// Generate a Markdown report of the full catalog.
pub fn generate_markdown(summary: &CatalogSummary) -> String {
    let mut md = String::new();

    md.push_str("# WTREE Benchmark Parameter Catalog\n\n");
    md.push_str(&format!(
        "**Structures:** {}\n\n",
        summary.struct_names.join(", ")
    ));
    md.push_str(&format!(
        "**Key widths:** {}  \n**Generators:** {}  \n**Palette:** {}\n\n",
        summary.key_width_names.join(", "),
        summary.generator_names.join(", "),
        summary.palette
    ));

    md.push_str("## Key Count Sweep\n\n");
    let counts: Vec<String> = summary.key_counts.iter().map(|c| c.to_string()).collect();
    md.push_str(&format!("{}\n\n", counts.join(", ")));

    md.push_str("## Size Codes\n\n");
    md.push_str("| Code | Elements |\n|------|----------|\n");
    for sc in &summary.size_codes {
        md.push_str(&format!("| {} | {} |\n", sc.code, sc.count));
    }
    md.push('\n');

    md.push_str("## Routines\n\n");
    for routine in &summary.routines {
        md.push_str(&format!(
            "### {} ({} steps)\n\n",
            routine.prefix,
            routine.steps()
        ));
        md.push_str("| Step | Short label | Bounds axis |\n|------|-------------|-------------|\n");
        for i in 0..routine.steps() {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                routine.step_names[i],
                routine.short_stepnames[i],
                if routine.minmax_flags[i] { "yes" } else { "no" }
            ));
        }
        md.push('\n');
    }

    md.push_str("## Code Tables\n\n");
    write_code_table(&mut md, "Key width codes", &summary.key_width_codes);
    write_code_table(&mut md, "Generator codes", &summary.generator_codes);
    write_code_table(&mut md, "Key count codes", &summary.key_count_codes);

    md.push_str("## Build Presets\n\n");
    for preset in &summary.presets {
        md.push_str(&format!("### Build {}\n\n", preset.build_id));
        md.push_str("| Knob | Candidates |\n|------|------------|\n");
        for knob in &preset.knobs {
            let values: Vec<String> = knob.candidates.iter().map(|v| v.to_string()).collect();
            md.push_str(&format!("| {} | {} |\n", knob.name, values.join(", ")));
        }
        md.push('\n');
    }

    md
}

fn write_code_table<T: std::fmt::Display>(
    md: &mut String,
    title: &str,
    table: &crate::codes::CodeTable<T>,
) {
    md.push_str(&format!("### {}\n\n", title));
    md.push_str("| Code | Expansion |\n|------|-----------|\n");
    for entry in table.entries() {
        let values: Vec<String> = entry.values.iter().map(|v| v.to_string()).collect();
        md.push_str(&format!("| {} | {} |\n", entry.code, values.join(", ")));
    }
    md.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_has_one_row_per_size_code() {
        let summary = CatalogSummary::collect();
        let md = generate_markdown(&summary);
        for sc in &summary.size_codes {
            assert!(md.contains(&format!("| {} | {} |", sc.code, sc.count)));
        }
    }

    #[test]
    fn test_markdown_lists_all_routines() {
        let md = generate_markdown(&CatalogSummary::collect());
        assert!(md.contains("### full (6 steps)"));
        assert!(md.contains("### mma (3 steps)"));
        assert!(md.contains("### mmc (4 steps)"));
    }

    #[test]
    fn test_markdown_lists_presets() {
        let md = generate_markdown(&CatalogSummary::collect());
        assert!(md.contains("### Build 020"));
        assert!(md.contains("TARGET_BLOQ_BYTES"));
    }
}
