//! `handlegen styles`: style presets and length classes.

use serde::Serialize;

use handlegen_core::domain::{
    DEFAULT_STYLE, UsernameLength,
    vocabulary::{SUGGESTED_LENGTHS, SUGGESTED_STYLES},
};

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct LengthInfo {
    name: UsernameLength,
    budget: usize,
}

#[derive(Debug, Serialize)]
struct Catalogue {
    styles: &'static [&'static str],
    default_style: &'static str,
    lengths: Vec<LengthInfo>,
}

fn catalogue() -> Catalogue {
    Catalogue {
        styles: &SUGGESTED_STYLES,
        default_style: DEFAULT_STYLE,
        lengths: SUGGESTED_LENGTHS
            .iter()
            .map(|&name| LengthInfo {
                name,
                budget: name.budget(),
            })
            .collect(),
    }
}

pub fn execute(output: OutputManager) -> CliResult<()> {
    let catalogue = catalogue();

    if output.format() == OutputFormat::Json {
        return output.json(&catalogue);
    }

    output.header("Styles:")?;
    for style in catalogue.styles {
        output.data(&format!("  {style}"))?;
    }
    output.print(&format!(
        "  (any word works; default '{}', empty for a random adjective)",
        catalogue.default_style
    ))?;

    output.header("Lengths:")?;
    for length in &catalogue.lengths {
        output.data(&format!(
            "  {:<8} up to {} chars",
            length.name.as_str(),
            length.budget
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_lists_every_length_with_budget() {
        let c = catalogue();
        let budgets: Vec<_> = c.lengths.iter().map(|l| l.budget).collect();
        assert_eq!(budgets, [8, 12, 18]);
        assert!(c.styles.contains(&"minimal"));
    }

    #[test]
    fn catalogue_serialises_lengths_lowercase() {
        let json = serde_json::to_string(&catalogue()).unwrap();
        assert!(json.contains(r#"{"name":"short","budget":8}"#));
    }
}
