use crate::{Case, Conversion, Error};
use anyhow::{Context, Result};
use colored::*;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Sample inputs shown by `recase demo`.
pub const DEMO_INPUTS: &[&str] = &[
    "first name",
    "user_id",
    "SCREEN_NAME",
    "mobile-number",
    "Peace_tree",
    "IPV4synax",
    "Hello World_exampleString",
];

/// Write conversions in `format`.
///
/// With `show_input`, text lines read `input → output` when there is more
/// than one conversion. Otherwise each line is the bare output.
pub fn write_conversions(
    out: &mut impl Write,
    conversions: &[Conversion],
    show_input: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, conversions, show_input),
        OutputFormat::Json => write_json(out, conversions),
    }
}

fn write_text(out: &mut impl Write, conversions: &[Conversion], show_input: bool) -> Result<()> {
    let show_input = show_input && conversions.len() > 1;

    for conversion in conversions {
        if show_input {
            writeln!(
                out,
                "{} {} {}",
                conversion.input.dimmed(),
                "→".dimmed(),
                conversion.output.green().bold()
            )?;
        } else {
            writeln!(out, "{}", conversion.output)?;
        }
    }
    Ok(())
}

fn write_json(out: &mut impl Write, conversions: &[Conversion]) -> Result<()> {
    let json = serde_json::to_string_pretty(conversions).context("Failed to serialize output")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

pub fn write_demo(out: &mut impl Write, colored_output: bool) -> Result<()> {
    for (i, case) in Case::ALL.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let title = format!("{} case", case);
        if colored_output {
            writeln!(out, "{}", title.bold().underline())?;
        } else {
            writeln!(out, "{}", title)?;
        }

        for input in DEMO_INPUTS {
            let output = case.apply(input);
            if colored_output {
                writeln!(
                    out,
                    "  {} {} {}",
                    format!("{:?}", input).cyan(),
                    "→".dimmed(),
                    output.green()
                )?;
            } else {
                writeln!(out, "  {:?} → {}", input, output)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(conversions: &[Conversion], show_input: bool, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_conversions(&mut buf, conversions, show_input, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "yaml".parse::<OutputFormat>(),
            Err(Error::UnknownFormat("yaml".to_string()))
        );
    }

    #[test]
    fn test_plain_text_prints_outputs_only() {
        let conversions = vec![
            Conversion::new("first name", Case::Camel),
            Conversion::new("user_id", Case::Camel),
        ];
        assert_eq!(
            render(&conversions, false, OutputFormat::Text),
            "firstName\nuserId\n"
        );
    }

    #[test]
    fn test_show_input_pairs_each_value() {
        colored::control::set_override(false);
        let conversions = vec![
            Conversion::new("first name", Case::Kebab),
            Conversion::new("user_id", Case::Kebab),
        ];
        assert_eq!(
            render(&conversions, true, OutputFormat::Text),
            "first name → first-name\nuser_id → user-id\n"
        );
    }

    #[test]
    fn test_single_input_is_bare_even_with_show_input() {
        let conversions = vec![Conversion::new("first name", Case::Dot)];
        assert_eq!(render(&conversions, true, OutputFormat::Text), "first.name\n");
    }

    #[test]
    fn test_json_output() {
        let conversions = vec![Conversion::new("user_id", Case::Dot)];
        let rendered = render(&conversions, false, OutputFormat::Json);
        let parsed: Vec<Conversion> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, conversions);
        assert!(rendered.contains("\"case\": \"dot\""));
    }

    #[test]
    fn test_demo_lists_every_case() {
        let mut buf = Vec::new();
        write_demo(&mut buf, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("kebab case"));
        assert!(text.contains("\"first name\" → firstName"));
        assert!(text.contains("\"IPV4synax\" → ipv4synax"));
    }
}
