//! Usage listing and error line formatting

use ansi_term::Colour::{Blue, Red, Yellow};
use ansi_term::Style;
use std::io::Write;

use crate::{get_cur_exe, Param, ParamType, Registry, Result, Violation};

const TAB_SPACE: &str = "    ";

/// Paints `text` with `style` only if coloring is enabled
fn paint(style: Style, text: &str, colored: bool) -> String {
    if colored {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Renders the option set as `[key - label, ..]`, empty for non-option parameters
fn fmt_options(param: &Param, colored: bool) -> String {
    if param.kind != ParamType::Option || param.options.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = param
        .options
        .iter()
        .map(|(key, label)| {
            format!(
                "{} - {}",
                paint(Style::new().bold(), key, colored),
                paint(Style::new().dimmed(), label, colored)
            )
        })
        .collect();
    format!(" [{}]", pairs.join(", "))
}

/// Writes the full usage listing in registration order
pub(crate) fn write_usage(
    buf: &mut impl Write,
    title: &str,
    registry: &Registry,
    colored: bool,
) -> Result<()> {
    write!(
        buf,
        "{} {} [OPTIONS]",
        paint(Blue.bold(), "Usage:", colored),
        get_cur_exe()?
    )?;
    if !title.is_empty() {
        write!(buf, "\n\n  {}", title)?;
    }

    if registry.is_empty() {
        buf.write_all(b"\n\nOptions:\n  No parameters declared\n")?;
        return Ok(());
    }
    write!(buf, "\n\n{}\n", paint(Blue.bold(), "Options:", colored))?;

    // pad plain text first, escape codes would throw the widths off
    let lefts: Vec<String> = registry.iter().map(|param| format!("-{}", param.name)).collect();
    let max = lefts.iter().map(String::len).max().unwrap_or(0);

    for (left, param) in lefts.iter().zip(registry.iter()) {
        let padding = " ".repeat(max - left.len());
        let required = if param.required && param.kind != ParamType::Bool {
            paint(Red.normal(), "required", colored)
        } else {
            paint(Style::new().dimmed(), "optional", colored)
        };
        let kind = format!("{:<6}", param.kind);
        writeln!(
            buf,
            "  {}{}{}{} {} | {}{}",
            paint(Yellow.normal(), left, colored),
            padding,
            TAB_SPACE,
            required,
            paint(Style::new().italic(), &kind, colored),
            param.usage,
            fmt_options(param, colored)
        )?;
    }

    Ok(())
}

/// Writes one violation as a single line, including the parameter's usage text
pub(crate) fn write_violation(
    buf: &mut impl Write,
    param: &Param,
    violation: &Violation,
    colored: bool,
) -> Result<()> {
    let options = match violation {
        Violation::InvalidOption { .. } => fmt_options(param, colored),
        _ => String::new(),
    };
    writeln!(
        buf,
        "{} {} | {}{}",
        paint(Red.bold(), "Error:", colored),
        violation,
        param.usage,
        options
    )?;
    Ok(())
}
