use super::cli::OutputFormat;
use super::error::CliError;
use prettytable::*;
use serde::Serialize;
use slater::elements::{
    MAX_ATOMIC_NUMBER, atomic_number_to_symbol, element_symbol_to_atomic_number_ignore_case,
};
use slater::{ElectronConfiguration, ShieldingResult, ShieldingRule};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// One evaluated element together with the configuration it was computed from.
#[derive(Serialize)]
pub struct ReportRow {
    pub symbol: &'static str,
    pub configuration: ElectronConfiguration,
    #[serde(flatten)]
    pub result: ShieldingResult,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    elements: &'a [ReportRow],
}

/// Expands element arguments into atomic numbers, keeping the given order.
///
/// An empty argument list selects `all`.
pub fn resolve_elements(specs: &[String], all: Vec<u8>) -> Result<Vec<u8>, CliError> {
    if specs.is_empty() {
        return Ok(all);
    }

    let mut atomic_numbers = Vec::new();
    for spec in specs {
        atomic_numbers.extend(parse_element_spec(spec)?);
    }
    Ok(atomic_numbers)
}

fn parse_element_spec(spec: &str) -> Result<Vec<u8>, CliError> {
    let invalid = |details: String| CliError::ElementSpec {
        spec: spec.to_string(),
        details,
    };

    match spec.split_once('-') {
        Some((start, end)) => {
            let start = parse_element(start.trim()).ok_or_else(|| {
                invalid(format!("unknown range start '{}'", start.trim()))
            })?;
            let end = parse_element(end.trim())
                .ok_or_else(|| invalid(format!("unknown range end '{}'", end.trim())))?;
            if start > end {
                return Err(invalid(format!(
                    "range start {} is greater than range end {}",
                    start, end
                )));
            }
            Ok((start..=end).collect())
        }
        None => parse_element(spec.trim())
            .map(|z| vec![z])
            .ok_or_else(|| invalid("not an element symbol or atomic number".to_string())),
    }
}

fn parse_element(s: &str) -> Option<u8> {
    if let Ok(num) = s.parse::<u8>() {
        return (1..=MAX_ATOMIC_NUMBER).contains(&num).then_some(num);
    }
    element_symbol_to_atomic_number_ignore_case(s)
}

pub fn symbol_for(atomic_number: u8) -> &'static str {
    atomic_number_to_symbol(atomic_number).unwrap_or("??")
}

pub fn get_writer(output_path: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match output_path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

pub fn write_results(
    mut writer: Box<dyn Write>,
    rows: &[ReportRow],
    format: &OutputFormat,
    precision: usize,
    source_name: &str,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Pretty => write_pretty_table(&mut writer, rows, precision, source_name)?,
        OutputFormat::Csv => write_csv(&mut writer, rows, precision)?,
        OutputFormat::Json => write_json(&mut writer, rows, source_name)?,
    }
    writer.flush()?;
    Ok(())
}

fn rule_label(rule: &ShieldingRule) -> &'static str {
    match rule {
        ShieldingRule::Penetrating { .. } => "s/p",
        ShieldingRule::Inner { .. } => "d/f",
    }
}

fn write_pretty_table(
    writer: &mut dyn Write,
    rows: &[ReportRow],
    precision: usize,
    source_name: &str,
) -> Result<(), CliError> {
    let box_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Title],
            format::LineSeparator::new('═', '╪', '╞', '╡'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let mut title_table = Table::new();
    title_table.set_format(box_format);
    title_table.add_row(row![bc->"Slater Effective Nuclear Charges"]);
    title_table.print(writer)?;
    writeln!(writer)?;

    let mut summary_table = Table::new();
    summary_table.set_format(box_format);
    summary_table.add_row(row![b->"Configurations:", source_name]);
    summary_table.add_row(row![b->"Elements:", rows.len()]);
    summary_table.print(writer)?;
    writeln!(writer)?;

    let mut data_table = Table::new();
    data_table.set_format(box_format);
    data_table.set_titles(row![
        bc->"Z", bc->"Element", bc->"Configuration", bc->"Outer", bc->"Rule", bc->"S", bc->"Z_eff"
    ]);

    for row in rows {
        let result = &row.result;
        data_table.add_row(row![
            r->result.atomic_number,
            l->row.symbol,
            l->row.configuration,
            l->result.outer_group,
            c->rule_label(&result.rule),
            r->format!("{:.prec$}", result.shielding, prec = precision),
            r->format!("{:.prec$}", result.effective_charge, prec = precision)
        ]);
    }

    data_table.print(writer)?;

    Ok(())
}

fn write_csv(writer: &mut dyn Write, rows: &[ReportRow], precision: usize) -> Result<(), CliError> {
    writeln!(
        writer,
        "atomic_number,element,configuration,outer_group,rule,same_group,adjacent_sp,adjacent_df,deeper,shielding,effective_charge"
    )?;
    for row in rows {
        let result = &row.result;
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{:.*},{:.*}",
            result.atomic_number,
            row.symbol,
            row.configuration,
            result.outer_group,
            rule_label(&result.rule),
            result.buckets.same_group,
            result.buckets.adjacent_sp,
            result.buckets.adjacent_df,
            result.buckets.deeper,
            precision,
            result.shielding,
            precision,
            result.effective_charge
        )?;
    }
    Ok(())
}

fn write_json(writer: &mut dyn Write, rows: &[ReportRow], source_name: &str) -> Result<(), CliError> {
    let report = JsonReport {
        source: source_name,
        elements: rows,
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}
