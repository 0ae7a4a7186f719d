use super::cli::Cli;
use super::error::CliError;
use super::io::{self, ReportRow};
use slater::{
    ConfigurationProvider, ConfigurationTable, ElectronConfiguration, ShieldingCalculator,
    SlaterError, compute_shielding, get_default_configurations,
};
use tracing::{debug, info};

pub fn run(args: Cli) -> Result<(), CliError> {
    let custom_table;
    let (table, source_name): (&ConfigurationTable, String) =
        if let Some(path) = &args.calculation.configurations {
            info!(path = %path.display(), "Loading configuration table.");
            custom_table = ConfigurationTable::load_from_file(path)?;
            (&custom_table, path.display().to_string())
        } else {
            (get_default_configurations(), "built-in".to_string())
        };

    let atomic_numbers = io::resolve_elements(&args.elements, table.atomic_numbers())?;
    debug!(count = atomic_numbers.len(), "Resolved element selection.");

    let rows = if let Some(notation) = &args.calculation.notation {
        let &[atomic_number] = atomic_numbers.as_slice() else {
            return Err(CliError::Usage(format!(
                "--notation requires exactly one element, got {}",
                atomic_numbers.len()
            )));
        };
        let configuration: ElectronConfiguration =
            notation.parse().map_err(SlaterError::from)?;
        let result = compute_shielding(atomic_number, &configuration)?;
        vec![ReportRow {
            symbol: io::symbol_for(atomic_number),
            configuration,
            result,
        }]
    } else {
        let calculator = ShieldingCalculator::new(table);
        let results = calculator.calculate_many(&atomic_numbers)?;
        results
            .into_iter()
            .map(|result| {
                let configuration = table.configuration(result.atomic_number)?;
                Ok(ReportRow {
                    symbol: io::symbol_for(result.atomic_number),
                    configuration,
                    result,
                })
            })
            .collect::<Result<Vec<_>, SlaterError>>()?
    };

    info!(elements = rows.len(), "Screening calculation finished.");

    let writer = io::get_writer(&args.output.output)?;
    io::write_results(
        writer,
        &rows,
        &args.output.format,
        args.output.precision,
        &source_name,
    )?;

    Ok(())
}
