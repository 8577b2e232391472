use std::io::{self, Write};

use payables_core::AccountPayables;

use crate::cli::OutputFormat;
use crate::error::CliError;

const RULE_WIDTH: usize = 70;

pub fn render(
    payables: &AccountPayables,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    render_to(&mut writer, payables, format, pretty)?;
    writer.flush()?;
    Ok(())
}

pub fn render_to<W: Write>(
    writer: &mut W,
    payables: &AccountPayables,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(payables)?
            } else {
                serde_json::to_string(payables)?
            };
            writeln!(writer, "{payload}")?;
        }
        OutputFormat::Table => render_table(writer, payables)?,
    }

    Ok(())
}

fn render_table<W: Write>(writer: &mut W, payables: &AccountPayables) -> io::Result<()> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    writeln!(writer, "{heavy}")?;
    writeln!(writer, "ACCOUNT PAYABLES")?;
    writeln!(writer, "{heavy}")?;
    write_row(writer, "Company", &payables.company_name)?;
    write_row(
        writer,
        "Ticker",
        &format!("{}{} ({})", payables.ticker, payables.exchange.suffix(), payables.exchange),
    )?;
    write_row(writer, "Fiscal Year", &payables.fiscal_year.to_string())?;
    if let Some(period) = &payables.period {
        write_row(writer, "Period", period)?;
    }
    if let Some(filing_date) = &payables.filing_date {
        write_row(writer, "Filing Date", filing_date)?;
    }
    write_row(writer, "Currency", &payables.currency)?;
    writeln!(writer, "{light}")?;
    write_row(writer, "Account Payables", &payables.display_amount())?;
    writeln!(writer, "{heavy}")
}

fn write_row<W: Write>(writer: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(writer, "{:<21}{value}", format!("{label}:"))
}
