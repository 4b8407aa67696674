use hotelier_core::Hotel;

use crate::error::CliError;

/// Serialize the filtered catalogue as a JSON array on stdout.
///
/// Absent scalar fields serialize as JSON null. Diagnostics never go to
/// stdout, so the output stays machine-parseable.
pub fn render(hotels: &[Hotel], pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(hotels)?
    } else {
        serde_json::to_string(hotels)?
    };
    println!("{payload}");
    Ok(())
}
