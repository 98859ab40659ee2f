use escala_core::error::EscalaError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), EscalaError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
