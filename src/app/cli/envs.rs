use std::path::Path;

use crate::domain::AppError;

pub fn run(project: &Path, json: bool) -> Result<(), AppError> {
    let names = crate::app::api::environments(project)?;
    if json {
        let rendered = serde_json::to_string_pretty(&names).map_err(std::io::Error::from)?;
        println!("{rendered}");
        return Ok(());
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}
