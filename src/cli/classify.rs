//! Classification and configuration commands

use serde::Serialize;

use crate::error::BudgetwiseResult;

use super::Session;

#[derive(Serialize)]
struct Classification<'a> {
    description: &'a str,
    category: &'a str,
}

/// Print the category predicted for a description
pub fn handle_classify_command(session: &Session, description: &str) -> BudgetwiseResult<()> {
    let category = session.categorizer.classify(description);

    if session.json {
        return session.print_json(&Classification {
            description,
            category,
        });
    }

    println!("{}", category);
    Ok(())
}

#[derive(Serialize)]
struct ConfigView<'a> {
    base_dir: String,
    settings_file: String,
    snapshot_file: String,
    keyword_file: Option<String>,
    currency_symbol: &'a str,
    log_filter: &'a str,
    categories: Vec<&'a str>,
}

/// Show paths, settings and the active keyword table
pub fn handle_config_command(session: &Session) -> BudgetwiseResult<()> {
    let paths = &session.paths;
    let settings = &session.settings;

    let view = ConfigView {
        base_dir: paths.base_dir().display().to_string(),
        settings_file: paths.settings_file().display().to_string(),
        snapshot_file: paths.snapshot_file().display().to_string(),
        keyword_file: settings
            .keyword_file_path(paths)
            .map(|p| p.display().to_string()),
        currency_symbol: &settings.currency_symbol,
        log_filter: &settings.log_filter,
        categories: session.categorizer.table().categories().collect(),
    };

    if session.json {
        return session.print_json(&view);
    }

    println!("BudgetWise Configuration");
    println!("========================");
    println!("Base directory:  {}", view.base_dir);
    println!("Settings file:   {}", view.settings_file);
    println!("Snapshot file:   {}", view.snapshot_file);
    println!(
        "Keyword table:   {}",
        view.keyword_file.as_deref().unwrap_or("built-in")
    );
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", view.currency_symbol);
    println!("  Log filter:      {}", view.log_filter);
    println!();
    println!("Categories (in match order):");
    for (i, category) in view.categories.iter().enumerate() {
        println!("  {}. {}", i + 1, category);
    }

    Ok(())
}
