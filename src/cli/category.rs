//! Category CLI commands

use clap::Subcommand;

use crate::error::SpendlogResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all category labels with their indexes
    List,

    /// Add a new category label
    Add {
        /// Label text
        name: String,
    },

    /// Re-read the category file from disk
    Reload,

    /// Replace all labels with the default set
    Reset,
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> SpendlogResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let registry = service.list()?;
            for (i, label) in registry.labels().iter().enumerate() {
                println!("{}: {}", i, label);
            }
            println!();
            println!("Payment methods:");
            for (i, method) in service.payment_methods().iter().enumerate() {
                println!("{}: {}", i, method);
            }
        }

        CategoryCommands::Add { name } => {
            let added = service.add(&name)?;
            println!("Category '{}' added successfully.", added);
        }

        CategoryCommands::Reload => {
            let registry = service.reload()?;
            println!("Categories reloaded. Total categories: {}", registry.len());
            for (i, label) in registry.labels().iter().enumerate() {
                println!("  {}: {}", i, label);
            }
        }

        CategoryCommands::Reset => {
            let registry = service.reset()?;
            println!("Categories reset to default values:");
            for (i, label) in registry.labels().iter().enumerate() {
                println!("  {}: {}", i, label);
            }
        }
    }

    Ok(())
}
