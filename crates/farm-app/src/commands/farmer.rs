//! farmctl farmer command

use clap::{Args, Subcommand};
use farm_domain::FarmerId;
use farm_usecase::FarmerDto;
use std::io::Write;

use super::emit;
use crate::App;

#[derive(Debug, Args)]
pub struct FarmerCommand {
    #[command(subcommand)]
    pub command: FarmerSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum FarmerSubcommand {
    /// Register a farmer
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long, default_value = "")]
        middle_name: String,
        #[arg(long)]
        last_name: String,
    },
    /// Show one farmer
    Get {
        id: i64,
    },
    /// List all farmers
    List,
}

fn describe(dto: &FarmerDto) -> String {
    let name = [&dto.first_name, &dto.middle_name, &dto.last_name]
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| part.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    format!("#{} {}", dto.id.unwrap_or_default(), name)
}

impl FarmerCommand {
    pub fn run(&self, app: &App, out: &mut dyn Write, json: bool) -> anyhow::Result<()> {
        match &self.command {
            FarmerSubcommand::Add {
                first_name,
                middle_name,
                last_name,
            } => {
                let created = app.farmers.add_farmer(&FarmerDto {
                    id: None,
                    first_name: first_name.clone(),
                    middle_name: middle_name.clone(),
                    last_name: last_name.clone(),
                })?;
                emit(out, json, &created, [format!("Added farmer {}", describe(&created))])
            }
            FarmerSubcommand::Get { id } => {
                let farmer = app.farmers.get_farmer_by_id(FarmerId::new(*id))?;
                emit(out, json, &farmer, [describe(&farmer)])
            }
            FarmerSubcommand::List => {
                let farmers = app.farmers.list_farmers()?;
                emit(out, json, &farmers, farmers.iter().map(describe))
            }
        }
    }
}
