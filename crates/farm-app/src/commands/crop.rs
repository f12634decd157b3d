//! farmctl crop command

use clap::{Args, Subcommand};
use farm_domain::{CropId, FarmerId};
use farm_usecase::CropDto;
use std::io::Write;

use super::emit;
use crate::App;

#[derive(Debug, Args)]
pub struct CropCommand {
    #[command(subcommand)]
    pub command: CropSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum CropSubcommand {
    /// Add a crop to an existing farmer
    Add {
        #[arg(long)]
        farmer_id: i64,
        /// Crop name
        #[arg(long)]
        name: String,
    },
    /// Show one crop
    Get {
        id: i64,
    },
    /// List the crops of a farmer
    List {
        #[arg(long)]
        farmer_id: i64,
    },
    /// Delete a crop
    Delete {
        id: i64,
    },
}

fn describe(dto: &CropDto) -> String {
    format!(
        "#{} {} (farmer {})",
        dto.id.unwrap_or_default(),
        dto.crop_name,
        dto.farmer_id
    )
}

impl CropCommand {
    pub fn run(&self, app: &App, out: &mut dyn Write, json: bool) -> anyhow::Result<()> {
        match &self.command {
            CropSubcommand::Add { farmer_id, name } => {
                let created = app.crops.add_crop(&CropDto::new(*farmer_id, name.clone()))?;
                emit(out, json, &created, [format!("Added crop {}", describe(&created))])
            }
            CropSubcommand::Get { id } => {
                let crop = app.crops.get_crop_by_id(CropId::new(*id))?;
                emit(out, json, &crop, [describe(&crop)])
            }
            CropSubcommand::List { farmer_id } => {
                let crops = app.crops.get_crops_by_farmer_id(FarmerId::new(*farmer_id))?;
                if crops.is_empty() && !json {
                    writeln!(out, "No crops for farmer {}", farmer_id)?;
                    return Ok(());
                }
                emit(out, json, &crops, crops.iter().map(describe))
            }
            CropSubcommand::Delete { id } => {
                app.crops.delete_crop(CropId::new(*id))?;
                let deleted = serde_json::json!({ "deleted": id });
                emit(out, json, &deleted, [format!("Deleted crop {}", id)])
            }
        }
    }
}
